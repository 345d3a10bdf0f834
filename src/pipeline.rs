// src/pipeline.rs
//! One-way batch pipeline: raw comments -> filter (sentiment inline) ->
//! sample -> keywords/themes. Callers that need the stages separately use
//! the individual modules; this is the convenience entry for the common
//! "analyze this comment dump" request.

use crate::filter::{filter_comments, FilterStats, ProcessedComment};
use crate::keywords::{extract_keywords_and_themes, KeywordEntry, ThemeEntry, DEFAULT_TOP_KEYWORDS};
use crate::sampler::sample_comments_with_rng;
use crate::sentiment::{aggregate_sentiment, AggregateSentiment};
use crate::types::RawComment;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedBatch {
    pub comments: Vec<ProcessedComment>,
    pub stats: FilterStats,
    pub sentiment: AggregateSentiment,
    pub keywords: Vec<KeywordEntry>,
    pub themes: Vec<ThemeEntry>,
    /// True when the batch exceeded `target_size` and was down-sampled.
    pub sampled: bool,
}

/// Run the full pipeline with the thread RNG.
pub fn process_comments(raw: &[RawComment], target_size: usize) -> ProcessedBatch {
    process_comments_with_rng(raw, target_size, &mut rand::rng())
}

/// Run the full pipeline with an injected RNG (reproducible sampling).
///
/// Aggregate sentiment covers every comment that survived the hard filters,
/// not just the sampled subset; keywords are extracted from the sampled
/// clean texts that feed downstream consumers.
pub fn process_comments_with_rng<R: Rng + ?Sized>(
    raw: &[RawComment],
    target_size: usize,
    rng: &mut R,
) -> ProcessedBatch {
    let outcome = filter_comments(raw);
    let stats = outcome.stats;

    let sentiments: Vec<_> = outcome.comments.iter().map(|c| c.sentiment.clone()).collect();
    let sentiment = aggregate_sentiment(&sentiments);

    let sampled = outcome.comments.len() > target_size;
    let sample = sample_comments_with_rng(outcome.comments, target_size, rng);

    let texts: Vec<String> = sample.sampled.iter().map(|c| c.clean_text.clone()).collect();
    let kw = extract_keywords_and_themes(&texts, DEFAULT_TOP_KEYWORDS);

    ProcessedBatch {
        comments: sample.sampled,
        stats,
        sentiment,
        keywords: kw.keywords,
        themes: kw.themes,
        sampled,
    }
}
