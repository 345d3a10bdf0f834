// src/sampler.rs
//! Stratified down-sampling for oversized batches.
//!
//! Comments are scored for signal value (questions, objections, purchase
//! intent, high engagement); the top 80% of the target is taken by priority
//! and the rest is a uniform random tail so low-priority voices are still
//! represented. The RNG is injected so tests can seed it.

use crate::filter::ProcessedComment;
use crate::lexicon::Lexicon;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

pub const DEFAULT_SAMPLE_TARGET: usize = 2500;

/// Share of the target filled by priority order before the random tail.
const HIGH_PRIORITY_SHARE: f64 = 0.8;

const LIKE_BONUS: u32 = 3;
const QUESTION_BONUS: u32 = 4;
const OBJECTION_BONUS: u32 = 5;
const PURCHASE_INTENT_BONUS: u32 = 4;
const LIKE_PERCENTILE: f64 = 75.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleOutcome {
    pub sampled: Vec<ProcessedComment>,
    pub size: usize,
}

/// Down-sample with the thread RNG. See [`sample_comments_with_rng`].
pub fn sample_comments(comments: Vec<ProcessedComment>, target_size: usize) -> SampleOutcome {
    sample_comments_with_rng(comments, target_size, &mut rand::rng())
}

/// Down-sample `comments` to at most `target_size`.
///
/// Batches at or under the target are returned unchanged. Larger batches are
/// priority-scored, stably sorted descending, and cut into the 80% priority
/// slice plus a shuffled tail from the remainder.
pub fn sample_comments_with_rng<R: Rng + ?Sized>(
    comments: Vec<ProcessedComment>,
    target_size: usize,
    rng: &mut R,
) -> SampleOutcome {
    if comments.len() <= target_size {
        let size = comments.len();
        return SampleOutcome {
            sampled: comments,
            size,
        };
    }

    let likes: Vec<u64> = comments.iter().map(|c| c.like_count).collect();
    let like_p75 = percentile_u64(&likes, LIKE_PERCENTILE);

    let mut decorated: Vec<(u32, ProcessedComment)> = comments
        .into_iter()
        .map(|c| (priority_score(&c, like_p75), c))
        .collect();
    // Stable sort: ties keep original batch order.
    decorated.sort_by(|a, b| b.0.cmp(&a.0));

    let quota = (target_size as f64 * HIGH_PRIORITY_SHARE).floor() as usize;
    let tail_target = target_size - quota;

    let rest = decorated.split_off(quota);
    let mut sampled: Vec<ProcessedComment> = decorated.into_iter().map(|(_, c)| c).collect();

    let mut tail: Vec<ProcessedComment> = rest.into_iter().map(|(_, c)| c).collect();
    tail.shuffle(rng);
    sampled.extend(tail.into_iter().take(tail_target));

    let size = sampled.len();
    SampleOutcome { sampled, size }
}

/// Signal-value score. Soft-filtered comments are forced to zero no matter
/// what else they match.
fn priority_score(c: &ProcessedComment, like_p75: Option<u64>) -> u32 {
    if c.is_generic_praise || c.is_off_topic {
        return 0;
    }
    let lex = Lexicon::shared();
    let mut score = 0;
    if let Some(p75) = like_p75 {
        if c.like_count >= p75 {
            score += LIKE_BONUS;
        }
    }
    if c.clean_text.contains('?') {
        score += QUESTION_BONUS;
    }
    if lex.has_objection(&c.clean_text) {
        score += OBJECTION_BONUS;
    }
    if lex.has_purchase_intent(&c.clean_text) {
        score += PURCHASE_INTENT_BONUS;
    }
    score
}

/// Nearest-rank percentile: ascending sort, `index = ceil(p/100 * n) - 1`,
/// clamped. Empty input is an explicit no-op rather than a masked zero.
pub(crate) fn percentile_u64(values: &[u64], p: f64) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let index = ((p / 100.0 * n as f64).ceil() as usize)
        .saturating_sub(1)
        .min(n - 1);
    Some(sorted[index])
}
