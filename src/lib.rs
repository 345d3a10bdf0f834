// src/lib.rs
// Public library surface for integration tests (and the service layers that
// embed this core).
//
// Everything here is pure and synchronous: no I/O, no shared mutable state
// beyond the read-only lexicon and benchmark tables. Batches and accounts
// can be analyzed concurrently without locking.

pub mod authenticity;
pub mod benchmarks;
pub mod filter;
pub mod keywords;
pub mod lexicon;
pub mod pipeline;
pub mod sampler;
pub mod sentiment;
pub mod types;

mod debug;

// ---- Re-exports for stable public API ----
pub use crate::authenticity::{
    score_authenticity, score_authenticity_with, AuthenticityResult, ColorTag, PositiveSignal,
    RedFlag, Severity, SubScore, Verdict,
};
pub use crate::benchmarks::BenchmarkConfig;
pub use crate::filter::{filter_comments, FilterOutcome, FilterStats, ProcessedComment};
pub use crate::keywords::{
    extract_keywords_and_themes, KeywordEntry, KeywordThemes, ThemeEntry, DEFAULT_TOP_KEYWORDS,
};
pub use crate::pipeline::{process_comments, process_comments_with_rng, ProcessedBatch};
pub use crate::sampler::{
    sample_comments, sample_comments_with_rng, SampleOutcome, DEFAULT_SAMPLE_TARGET,
};
pub use crate::sentiment::{
    aggregate_sentiment, score_sentiment, AggregateSentiment, SentimentLabel, SentimentScore,
};
pub use crate::types::{
    AuthenticityInputs, CommentSample, ContentPost, FollowerSample, HistoricalData, Platform,
    ProfileMetrics, RawComment,
};
