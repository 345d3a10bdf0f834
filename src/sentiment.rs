// src/sentiment.rs
//! Negation-aware lexicon sentiment scoring.
//!
//! Each token found in the positive/negative lexicon contributes a base
//! weight of ±1. A negator within the 3 preceding tokens inverts the sign
//! (and the hit moves to the opposite counter); an intensifier immediately
//! before the word multiplies the (possibly inverted) weight by 1.5. The
//! weighted sum is normalized by the hit count, clamped to [-1, 1] and
//! rounded to two decimals.

use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};

/// Outside this band around zero the text stops being neutral.
const LABEL_THRESHOLD: f64 = 0.10;
const INTENSIFIER_BOOST: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    /// Normalized score in [-1, 1], rounded to 2 decimals.
    pub value: f64,
    pub label: SentimentLabel,
    pub positive_hits: u32,
    pub negative_hits: u32,
}

impl SentimentScore {
    fn neutral() -> Self {
        Self {
            value: 0.0,
            label: SentimentLabel::Neutral,
            positive_hits: 0,
            negative_hits: 0,
        }
    }
}

/// Score a single cleaned text. Deterministic, no side effects; empty or
/// non-lexical input yields the neutral zero score.
pub fn score_sentiment(text: &str) -> SentimentScore {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return SentimentScore::neutral();
    }

    let lex = Lexicon::shared();
    let mut sum = 0.0f64;
    let mut positive_hits = 0u32;
    let mut negative_hits = 0u32;

    for i in 0..tokens.len() {
        let word = tokens[i].as_str();
        let base: f64 = if lex.is_positive(word) {
            1.0
        } else if lex.is_negative(word) {
            -1.0
        } else {
            continue;
        };

        // A negator within the last 1..=3 tokens flips the contribution.
        let negated = (1..=3).any(|k| i >= k && lex.is_negator(tokens[i - k].as_str()));
        let mut weight = if negated { -base } else { base };

        if i >= 1 && lex.is_intensifier(tokens[i - 1].as_str()) {
            weight *= INTENSIFIER_BOOST;
        }

        if weight > 0.0 {
            positive_hits += 1;
        } else {
            negative_hits += 1;
        }
        sum += weight;
    }

    let hits = positive_hits + negative_hits;
    let value = round2((sum / f64::from(hits.max(1))).clamp(-1.0, 1.0));

    SentimentScore {
        value,
        label: label_for(value),
        positive_hits,
        negative_hits,
    }
}

fn label_for(value: f64) -> SentimentLabel {
    if value > LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if value < -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Tokenize into lower-cased word tokens. Inner apostrophes are kept so
/// contractions ("isn't", "don't") survive as single negator tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\'').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/* ----------------------------
Batch aggregation
---------------------------- */

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSentiment {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
    pub total: u32,
    pub average_score: f64,
    pub positive_pct: u32,
    pub negative_pct: u32,
    pub neutral_pct: u32,
}

/// Fold per-comment scores into batch counts, an average and integer
/// percentages. Empty input yields the all-zero aggregate; for non-empty
/// input the percentages sum to 100 up to independent rounding.
pub fn aggregate_sentiment(scores: &[SentimentScore]) -> AggregateSentiment {
    if scores.is_empty() {
        return AggregateSentiment::default();
    }

    let mut positive = 0u32;
    let mut negative = 0u32;
    let mut neutral = 0u32;
    let mut sum = 0.0f64;

    for s in scores {
        match s.label {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
        sum += s.value;
    }

    let total = scores.len() as u32;
    let pct = |n: u32| -> u32 { (100.0 * f64::from(n) / f64::from(total)).round() as u32 };

    AggregateSentiment {
        positive,
        negative,
        neutral,
        total,
        average_score: round2(sum / f64::from(total)),
        positive_pct: pct(positive),
        negative_pct: pct(negative),
        neutral_pct: pct(neutral),
    }
}
