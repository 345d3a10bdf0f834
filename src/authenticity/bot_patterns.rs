// src/authenticity/bot_patterns.rs
//! Comment-stream bot heuristics.
//!
//! Each sampled comment is checked against the bot rule set (emoji-only,
//! canned phrase, promo, very short, exact duplicate, suspicious handle);
//! the suspicious share maps to the sub-score. An empty sample is treated
//! as "nothing suspicious observed" and keeps the full score.

use super::{Severity, SubScore};
use crate::filter::{is_emoji_only, normalize_for_dedup};
use crate::lexicon::Lexicon;
use crate::types::CommentSample;
use std::collections::HashMap;
use std::collections::VecDeque;

pub const MAX_SCORE: u32 = 30;

/// Reporting caps.
const MAX_EXAMPLES: usize = 10;
const EXAMPLE_MAX_CHARS: usize = 100;

/// Near-duplicate detection (informational only, never scored).
const NEAR_DUP_SIMILARITY: f64 = 0.92;
const NEAR_DUP_WINDOW: usize = 64;

/// Rule thresholds in percent of the sampled comments.
const DUPLICATE_RATE_PENALTY_PCT: f64 = 10.0;
const EMOJI_RATE_PENALTY_PCT: f64 = 25.0;
const VERY_SHORT_WORDS: usize = 3;
const VERY_SHORT_CHARS: usize = 15;

#[derive(Debug, Clone)]
pub struct BotAnalysis {
    pub sub: SubScore,
    pub suspected_bot_percentage: f64,
    pub duplicate_rate: f64,
    pub emoji_only_rate: f64,
    /// Up to 10 flagged comments, truncated to 100 chars, for reporting.
    pub flagged_examples: Vec<String>,
    pub assessment: String,
}

pub fn analyze(comments: &[CommentSample]) -> BotAnalysis {
    if comments.is_empty() {
        return BotAnalysis {
            sub: SubScore::full(MAX_SCORE),
            suspected_bot_percentage: 0.0,
            duplicate_rate: 0.0,
            emoji_only_rate: 0.0,
            flagged_examples: Vec::new(),
            assessment: "no comment sample available".to_string(),
        };
    }

    let lex = Lexicon::shared();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut recent: VecDeque<String> = VecDeque::with_capacity(NEAR_DUP_WINDOW);
    let mut suspicious = 0usize;
    let mut duplicates = 0usize;
    let mut emoji_only = 0usize;
    let mut near_duplicates = 0usize;
    let mut examples: Vec<String> = Vec::new();

    for c in comments {
        let text = c.text.trim();
        let mut hit = false;

        if is_emoji_only(text) {
            emoji_only += 1;
            hit = true;
        }
        if lex.is_generic_praise(text) || lex.is_off_topic(text) {
            hit = true;
        }
        if lex.is_spam(text) {
            hit = true;
        }
        if text.split_whitespace().count() < VERY_SHORT_WORDS
            && text.chars().count() < VERY_SHORT_CHARS
        {
            hit = true;
        }

        let norm = normalize_for_dedup(text);
        if !norm.is_empty() {
            let count = seen.entry(norm.clone()).or_insert(0);
            *count += 1;
            if *count > 1 {
                duplicates += 1;
                hit = true;
            } else {
                // First occurrences only: near-identical variants of an
                // earlier comment (copy-paste bots shuffling emoji).
                if recent
                    .iter()
                    .any(|p| strsim::normalized_levenshtein(p, &norm) >= NEAR_DUP_SIMILARITY)
                {
                    near_duplicates += 1;
                }
                if recent.len() == NEAR_DUP_WINDOW {
                    recent.pop_front();
                }
                recent.push_back(norm);
            }
        }

        if lex.is_suspicious_username(&c.user) {
            hit = true;
        }

        if hit {
            suspicious += 1;
            if examples.len() < MAX_EXAMPLES {
                examples.push(truncate_chars(text, EXAMPLE_MAX_CHARS));
            }
        }
    }

    crate::debug::dev_log_bot_examples(&examples);

    let total = comments.len() as f64;
    let pct = round1(100.0 * suspicious as f64 / total);
    let duplicate_rate = round1(100.0 * duplicates as f64 / total);
    let emoji_only_rate = round1(100.0 * emoji_only as f64 / total);
    let near_dup_rate = round1(100.0 * near_duplicates as f64 / total);

    let mut sub = SubScore::full(MAX_SCORE);
    let assessment;
    if pct > 50.0 {
        sub.score = 5;
        assessment = "majority of sampled comments look automated";
        sub.flag(
            Severity::High,
            "High bot-like comment ratio",
            format!("{pct:.1}% of sampled comments match bot patterns"),
        );
    } else if pct > 30.0 {
        sub.score = 12;
        assessment = "large share of sampled comments look automated";
        sub.flag(
            Severity::High,
            "Elevated bot-like comment ratio",
            format!("{pct:.1}% of sampled comments match bot patterns"),
        );
    } else if pct > 15.0 {
        sub.score = 20;
        assessment = "noticeable share of bot-like comments";
        sub.flag(
            Severity::Medium,
            "Noticeable bot-like comment ratio",
            format!("{pct:.1}% of sampled comments match bot patterns"),
        );
    } else if pct > 5.0 {
        sub.score = 25;
        assessment = "minor share of bot-like comments";
        sub.flag(
            Severity::Low,
            "Minor bot-like comment ratio",
            format!("{pct:.1}% of sampled comments match bot patterns"),
        );
    } else {
        sub.score = MAX_SCORE;
        assessment = "comment stream looks organic";
        sub.positive(
            "Organic comment stream",
            format!("only {pct:.1}% of sampled comments match bot patterns"),
        );
    }

    if duplicate_rate > DUPLICATE_RATE_PENALTY_PCT {
        sub.deduct(5);
        sub.flag(
            Severity::Medium,
            "Repeated comments",
            format!("{duplicate_rate:.1}% of sampled comments are exact duplicates"),
        );
    }
    if emoji_only_rate > EMOJI_RATE_PENALTY_PCT {
        sub.deduct(3);
        sub.flag(
            Severity::Low,
            "Emoji-only comments",
            format!("{emoji_only_rate:.1}% of sampled comments carry no text"),
        );
    }
    if near_dup_rate > DUPLICATE_RATE_PENALTY_PCT {
        // Informational only: exact duplicates already paid the deduction.
        sub.flag(
            Severity::Medium,
            "Near-duplicate comments",
            format!("{near_dup_rate:.1}% of sampled comments are close variants of earlier ones"),
        );
    }

    BotAnalysis {
        sub,
        suspected_bot_percentage: pct,
        duplicate_rate,
        emoji_only_rate,
        flagged_examples: examples,
        assessment: assessment.to_string(),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
