// src/filter.rs
//! Single-pass comment filter: hard rejects (emoji-only, spam/promo, exact
//! duplicates) are removed and counted; soft categories (generic praise,
//! off-topic noise) are flagged but retained so downstream stages can
//! deprioritize them without losing the retained-count invariant:
//!
//!   after_hard_filters = original - emoji_only - spam_promo - duplicates

use crate::debug::dev_log_filter;
use crate::lexicon::Lexicon;
use crate::sentiment::{score_sentiment, SentimentScore};
use crate::types::RawComment;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Clean text is capped so prompt assembly downstream stays bounded.
const CLEAN_TEXT_MAX_CHARS: usize = 200;
/// Generic praise only applies to short one-liners.
const GENERIC_PRAISE_MAX_CHARS: usize = 30;

static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
static RE_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z0-9_.]+").expect("mention regex"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// A comment that survived the hard filters, annotated and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedComment {
    pub author: String,
    pub text: String,
    pub like_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub clean_text: String,
    pub normalized_text: String,
    pub is_generic_praise: bool,
    pub is_off_topic: bool,
    pub sentiment: SentimentScore,
}

/// Per-category counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub original: usize,
    pub emoji_only: usize,
    pub spam_promo: usize,
    pub duplicates: usize,
    pub generic_praise: usize,
    pub off_topic: usize,
    pub after_hard_filters: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOutcome {
    pub comments: Vec<ProcessedComment>,
    pub stats: FilterStats,
}

/// Filter a batch of raw comments. Single pass, order-preserving; dedup is
/// exact-match on the normalized text with first occurrence winning.
pub fn filter_comments(raw: &[RawComment]) -> FilterOutcome {
    let lex = Lexicon::shared();
    let mut stats = FilterStats {
        original: raw.len(),
        ..FilterStats::default()
    };
    let mut seen: HashSet<String> = HashSet::new();
    let mut comments = Vec::with_capacity(raw.len());

    for rc in raw {
        if is_emoji_only(&rc.text) {
            stats.emoji_only += 1;
            continue;
        }
        if lex.is_spam(&rc.text) {
            stats.spam_promo += 1;
            continue;
        }
        let normalized = normalize_for_dedup(&rc.text);
        if !seen.insert(normalized.clone()) {
            stats.duplicates += 1;
            continue;
        }

        let trimmed = rc.text.trim();
        let is_generic_praise = trimmed.chars().count() <= GENERIC_PRAISE_MAX_CHARS
            && lex.is_generic_praise(trimmed);
        let is_off_topic = lex.is_off_topic(trimmed);
        if is_generic_praise {
            stats.generic_praise += 1;
        }
        if is_off_topic {
            stats.off_topic += 1;
        }

        let clean_text = clean_text(&rc.text);
        let sentiment = score_sentiment(&clean_text);

        comments.push(ProcessedComment {
            author: rc.author.clone(),
            text: rc.text.clone(),
            like_count: rc.like_count,
            published_at: rc.published_at,
            clean_text,
            normalized_text: normalized,
            is_generic_praise,
            is_off_topic,
            sentiment,
        });
    }

    stats.after_hard_filters = comments.len();
    dev_log_filter(&stats);

    FilterOutcome { comments, stats }
}

/// No alphanumeric character at all — emoji, punctuation or empty.
pub(crate) fn is_emoji_only(text: &str) -> bool {
    !text.chars().any(char::is_alphanumeric)
}

/// Lowercase, punctuation stripped, whitespace collapsed. The dedup key.
pub(crate) fn normalize_for_dedup(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode entities, strip tags and @mentions, collapse whitespace, cap length.
fn clean_text(text: &str) -> String {
    let mut out = html_escape::decode_html_entities(text).to_string();
    out = RE_TAGS.replace_all(&out, "").to_string();
    out = RE_MENTION.replace_all(&out, "").to_string();
    out = RE_WS.replace_all(&out, " ").trim().to_string();
    if out.chars().count() > CLEAN_TEXT_MAX_CHARS {
        out = out.chars().take(CLEAN_TEXT_MAX_CHARS).collect();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentLabel;

    fn rc(text: &str) -> RawComment {
        RawComment::new("viewer", text, 0)
    }

    #[test]
    fn spec_scenario_counts() {
        let batch = vec![
            rc("nice"),
            rc("Check out my channel http://x.com"),
            rc("This was genuinely helpful, thank you!"),
            rc("This was genuinely helpful, thank you!"),
        ];
        let out = filter_comments(&batch);

        assert_eq!(out.stats.original, 4);
        assert_eq!(out.stats.spam_promo, 1);
        assert_eq!(out.stats.duplicates, 1);
        assert_eq!(out.stats.generic_praise, 1);
        assert_eq!(out.stats.emoji_only, 0);
        assert_eq!(out.stats.after_hard_filters, 2);
        assert_eq!(out.comments.len(), 2);

        // "nice" survives, flagged.
        assert!(out.comments[0].is_generic_praise);
        assert!(!out.comments[1].is_generic_praise);
    }

    #[test]
    fn hard_filter_invariant_holds() {
        let batch = vec![
            rc("🔥🔥🔥"),
            rc("!!!"),
            rc("subscribe to my channel"),
            rc("Loved the pacing of this one"),
            rc("loved the pacing of this one!!"),
            rc("What camera do you use?"),
        ];
        let out = filter_comments(&batch);
        let s = out.stats;
        assert_eq!(
            s.after_hard_filters,
            s.original - s.emoji_only - s.spam_promo - s.duplicates
        );
        assert_eq!(s.after_hard_filters, out.comments.len());
        assert_eq!(s.emoji_only, 2);
        assert_eq!(s.spam_promo, 1);
        // Case/punctuation variant collapses onto the first occurrence.
        assert_eq!(s.duplicates, 1);
    }

    #[test]
    fn already_clean_input_is_a_fixed_point() {
        let batch = vec![
            rc("The editing style reminds me of early vlogs"),
            rc("Audio was a bit quiet in the middle section"),
            rc("What lens is this?"),
        ];
        let first = filter_comments(&batch);
        let again: Vec<RawComment> = first
            .comments
            .iter()
            .map(|c| RawComment::new(&c.author, &c.text, c.like_count))
            .collect();
        let second = filter_comments(&again);
        assert_eq!(second.stats.emoji_only, 0);
        assert_eq!(second.stats.spam_promo, 0);
        assert_eq!(second.stats.duplicates, 0);
        assert_eq!(second.stats.after_hard_filters, first.stats.after_hard_filters);
    }

    #[test]
    fn clean_text_strips_mentions_entities_and_caps_length() {
        let long_tail = "a ".repeat(150);
        let raw = format!("@ann Thanks&nbsp;for this <b>great</b> guide! {long_tail}");
        let out = filter_comments(&[rc(&raw)]);
        let c = &out.comments[0];
        assert!(!c.clean_text.contains('@'));
        assert!(!c.clean_text.contains("&nbsp;"));
        assert!(!c.clean_text.contains('<'));
        assert!(c.clean_text.starts_with("Thanks for this great guide!"));
        assert!(c.clean_text.chars().count() <= 200);
        assert_eq!(c.sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn off_topic_is_flagged_not_removed() {
        let out = filter_comments(&[rc("First!"), rc("who's watching in 2026")]);
        assert_eq!(out.stats.after_hard_filters, 2);
        assert_eq!(out.stats.off_topic, 2);
        assert!(out.comments.iter().all(|c| c.is_off_topic));
    }

    #[test]
    fn empty_text_counts_as_emoji_only() {
        let out = filter_comments(&[rc("")]);
        assert_eq!(out.stats.emoji_only, 1);
        assert_eq!(out.stats.after_hard_filters, 0);
    }

    #[test]
    fn normalize_for_dedup_collapses_case_and_punct() {
        assert_eq!(
            normalize_for_dedup("  Loved IT!!  really   loved it. "),
            "loved it really loved it"
        );
    }
}
