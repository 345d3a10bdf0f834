// src/debug.rs
//! Dev-only, anonymized diagnostics. Raw comment text is never logged;
//! events carry hashed ids and counts only.
//!
//! Enable with ANALYZER_DEV_LOG=1 in a dev environment (debug build, or
//! APP_ENV in {local, development, dev}).

use crate::filter::FilterStats;
use tracing::info;

pub(crate) fn dev_logging_enabled() -> bool {
    let on = std::env::var("ANALYZER_DEV_LOG").ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("APP_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Short anonymous id for a text: first 6 bytes of its SHA-256, hex.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Per-batch filter counters. Counts only, never content.
pub(crate) fn dev_log_filter(stats: &FilterStats) {
    if !dev_logging_enabled() {
        return;
    }
    info!(
        target: "comment_filter",
        original = stats.original,
        emoji_only = stats.emoji_only,
        spam_promo = stats.spam_promo,
        duplicates = stats.duplicates,
        generic_praise = stats.generic_praise,
        off_topic = stats.off_topic,
        kept = stats.after_hard_filters,
        "batch filtered"
    );
}

/// Flagged bot-pattern examples, reported as hashed ids only.
pub(crate) fn dev_log_bot_examples(examples: &[String]) {
    if !dev_logging_enabled() || examples.is_empty() {
        return;
    }
    let ids: Vec<String> = examples.iter().map(|t| anon_hash(t)).collect();
    info!(
        target: "bot_patterns",
        flagged = examples.len(),
        ids = ?ids,
        "suspicious comment examples"
    );
}
