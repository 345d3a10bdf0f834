// src/keywords.rs
//! Keyword and theme extraction: plain frequency counts over cleaned texts.
//! Unigrams are alphabetic runs of 4+ chars minus stop words; themes are
//! adjacent bigrams of the same filtered sequence within each text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TOP_KEYWORDS: usize = 20;
const TOP_THEMES: usize = 15;
const MIN_WORD_LEN: usize = 4;

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("word regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "that", "this", "with", "have", "from", "your", "just", "like", "what", "when",
        "where", "will", "would", "about", "they", "their", "there", "been", "were",
        "than", "then", "them", "because", "really", "very", "some", "more", "also",
        "into", "only", "over", "such", "even", "much", "here",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub theme: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordThemes {
    pub keywords: Vec<KeywordEntry>,
    pub themes: Vec<ThemeEntry>,
}

/// Rank the top `top_n` unigrams and top 15 bigrams across `texts`.
/// Ties break by first-seen order; empty input yields empty lists.
pub fn extract_keywords_and_themes(texts: &[String], top_n: usize) -> KeywordThemes {
    // word -> (count, first-seen rank) so ties sort deterministically
    let mut unigrams: HashMap<String, (usize, usize)> = HashMap::new();
    let mut bigrams: HashMap<String, (usize, usize)> = HashMap::new();
    let mut rank = 0usize;

    for text in texts {
        let words: Vec<String> = RE_WORD
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .filter(|w| w.chars().count() >= MIN_WORD_LEN && !STOP_WORDS.contains(w.as_str()))
            .collect();

        for w in &words {
            let entry = unigrams.entry(w.clone()).or_insert_with(|| {
                rank += 1;
                (0, rank)
            });
            entry.0 += 1;
        }
        for pair in words.windows(2) {
            let theme = format!("{} {}", pair[0], pair[1]);
            let entry = bigrams.entry(theme).or_insert_with(|| {
                rank += 1;
                (0, rank)
            });
            entry.0 += 1;
        }
    }

    KeywordThemes {
        keywords: top_entries(unigrams, top_n)
            .into_iter()
            .map(|(word, count)| KeywordEntry { word, count })
            .collect(),
        themes: top_entries(bigrams, TOP_THEMES)
            .into_iter()
            .map(|(theme, count)| ThemeEntry { theme, count })
            .collect(),
    }
}

fn top_entries(map: HashMap<String, (usize, usize)>, limit: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize, usize)> = map
        .into_iter()
        .map(|(k, (count, first_seen))| (k, count, first_seen))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    entries.truncate(limit);
    entries.into_iter().map(|(k, count, _)| (k, count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_empty_lists() {
        let out = extract_keywords_and_themes(&[], 20);
        assert!(out.keywords.is_empty());
        assert!(out.themes.is_empty());
    }

    #[test]
    fn short_words_and_stop_words_are_excluded() {
        let out = extract_keywords_and_themes(
            &texts(&["the cat sat on the camera gear", "camera gear for the win"]),
            20,
        );
        let words: Vec<&str> = out.keywords.iter().map(|k| k.word.as_str()).collect();
        assert!(words.contains(&"camera"));
        assert!(words.contains(&"gear"));
        assert!(!words.contains(&"cat"), "3-letter words must be dropped");
        assert!(!words.contains(&"the"));
    }

    #[test]
    fn counts_and_order_are_by_frequency_then_first_seen() {
        let out = extract_keywords_and_themes(
            &texts(&[
                "tripod tripod tripod lighting",
                "lighting setup",
                "setup tripod",
            ]),
            20,
        );
        assert_eq!(out.keywords[0].word, "tripod");
        assert_eq!(out.keywords[0].count, 4);
        assert_eq!(out.keywords[1].word, "lighting");
        assert_eq!(out.keywords[1].count, 2);
        // "setup" also has 2 but was seen later than "lighting".
        assert_eq!(out.keywords[2].word, "setup");
    }

    #[test]
    fn bigrams_are_adjacent_filtered_pairs_within_one_text() {
        let out = extract_keywords_and_themes(
            &texts(&[
                "camera gear review",
                "camera gear breakdown",
                "totally unrelated closing line",
            ]),
            20,
        );
        let themes: Vec<&str> = out.themes.iter().map(|t| t.theme.as_str()).collect();
        assert!(themes.contains(&"camera gear"));
        let cg = out
            .themes
            .iter()
            .find(|t| t.theme == "camera gear")
            .unwrap();
        assert_eq!(cg.count, 2);
        // Pairs never span texts.
        assert!(!themes.contains(&"review camera"));
    }

    #[test]
    fn top_n_limits_apply() {
        // Digit-free words: digits would split the alphabetic runs.
        let many: Vec<String> = (0..26)
            .map(|i| {
                let c = (b'a' + i as u8) as char;
                format!("topic{c}{c} detail{c}{c}")
            })
            .collect();
        let out = extract_keywords_and_themes(&many, 5);
        assert_eq!(out.keywords.len(), 5);
        assert!(out.themes.len() <= 15);
    }
}
