// tests/pipeline_e2e.rs
//
// End-to-end smoke: a realistic comment dump through the full pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;
use social_comment_analyzer::{process_comments_with_rng, RawComment, SentimentLabel};

fn comment_dump() -> Vec<RawComment> {
    let mut raw = Vec::new();
    for i in 0..30 {
        raw.push(RawComment::new(
            format!("viewer{i}"),
            format!("the lighting setup explanation in part {i} was really helpful"),
            (i % 9) as u64,
        ));
    }
    for i in 0..10 {
        raw.push(RawComment::new(
            format!("asker{i}"),
            format!("what diffuser are you using in shot {i}?"),
            2,
        ));
    }
    raw.push(RawComment::new("fan", "nice", 50));
    raw.push(RawComment::new("fan2", "First!", 0));
    raw.push(RawComment::new("spam", "free followers at www.bots.example", 0));
    raw.push(RawComment::new("emoji", "🔥🔥🔥", 9));
    raw.push(RawComment::new(
        "dup",
        "the lighting setup explanation in part 0 was really helpful",
        0,
    ));
    raw
}

#[test]
fn full_pipeline_produces_a_consistent_batch() {
    let raw = comment_dump();
    let mut rng = StdRng::seed_from_u64(77);
    let batch = process_comments_with_rng(&raw, 2500, &mut rng);

    // 44 survive: 45 original minus spam, emoji and the duplicate.
    let s = batch.stats;
    assert_eq!(s.original, 45);
    assert_eq!(s.spam_promo, 1);
    assert_eq!(s.emoji_only, 1);
    assert_eq!(s.duplicates, 1);
    assert_eq!(s.after_hard_filters, 42);
    assert!(!batch.sampled);
    assert_eq!(batch.comments.len(), 42);

    // Sentiment: the 30 "really helpful" comments dominate.
    assert_eq!(batch.sentiment.total, 42);
    assert!(batch.sentiment.positive >= 30);
    assert!(batch.sentiment.average_score > 0.0);
    let pct_sum = batch.sentiment.positive_pct
        + batch.sentiment.negative_pct
        + batch.sentiment.neutral_pct;
    assert!((99..=101).contains(&pct_sum));

    // Keywords reflect the cleaned texts.
    let words: Vec<&str> = batch.keywords.iter().map(|k| k.word.as_str()).collect();
    assert!(words.contains(&"lighting"), "got {words:?}");
    let themes: Vec<&str> = batch.themes.iter().map(|t| t.theme.as_str()).collect();
    assert!(themes.contains(&"lighting setup"), "got {themes:?}");

    // Soft flags survive into the processed batch.
    assert!(batch.comments.iter().any(|c| c.is_generic_praise));
    assert!(batch.comments.iter().any(|c| c.is_off_topic));
}

#[test]
fn oversized_dump_is_down_sampled_with_questions_kept() {
    let mut raw = Vec::new();
    for i in 0..120 {
        raw.push(RawComment::new(
            format!("v{i}"),
            format!("background music pick number {i} felt distracting to me"),
            (i % 4) as u64,
        ));
    }
    for i in 0..20 {
        raw.push(RawComment::new(
            format!("q{i}"),
            format!("is there a parts list for build {i}?"),
            1,
        ));
    }

    let mut rng = StdRng::seed_from_u64(13);
    let batch = process_comments_with_rng(&raw, 50, &mut rng);

    assert!(batch.sampled);
    assert_eq!(batch.comments.len(), 50);
    // Aggregate sentiment still covers the full filtered set.
    assert_eq!(batch.sentiment.total, 140);
    // Every question fits inside the 40-slot priority quota.
    let questions = batch
        .comments
        .iter()
        .filter(|c| c.clean_text.contains('?'))
        .count();
    assert_eq!(questions, 20);
}

#[test]
fn batch_serializes_for_downstream_consumers() {
    let raw = comment_dump();
    let mut rng = StdRng::seed_from_u64(3);
    let batch = process_comments_with_rng(&raw, 2500, &mut rng);
    let v = serde_json::to_value(&batch).unwrap();

    assert!(v["stats"]["afterHardFilters"].is_u64());
    assert!(v["sentiment"]["positivePct"].is_u64());
    assert!(v["comments"][0]["cleanText"].is_string());
    assert!(v["comments"][0]["isGenericPraise"].is_boolean());
    assert!(v["comments"][0]["sentiment"]["positiveHits"].is_u64());
    assert!(v["keywords"].is_array());
    assert!(v["sampled"].is_boolean());

    let label = v["comments"][0]["sentiment"]["label"].as_str().unwrap();
    assert!(["positive", "neutral", "negative"].contains(&label));
    let _ = SentimentLabel::Positive; // contract type stays exported
}
