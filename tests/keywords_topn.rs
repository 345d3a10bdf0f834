// tests/keywords_topn.rs
use social_comment_analyzer::extract_keywords_and_themes;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn frequency_ranking_over_a_realistic_comment_set() {
    let cleaned = texts(&[
        "the color grading tutorial was exactly what I needed",
        "color grading in resolve still confuses me",
        "please make a longer color grading video",
        "the tutorial pacing felt right",
        "grading nodes finally make sense",
    ]);
    let out = extract_keywords_and_themes(&cleaned, 20);

    let top: Vec<&str> = out.keywords.iter().map(|k| k.word.as_str()).collect();
    assert_eq!(top[0], "grading", "got {top:?}");
    assert!(top.contains(&"color"));
    assert!(top.contains(&"tutorial"));

    let themes: Vec<&str> = out.themes.iter().map(|t| t.theme.as_str()).collect();
    assert!(themes.contains(&"color grading"), "got {themes:?}");
    let cg = out.themes.iter().find(|t| t.theme == "color grading").unwrap();
    assert_eq!(cg.count, 3);
}

#[test]
fn top_n_parameter_is_respected() {
    // Letter-suffixed words; digits would split the alphabetic runs.
    let cleaned: Vec<String> = (0..26)
        .map(|i| {
            let c = (b'a' + i as u8) as char;
            format!("subject{c}{c} matter{c}{c}")
        })
        .collect();
    let out = extract_keywords_and_themes(&cleaned, 7);
    assert_eq!(out.keywords.len(), 7);
    assert!(out.themes.len() <= 15);
}

#[test]
fn empty_and_stopword_only_inputs_yield_empty_lists() {
    let out = extract_keywords_and_themes(&[], 20);
    assert!(out.keywords.is_empty() && out.themes.is_empty());

    let out = extract_keywords_and_themes(&texts(&["this that with have from your"]), 20);
    assert!(out.keywords.is_empty());
    assert!(out.themes.is_empty());
}
