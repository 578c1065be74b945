use rapid_summarizer::{
    extract_keywords, format_bulleted, segment, summarize, LanguageResources, OutputStyle,
    Segmenter, Statistics, StageTimingObserver, StopwordFilter, SummarizeError, Summarizer,
    SummaryConfig, SummaryKind,
};
use std::sync::Arc;

const ARTICLE: &str = "\
Solar power capacity grew rapidly last year. \
Panel prices fell as manufacturing scaled up in several countries. \
Grid operators struggled to absorb the midday surge of solar power. \
Battery storage is now paired with many new solar farms. \
Some analysts expect solar power to become the largest source of electricity. \
Meanwhile, the local bakery introduced a sourdough recipe.";

#[test]
fn test_reference_example() {
    let text = "Cats are mammals. Dogs are mammals too. The sky is blue.";
    let summary = summarize(text, 6).unwrap();

    assert!(summary.word_count <= 6);
    assert!(summary.sentence_count >= 1);
    for sentence in &summary.sentences {
        assert!(segment(text).contains(sentence));
    }
}

#[test]
fn test_segment_examples() {
    assert_eq!(segment("Hello world. How are you?"), vec!["Hello world.", "How are you?"]);
    assert_eq!(segment("No terminal punctuation"), vec!["No terminal punctuation"]);
    assert!(segment("").is_empty());
    assert!(segment("   ").is_empty());
}

#[test]
fn test_segment_keeps_abbreviations_together() {
    let text = "Dr. Smith met Mr. Jones at 3.30 p.m. yesterday. They talked.";
    let sentences = segment(text);
    assert_eq!(sentences.len(), 2);
    assert!(sentences[0].starts_with("Dr. Smith"));
    assert_eq!(sentences[1], "They talked.");
}

#[test]
fn test_ordinary_words_do_not_merge_sentences() {
    for text in [
        "The cat sat. Birds sang loudly.",
        "She said no. Nobody argued.",
        "We watched the sun. Clouds rolled in.",
        "He ate a fig. Apples came next.",
        "They chose plan B. Everyone agreed.",
        "Sales rose. iPhone demand fell.",
    ] {
        assert_eq!(segment(text).len(), 2, "{text}");
    }
}

#[test]
fn test_two_sentences_respect_budget() {
    let summary = summarize("The cat sat. Birds sang loudly.", 3).unwrap();
    assert_ne!(summary.kind, SummaryKind::Verbatim);
    assert!(summary.word_count <= 3);
    assert_eq!(summary.sentence_count, 1);
}

#[test]
fn test_zero_budget_on_degenerate_input() {
    assert_eq!(summarize("", 0).unwrap().kind, SummaryKind::Empty);
    let single = summarize("Only one sentence here", 0).unwrap();
    assert_eq!(single.kind, SummaryKind::Verbatim);
    assert_eq!(single.sentence_count, 1);
}

#[test]
fn test_article_summary_respects_budget() {
    let summary = summarize(ARTICLE, 25).unwrap();

    assert_eq!(summary.kind, SummaryKind::Ranked);
    assert!(summary.word_count <= 25);
    assert!(summary.sentence_count >= 1);

    let words: usize = summary
        .sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .sum();
    assert_eq!(words, summary.word_count);
}

#[test]
fn test_off_topic_sentence_ranked_last() {
    let summary = summarize(ARTICLE, 500).unwrap();
    assert_eq!(summary.sentence_count, 6);
    assert_eq!(
        summary.sentences.last().map(String::as_str),
        Some("Meanwhile, the local bakery introduced a sourdough recipe.")
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = summarize(ARTICLE, 30).unwrap();
    let second = summarize(ARTICLE, 30).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_budget_is_an_error() {
    let err = summarize(ARTICLE, 0).unwrap_err();
    assert!(matches!(err, SummarizeError::InvalidBudget { target: 0 }));
    assert!(err.to_string().contains('0'));
}

#[test]
fn test_format_bulleted_examples() {
    assert_eq!(
        format_bulleted("First point. Second point."),
        "• First point.\n\n• Second point."
    );
    assert_eq!(format_bulleted("Just one sentence"), "• Just one sentence");
    assert_eq!(format_bulleted(""), "");
}

#[test]
fn test_bulleted_rendering_through_config() {
    let config = SummaryConfig::from_json(r#"{ "style": "bulleted" }"#).unwrap();
    assert_eq!(config.style, OutputStyle::Bulleted);

    let summarizer = Summarizer::from_config(config).unwrap();
    let summary = summarizer.summarize(ARTICLE, 500).unwrap();
    let rendered = summarizer.render(&summary);

    let bullets: Vec<&str> = rendered.split("\n\n").collect();
    assert_eq!(bullets.len(), summary.sentence_count);
    assert!(bullets.iter().all(|b| b.starts_with("• ")));
}

#[test]
fn test_config_json_errors() {
    let err = SummaryConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SummarizeError::Config(_)));

    let err = SummaryConfig::from_json(r#"{ "ngram_range": [0, 2] }"#).unwrap_err();
    match err {
        SummarizeError::InvalidConfig(report) => assert!(report.has_errors()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_injected_resources() {
    let mut stopwords = StopwordFilter::empty();
    stopwords.add_stopwords(&["alpha"]);
    let resources = Arc::new(LanguageResources::from_parts(
        "custom",
        Segmenter::punctuation_only(),
        stopwords,
    ));
    let summarizer = Summarizer::with_resources(resources, SummaryConfig::default()).unwrap();

    assert_eq!(summarizer.resources().language(), "custom");
    let summary = summarizer
        .summarize("Alpha alpha. Beta gamma here. Delta beta there.", 50)
        .unwrap();
    assert_eq!(summary.sentence_count, 3);
}

#[test]
fn test_german_resources() {
    let config = SummaryConfig::default().with_language("de");
    let summarizer = Summarizer::from_config(config).unwrap();
    assert_eq!(summarizer.resources().language(), "de");
    assert!(summarizer.resources().stopwords().is_stopword("und"));

    let summary = summarizer
        .summarize("Der Hund bellt laut. Die Katze schläft ruhig. Der Hund rennt.", 4)
        .unwrap();
    assert!(summary.word_count <= 4);
}

#[test]
fn test_keyword_hints_from_extracted_keywords() {
    let stopwords = StopwordFilter::new("en");
    let keywords = extract_keywords("sourdough bakery", &stopwords);
    assert_eq!(keywords, vec!["sourdough", "bakery"]);

    let config = SummaryConfig::default().with_keyword_weight(5.0);
    let summarizer = Summarizer::from_config(config).unwrap();
    let summary = summarizer
        .summarize_with_keywords(ARTICLE, 10, &keywords)
        .unwrap();
    assert_eq!(
        summary.sentences,
        vec!["Meanwhile, the local bakery introduced a sourdough recipe."]
    );
}

#[test]
fn test_statistics() {
    let summary = summarize(ARTICLE, 25).unwrap();
    let stats = Statistics::compute(ARTICLE, &summary);

    assert_eq!(stats.word_count, ARTICLE.split_whitespace().count());
    assert_eq!(stats.summary_word_count, summary.word_count);
    assert_eq!(stats.summary_sentence_count, summary.sentence_count);
    assert!(stats.reduction_percent > 0.0 && stats.reduction_percent < 100.0);
}

#[test]
fn test_observer_through_public_api() {
    let summarizer = Summarizer::new();
    let mut observer = StageTimingObserver::new();
    summarizer
        .summarize_observed::<&str, _>(ARTICLE, 25, &[], &mut observer)
        .unwrap();
    assert_eq!(observer.stages(), vec!["segment", "score", "combine", "select"]);
}

#[test]
fn test_summary_serializes() {
    let summary = summarize("Cats are mammals. Dogs are mammals too.", 50).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["kind"], "ranked");
    assert_eq!(json["sentence_count"], 2);
}
