//! Candidate keyword extraction
//!
//! Supplies the keyword hints accepted by
//! [`Summarizer::summarize_with_keywords`](crate::Summarizer::summarize_with_keywords):
//! distinct alphabetic terms of at least three characters that are not stop
//! words, in order of first occurrence.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;
use rustc_hash::FxHashSet;

/// Shortest term accepted as a keyword
const MIN_KEYWORD_CHARS: usize = 3;

/// Extract candidate keywords from `text`.
///
/// Duplicates are detected case-insensitively; the surface form of the first
/// occurrence is kept.
pub fn extract_keywords(text: &str, stopwords: &StopwordFilter) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut keywords = Vec::new();

    for token in tokenizer::raw_terms(text) {
        if token.chars().count() < MIN_KEYWORD_CHARS || !token.chars().all(char::is_alphabetic) {
            continue;
        }
        let lower = token.to_lowercase();
        if stopwords.is_stopword(&lower) {
            continue;
        }
        if seen.insert(lower) {
            keywords.push(token.to_string());
        }
    }

    keywords
}
