//! Word tokenization
//!
//! Two notions of "word" are used:
//! - [`word_count`] counts whitespace-delimited tokens; it drives the budget.
//! - [`terms`] yields lowercase runs of two or more word characters; it feeds
//!   term weighting and keyword extraction.

use regex::Regex;
use std::sync::OnceLock;

/// Word pattern for term extraction: two or more Unicode word characters.
const TERM_PATTERN: &str = r"(?u)\b\w\w+\b";

fn term_regex() -> &'static Regex {
    static TERM_RE: OnceLock<Regex> = OnceLock::new();
    TERM_RE.get_or_init(|| Regex::new(TERM_PATTERN).expect("term pattern is valid"))
}

/// Count whitespace-delimited words
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Iterate the raw (case-preserved) term tokens of `text`
pub fn raw_terms(text: &str) -> impl Iterator<Item = &str> {
    term_regex().find_iter(text).map(|m| m.as_str())
}

/// Lowercased term tokens of `text`, in order
pub fn terms(text: &str) -> Vec<String> {
    raw_terms(text).map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("Cats are mammals."), 3);
        assert_eq!(word_count("a\tb\nc  d"), 4);
    }

    #[test]
    fn test_terms_lowercase_and_min_length() {
        let t = terms("The sky is blue, a B-52 flies.");
        assert_eq!(t, vec!["the", "sky", "is", "blue", "52", "flies"]);
    }

    #[test]
    fn test_terms_unicode() {
        let t = terms("Über café déjà-vu");
        assert_eq!(t, vec!["über", "café", "déjà", "vu"]);
    }

    #[test]
    fn test_raw_terms_preserve_case() {
        let t: Vec<_> = raw_terms("Rust Language").collect();
        assert_eq!(t, vec!["Rust", "Language"]);
    }
}
