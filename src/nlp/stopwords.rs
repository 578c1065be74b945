//! Stop-word lists for term weighting
//!
//! Stop words are dropped before n-grams are formed, so they never become
//! terms of the weighting matrix. Lists come from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Resolve a language code to a stop-word list, if one is bundled.
///
/// Accepts ISO 639-1 codes and English language names, case-insensitively.
pub fn resolve_language(code: &str) -> Option<LANGUAGE> {
    let lang = match code.trim().to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        _ => return None,
    };
    Some(lang)
}

/// A lowercase stop-word set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Load the stop-word list for `language`.
    ///
    /// Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = resolve_language(language).unwrap_or(LANGUAGE::English);
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// A filter that keeps every token
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Check a token; comparison is case-insensitive
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("are"));
        assert!(!filter.is_stopword("mammals"));
        assert!(!filter.is_stopword("sky"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert!(resolve_language("klingon").is_none());
        let filter = StopwordFilter::new("klingon");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_language_names_resolve() {
        assert!(resolve_language("English").is_some());
        assert!(resolve_language(" DE ").is_some());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("katze"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Custom"]);
        assert!(filter.is_stopword("custom"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("EXTRA"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
