//! Language resources shared by every summarization call
//!
//! A [`LanguageResources`] handle bundles the sentence segmenter and the
//! stop-word list. It is built once, never mutated, and passed into the
//! [`Summarizer`](crate::Summarizer) explicitly. Nothing here touches the
//! network or the filesystem.

use crate::nlp::segmenter::Segmenter;
use crate::nlp::stopwords::{resolve_language, StopwordFilter};
use std::sync::{Arc, OnceLock};

/// Immutable segmentation and term-filtering resources for one language
#[derive(Debug, Clone)]
pub struct LanguageResources {
    language: String,
    segmenter: Segmenter,
    stopwords: StopwordFilter,
}

impl LanguageResources {
    /// Load resources for `language`.
    ///
    /// English gets the full abbreviation tables; other languages use the
    /// punctuation rules only. Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        let known = resolve_language(language).is_some();
        let is_english =
            !known || matches!(language.trim().to_lowercase().as_str(), "en" | "english");
        let segmenter = if is_english {
            Segmenter::english()
        } else {
            Segmenter::punctuation_only()
        };
        let language = if known {
            language.trim().to_lowercase()
        } else {
            "en".to_string()
        };
        let stopwords = StopwordFilter::new(&language);
        tracing::debug!(%language, stopwords = stopwords.len(), "loaded language resources");
        Self {
            language,
            segmenter,
            stopwords,
        }
    }

    /// Assemble resources from parts
    pub fn from_parts(
        language: impl Into<String>,
        segmenter: Segmenter,
        stopwords: StopwordFilter,
    ) -> Self {
        Self {
            language: language.into(),
            segmenter,
            stopwords,
        }
    }

    /// Process-wide English resources, initialized on first use
    pub fn shared_english() -> Arc<LanguageResources> {
        static SHARED: OnceLock<Arc<LanguageResources>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(LanguageResources::new("en"))))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::new("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_english_is_reused() {
        let a = LanguageResources::shared_english();
        let b = LanguageResources::shared_english();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.language(), "en");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let resources = LanguageResources::new("xx");
        assert_eq!(resources.language(), "en");
        assert!(resources.stopwords().is_stopword("the"));
    }

    #[test]
    fn test_non_english_uses_punctuation_rules() {
        let resources = LanguageResources::new("de");
        assert_eq!(resources.language(), "de");
        assert!(resources.stopwords().is_stopword("und"));
        assert_eq!(
            resources.segmenter().segment("Dr. Müller kam."),
            vec!["Dr.", "Müller kam."]
        );
    }
}
