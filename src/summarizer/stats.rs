//! Summary statistics

use crate::nlp::tokenizer::word_count;
use crate::types::Summary;
use serde::{Deserialize, Serialize};

/// Size of a summary relative to its source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Whitespace-delimited words in the source text
    pub word_count: usize,
    /// Characters (Unicode scalar values) in the source text
    pub character_count: usize,
    pub summary_sentence_count: usize,
    pub summary_word_count: usize,
    /// Percentage of source words removed, rounded to two decimals
    pub reduction_percent: f64,
}

impl Statistics {
    pub fn compute(original: &str, summary: &Summary) -> Self {
        let words = word_count(original);
        let reduction_percent = if words > 0 {
            let raw = (1.0 - summary.word_count as f64 / words as f64) * 100.0;
            (raw * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            word_count: words,
            character_count: original.chars().count(),
            summary_sentence_count: summary.sentence_count,
            summary_word_count: summary.word_count,
            reduction_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SummaryKind;

    #[test]
    fn test_reduction() {
        let summary = Summary {
            sentences: vec!["Cats are mammals.".to_string()],
            sentence_count: 1,
            word_count: 3,
            kind: SummaryKind::Ranked,
        };
        let original = "Cats are mammals. Dogs are mammals too. The sky is blue.";
        let stats = Statistics::compute(original, &summary);

        assert_eq!(stats.word_count, 11);
        assert_eq!(stats.summary_word_count, 3);
        assert_eq!(stats.summary_sentence_count, 1);
        assert!((stats.reduction_percent - 72.73).abs() < 1e-9);
    }

    #[test]
    fn test_empty_source() {
        let stats = Statistics::compute("", &Summary::empty());
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.reduction_percent, 0.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let stats = Statistics::compute("déjà vu", &Summary::empty());
        assert_eq!(stats.character_count, 7);
        assert_eq!(stats.reduction_percent, 100.0);
    }
}
