//! Rank combination
//!
//! `rank[i] = salience[i] * 0.7 + (1 / (i + 1)) * 0.3`, plus an optional
//! keyword bonus: `keyword_weight × (hint keywords found in sentence i /
//! total hint keywords)`. With no keywords the bonus is zero.

use crate::nlp::tokenizer;
use crate::types::{ScoredSentence, Sentence, POSITION_WEIGHT, SALIENCE_WEIGHT};

/// Positional prior for the sentence at `index`
#[inline]
pub fn position_prior(index: usize) -> f64 {
    1.0 / (index as f64 + 1.0)
}

/// Blend of salience and position for the sentence at `index`
#[inline]
pub fn combined_rank(salience: f64, index: usize) -> f64 {
    salience * SALIENCE_WEIGHT + position_prior(index) * POSITION_WEIGHT
}

/// Combines salience, position and keyword hints into one rank per sentence
#[derive(Debug, Clone, Default)]
pub struct RankCombiner {
    /// Normalized keyword phrases, each padded with spaces for matching
    keywords: Vec<String>,
    keyword_weight: f64,
}

impl RankCombiner {
    /// Combiner without keyword hints
    pub fn new() -> Self {
        Self::default()
    }

    /// Add keyword hints.
    ///
    /// Keywords are matched case-insensitively on whole terms; duplicates and
    /// keywords with no term characters are ignored.
    pub fn with_keywords<S: AsRef<str>>(mut self, keywords: &[S], weight: f64) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let terms = tokenizer::terms(keyword.as_ref());
            if terms.is_empty() {
                continue;
            }
            let padded = format!(" {} ", terms.join(" "));
            if !normalized.contains(&padded) {
                normalized.push(padded);
            }
        }
        self.keywords = normalized;
        self.keyword_weight = weight;
        self
    }

    /// Fraction of hint keywords present in `text`, in `[0, 1]`
    pub fn keyword_coverage(&self, text: &str) -> f64 {
        if self.keywords.is_empty() {
            return 0.0;
        }
        let haystack = format!(" {} ", tokenizer::terms(text).join(" "));
        let hits = self
            .keywords
            .iter()
            .filter(|k| haystack.contains(k.as_str()))
            .count();
        hits as f64 / self.keywords.len() as f64
    }

    /// Pair every sentence with its rank.
    ///
    /// `salience` must have one entry per sentence.
    pub fn combine(&self, sentences: &[Sentence], salience: &[f64]) -> Vec<ScoredSentence> {
        debug_assert_eq!(sentences.len(), salience.len());
        sentences
            .iter()
            .zip(salience)
            .map(|(sentence, &s)| {
                let mut rank = combined_rank(s, sentence.index);
                if self.keyword_weight != 0.0 {
                    rank += self.keyword_weight * self.keyword_coverage(&sentence.text);
                }
                ScoredSentence {
                    sentence: sentence.clone(),
                    salience: s,
                    rank,
                }
            })
            .collect()
    }
}
