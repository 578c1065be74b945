//! Budget-constrained sentence selection
//!
//! Sentences are sorted by rank (descending) and admitted greedily while
//! the running word count stays within the target. A sentence that does not
//! fit is skipped, and shorter sentences further down may still be admitted.
//! The walk stops as soon as the target is reached exactly.
//!
//! The summary keeps admission order, which is rank order, not document order.

use crate::error::{Result, SummarizeError};
use crate::types::{ScoredSentence, Summary, SummaryKind};
use std::cmp::Ordering;

/// Greedy word-budget selector
#[derive(Debug, Clone, Copy)]
pub struct BudgetSelector {
    target: usize,
}

impl BudgetSelector {
    /// Create a selector for a positive word budget
    pub fn new(target_word_count: usize) -> Result<Self> {
        if target_word_count == 0 {
            return Err(SummarizeError::InvalidBudget {
                target: target_word_count,
            });
        }
        Ok(Self {
            target: target_word_count,
        })
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Select sentences from `ranked`.
    ///
    /// The returned summary has [`SummaryKind::Ranked`]; callers relabel it
    /// when the ranks came from a fallback.
    pub fn select(&self, ranked: &[ScoredSentence]) -> Summary {
        let mut order: Vec<&ScoredSentence> = ranked.iter().collect();
        order.sort_by(|a, b| compare_by_rank(a, b));

        let mut sentences = Vec::new();
        let mut current_length = 0;

        for candidate in order {
            let words = candidate.sentence.word_count();
            if current_length + words <= self.target {
                sentences.push(candidate.sentence.text.clone());
                current_length += words;
            } else {
                tracing::trace!(
                    index = candidate.sentence.index,
                    words,
                    current_length,
                    "sentence exceeds remaining budget"
                );
            }
            if current_length >= self.target {
                break;
            }
        }

        Summary {
            sentence_count: sentences.len(),
            sentences,
            word_count: current_length,
            kind: SummaryKind::Ranked,
        }
    }
}

/// Rank descending; ties by text descending, then by position ascending.
pub fn compare_by_rank(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.rank
        .total_cmp(&a.rank)
        .then_with(|| b.sentence.text.cmp(&a.sentence.text))
        .then_with(|| a.sentence.index.cmp(&b.sentence.index))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::types::Sentence;
    use proptest::prelude::*;

    fn candidates(lengths: &[(usize, i32)]) -> Vec<ScoredSentence> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &(words, rank))| ScoredSentence {
                sentence: Sentence::new(vec![format!("w{i}"); words].join(" "), i, 0, 0),
                salience: 0.0,
                rank: f64::from(rank) / 10.0,
            })
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_skipped_sentences_did_not_fit(
            lengths in prop::collection::vec((1usize..12, -10i32..10), 1..15),
            target in 1usize..40,
        ) {
            let ranked = candidates(&lengths);
            let summary = BudgetSelector::new(target).unwrap().select(&ranked);
            prop_assert!(summary.word_count <= target);

            let mut order: Vec<&ScoredSentence> = ranked.iter().collect();
            order.sort_by(|a, b| compare_by_rank(a, b));

            // Replay the walk: every candidate passed over before the last
            // admission must have exceeded the remaining budget.
            let mut used = 0;
            let mut admitted = summary.sentences.iter().peekable();
            for candidate in order {
                let Some(next) = admitted.peek() else { break };
                let words = candidate.sentence.word_count();
                if **next == candidate.sentence.text {
                    used += words;
                    admitted.next();
                } else {
                    prop_assert!(used + words > target);
                }
            }
            prop_assert!(admitted.next().is_none());
            prop_assert_eq!(used, summary.word_count);
        }
    }
}
