//! Error types for summarization

use crate::pipeline::validation::ValidationReport;
use thiserror::Error;

/// Errors raised by the summarization pipeline.
///
/// Empty and single-sentence inputs are not errors; they produce a
/// [`Summary`](crate::Summary) with the matching [`SummaryKind`](crate::SummaryKind).
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The target word count was zero
    #[error("target word count must be positive, got {target}")]
    InvalidBudget { target: usize },

    /// The term-weight matrix cannot be reduced to a salience score
    #[error("sentence scoring unavailable: {reason}")]
    ScoringUnavailable { reason: String },

    /// The configuration failed validation
    #[error("invalid configuration ({} error(s))", .0.errors().count())]
    InvalidConfig(ValidationReport),

    /// The configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SummarizeError {
    pub(crate) fn scoring_unavailable(reason: impl Into<String>) -> Self {
        Self::ScoringUnavailable {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;
