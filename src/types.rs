//! Core data types and configuration
//!
//! Sentences, scored sentences, the assembled [`Summary`], and the
//! [`SummaryConfig`] that parameterizes a summarization run.

use serde::{Deserialize, Serialize};

/// Weight applied to the latent-component salience score.
pub const SALIENCE_WEIGHT: f64 = 0.7;

/// Weight applied to the positional prior `1 / (i + 1)`.
pub const POSITION_WEIGHT: f64 = 0.3;

/// A sentence detected in the input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text
    pub text: String,
    /// 0-based position in segmentation order
    pub index: usize,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character in the document
    pub end: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
        }
    }

    /// Number of whitespace-delimited words
    pub fn word_count(&self) -> usize {
        crate::nlp::tokenizer::word_count(&self.text)
    }
}

/// A sentence paired with its salience and combined rank
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    /// Score on the dominant latent component (0.0 when unscored)
    pub salience: f64,
    /// Combined rank; may be negative
    pub rank: f64,
}

/// How a [`Summary`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// Input was empty or whitespace-only
    Empty,
    /// Fewer than two sentences; the input is returned unchanged
    Verbatim,
    /// Sentences ranked by salience and position
    Ranked,
    /// Scoring was unavailable; sentences ranked by position alone
    Positional,
}

/// The sentences chosen for a summary, in the order they were admitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in rank order (not document order)
    pub sentences: Vec<String>,
    pub sentence_count: usize,
    /// Sum of whitespace-delimited words across `sentences`
    pub word_count: usize,
    pub kind: SummaryKind,
}

impl Summary {
    /// An empty summary (0 sentences, 0 words)
    pub fn empty() -> Self {
        Self {
            sentences: Vec::new(),
            sentence_count: 0,
            word_count: 0,
            kind: SummaryKind::Empty,
        }
    }

    /// The whole input returned as-is.
    ///
    /// `sentence_count` is the number of sentences the segmenter found (0 or 1).
    pub fn verbatim(text: &str, sentence_count: usize) -> Self {
        Self {
            sentences: vec![text.to_string()],
            sentence_count,
            word_count: crate::nlp::tokenizer::word_count(text),
            kind: SummaryKind::Verbatim,
        }
    }

    /// Check if no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Render as prose: sentences joined by single spaces
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// Output rendering style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    /// Sentences joined by spaces
    #[default]
    Prose,
    /// One bullet per sentence, separated by blank lines
    Bulleted,
}

/// Settings for the rank-1 power-iteration solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of power iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L2 change of the iterate
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-10,
        }
    }
}

/// Configuration for a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Language code for the stop-word list (e.g. "en")
    pub language: String,
    /// Inclusive n-gram range for term extraction
    pub ngram_range: (usize, usize),
    /// Power-iteration settings
    pub solver: SolverConfig,
    /// Bonus applied to the fraction of hint keywords a sentence contains
    pub keyword_weight: f64,
    /// Rendering style
    pub style: OutputStyle,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            ngram_range: (1, 2),
            solver: SolverConfig::default(),
            keyword_weight: 0.1,
            style: OutputStyle::Prose,
        }
    }
}

impl SummaryConfig {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_ngram_range(mut self, min: usize, max: usize) -> Self {
        self.ngram_range = (min, max);
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_keyword_weight(mut self, weight: f64) -> Self {
        self.keyword_weight = weight;
        self
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing fields take their defaults. Validation errors are returned as
    /// [`SummarizeError::InvalidConfig`](crate::SummarizeError::InvalidConfig);
    /// warnings are logged and otherwise ignored.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: SummaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Run the default validation rules against this configuration.
    pub fn validate(&self) -> crate::Result<()> {
        let report = crate::pipeline::validation::ValidationEngine::with_defaults().validate(self);
        for warning in report.warnings() {
            tracing::warn!(path = %warning.path, "{}", warning.message);
        }
        if report.has_errors() {
            return Err(crate::SummarizeError::InvalidConfig(report));
        }
        Ok(())
    }
}
