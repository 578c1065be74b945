//! # rapid-summarizer
//!
//! Extractive summarization of plain-text documents.
//!
//! A document is split into sentences, each sentence becomes a TF-IDF
//! vector, and the vectors are reduced to their dominant latent component.
//! A sentence's projection onto that component is its salience. Salience is
//! blended with a lead bias (`0.7 * salience + 0.3 / (i + 1)`) and sentences
//! are admitted greedily, best rank first, until a word budget is reached.
//!
//! ## Quick start
//!
//! ```rust
//! use rapid_summarizer::summarize;
//!
//! let text = "Cats are mammals. Dogs are mammals too. The sky is blue.";
//! let summary = summarize(text, 6).unwrap();
//!
//! assert!(summary.word_count <= 6);
//! assert!(summary.sentence_count >= 1);
//! ```
//!
//! For non-default settings build a [`Summarizer`] from a [`SummaryConfig`]:
//!
//! ```rust
//! use rapid_summarizer::{OutputStyle, Summarizer, SummaryConfig};
//!
//! let config = SummaryConfig::default().with_style(OutputStyle::Bulleted);
//! let summarizer = Summarizer::from_config(config).unwrap();
//! let summary = summarizer
//!     .summarize("First point here. Second point there. Third point too.", 50)
//!     .unwrap();
//! let rendered = summarizer.render(&summary);
//! assert!(rendered.starts_with("• "));
//! ```

pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod resources;
pub mod summarizer;
pub mod types;

pub use error::{Result, SummarizeError};
pub use nlp::segmenter::Segmenter;
pub use nlp::stopwords::StopwordFilter;
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use pipeline::runner::Summarizer;
pub use resources::LanguageResources;
pub use summarizer::keywords::extract_keywords;
pub use summarizer::stats::Statistics;
pub use types::{
    OutputStyle, ScoredSentence, Sentence, SolverConfig, Summary, SummaryConfig, SummaryKind,
};

/// Split `text` into trimmed sentences using the shared English resources
pub fn segment(text: &str) -> Vec<String> {
    LanguageResources::shared_english().segmenter().segment(text)
}

/// Summarize `text` within `target_word_count` words with default settings
pub fn summarize(text: &str, target_word_count: usize) -> Result<Summary> {
    Summarizer::new().summarize(text, target_word_count)
}

/// Bullet every sentence of `summary_text`, one per paragraph
pub fn format_bulleted(summary_text: &str) -> String {
    Summarizer::new().format_bulleted(summary_text)
}
