//! Summarization components
//!
//! Extractive summarization: TF-IDF sentence vectors reduced to one latent
//! component, blended with a lead bias, and selected greedily under a word
//! budget.

pub mod format;
pub mod keywords;
pub mod rank;
pub mod scorer;
pub mod selector;
pub mod stats;
pub mod svd;
pub mod tfidf;
