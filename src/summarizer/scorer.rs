//! Lexical salience per sentence
//!
//! TF-IDF weighting over unigrams and bigrams, reduced to one latent
//! component. The result is one salience value per sentence.

use super::svd::RankOneSvd;
use super::tfidf::TfIdfVectorizer;
use crate::error::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::SummaryConfig;

/// Computes salience scores for a sentence set
#[derive(Debug, Clone)]
pub struct FeatureScorer<'a> {
    vectorizer: TfIdfVectorizer<'a>,
    solver: RankOneSvd,
}

impl<'a> FeatureScorer<'a> {
    /// Default scorer: unigrams + bigrams, default solver settings
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(stopwords),
            solver: RankOneSvd::new(),
        }
    }

    pub fn from_config(stopwords: &'a StopwordFilter, config: &SummaryConfig) -> Self {
        let (min_n, max_n) = config.ngram_range;
        Self {
            vectorizer: TfIdfVectorizer::new(stopwords).with_ngram_range(min_n, max_n),
            solver: RankOneSvd::from_config(&config.solver),
        }
    }

    /// Salience of each sentence, in input order
    pub fn score<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<f64>> {
        let matrix = self.vectorizer.fit_transform(sentences);
        tracing::debug!(
            sentences = matrix.num_rows(),
            terms = matrix.num_terms(),
            nnz = matrix.nnz(),
            "built term matrix"
        );

        let reduced = self.solver.run(&matrix)?;
        tracing::debug!(
            sigma = reduced.singular_value,
            iterations = reduced.iterations,
            converged = reduced.converged,
            "reduced to one component"
        );
        Ok(reduced.scores)
    }
}
