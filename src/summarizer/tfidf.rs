//! TF-IDF sentence vectors
//!
//! Builds the sentence-by-term weighting matrix fed to the rank-1 reduction.
//! Each sentence becomes a sparse, L2-normalized row whose entries are
//! `count × (ln((1 + n) / (1 + df)) + 1)`.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;
use rustc_hash::FxHashMap;

/// A sparse L2-normalized term vector, entries sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: (term id, weight)
    pub entries: Vec<(u32, f64)>,
    /// L2 norm before normalization
    pub norm: f64,
}

impl TermVector {
    /// Create from unnormalized weights
    pub fn from_weights(weights: FxHashMap<u32, f64>) -> Self {
        let mut entries: Vec<(u32, f64)> =
            weights.into_iter().filter(|&(_, w)| w != 0.0).collect();
        entries.sort_unstable_by_key(|&(id, _)| id);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }
        Self { entries, norm }
    }

    /// Dot product with another sorted vector
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sentence-by-term weight matrix
#[derive(Debug, Clone, Default)]
pub struct TermMatrix {
    /// One row per sentence, in sentence order
    pub rows: Vec<TermVector>,
    /// Term text by id, in first-seen order
    pub vocabulary: Vec<String>,
}

impl TermMatrix {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Count of stored non-zero weights
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|r| r.entries.len()).sum()
    }

    /// True when no row has any weight
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(TermVector::is_empty)
    }
}

/// Turns sentences into a [`TermMatrix`]
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer<'a> {
    stopwords: &'a StopwordFilter,
    ngram_range: (usize, usize),
}

impl<'a> TfIdfVectorizer<'a> {
    /// Unigram + bigram vectorizer
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self {
            stopwords,
            ngram_range: (1, 2),
        }
    }

    /// Set the inclusive n-gram range
    pub fn with_ngram_range(mut self, min: usize, max: usize) -> Self {
        self.ngram_range = (min.max(1), max.max(min.max(1)));
        self
    }

    /// Extract the n-gram terms of one sentence.
    ///
    /// Stop words are removed first, so bigrams may bridge a removed word.
    pub fn analyze(&self, sentence: &str) -> Vec<String> {
        let words: Vec<String> = tokenizer::terms(sentence)
            .into_iter()
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n {
            if n > words.len() {
                break;
            }
            for window in words.windows(n) {
                grams.push(window.join(" "));
            }
        }
        grams
    }

    /// Build the weighted matrix for `sentences`
    pub fn fit_transform<S: AsRef<str>>(&self, sentences: &[S]) -> TermMatrix {
        let n = sentences.len();
        let mut vocab: FxHashMap<String, u32> = FxHashMap::default();
        let mut vocabulary: Vec<String> = Vec::new();
        let mut counts: Vec<FxHashMap<u32, f64>> = Vec::with_capacity(n);

        for sentence in sentences {
            let mut row: FxHashMap<u32, f64> = FxHashMap::default();
            for gram in self.analyze(sentence.as_ref()) {
                let id = match vocab.get(&gram) {
                    Some(&id) => id,
                    None => {
                        let id = vocabulary.len() as u32;
                        vocab.insert(gram.clone(), id);
                        vocabulary.push(gram);
                        id
                    }
                };
                *row.entry(id).or_insert(0.0) += 1.0;
            }
            counts.push(row);
        }

        let mut df = vec![0usize; vocabulary.len()];
        for row in &counts {
            for &id in row.keys() {
                df[id as usize] += 1;
            }
        }

        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n as f64) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .into_iter()
            .map(|mut row| {
                for (id, weight) in row.iter_mut() {
                    *weight *= idf[*id as usize];
                }
                TermVector::from_weights(row)
            })
            .collect();

        TermMatrix { rows, vocabulary }
    }
}
