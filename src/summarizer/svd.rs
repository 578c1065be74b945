//! Rank-1 truncated SVD by power iteration
//!
//! Projects every sentence row of a [`TermMatrix`] onto the dominant right
//! singular vector `v`, giving `score[i] = X[i] · v = σ · u[i]`.
//!
//! Power iteration runs on the smaller Gram matrix: `X·Xᵀ` (sentences ×
//! sentences) when there are no more sentences than terms, `Xᵀ·X` otherwise.
//! Building the Gram matrix costs O(n² · nnz_row) or O(n · nnz_row²); each
//! iteration costs O(min(n, terms)²).
//!
//! The start vector is uniform, so identical input always yields identical
//! scores. Scores are sign-normalized so the largest-magnitude entry is
//! positive (first index wins ties).

use super::tfidf::TermMatrix;
use crate::error::{Result, SummarizeError};
use crate::types::SolverConfig;

/// Below this the iterate is treated as having collapsed to zero
const EPSILON: f64 = 1e-12;

/// Output of the rank-1 reduction
#[derive(Debug, Clone)]
pub struct RankOneResult {
    /// Component score per sentence, in sentence order
    pub scores: Vec<f64>,
    /// Dominant singular value σ
    pub singular_value: f64,
    /// Number of power iterations performed
    pub iterations: usize,
    /// Final L2 change of the iterate
    pub delta: f64,
    /// Whether the tolerance was reached
    pub converged: bool,
}

/// Rank-1 SVD solver
#[derive(Debug, Clone)]
pub struct RankOneSvd {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub tolerance: f64,
}

impl Default for RankOneSvd {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

impl RankOneSvd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Compute per-sentence component scores.
    ///
    /// Fails with [`SummarizeError::ScoringUnavailable`] when the matrix has
    /// no non-zero weight or the iteration produces a non-finite value.
    pub fn run(&self, matrix: &TermMatrix) -> Result<RankOneResult> {
        if matrix.num_rows() == 0 || matrix.is_zero() {
            return Err(SummarizeError::scoring_unavailable(
                "term matrix has no non-zero weights",
            ));
        }

        let mut result = if matrix.num_rows() <= matrix.num_terms() {
            self.sentence_side(matrix)?
        } else {
            self.term_side(matrix)?
        };

        if result.scores.iter().any(|s| !s.is_finite()) {
            return Err(SummarizeError::scoring_unavailable(
                "component scores are not finite",
            ));
        }

        flip_sign(&mut result.scores);

        if !result.converged {
            tracing::warn!(
                iterations = result.iterations,
                delta = result.delta,
                "rank-1 reduction did not converge"
            );
        }

        Ok(result)
    }

    /// Iterate on `X·Xᵀ`; scores are `σ · u`
    fn sentence_side(&self, matrix: &TermMatrix) -> Result<RankOneResult> {
        let n = matrix.num_rows();
        let mut gram = vec![0.0; n * n];
        for i in 0..n {
            for j in i..n {
                let d = matrix.rows[i].dot(&matrix.rows[j]);
                gram[i * n + j] = d;
                gram[j * n + i] = d;
            }
        }

        let power = self.dominant_eigenpair(&gram, n)?;
        let sigma = power.eigenvalue.max(0.0).sqrt();
        let scores = power.vector.iter().map(|u| u * sigma).collect();

        Ok(RankOneResult {
            scores,
            singular_value: sigma,
            iterations: power.iterations,
            delta: power.delta,
            converged: power.converged,
        })
    }

    /// Iterate on `Xᵀ·X`; scores are `X · v`
    fn term_side(&self, matrix: &TermMatrix) -> Result<RankOneResult> {
        let t = matrix.num_terms();
        let mut gram = vec![0.0; t * t];
        for row in &matrix.rows {
            for &(a, wa) in &row.entries {
                for &(b, wb) in &row.entries {
                    gram[a as usize * t + b as usize] += wa * wb;
                }
            }
        }

        let power = self.dominant_eigenpair(&gram, t)?;
        let scores = matrix
            .rows
            .iter()
            .map(|row| {
                row.entries
                    .iter()
                    .map(|&(id, w)| w * power.vector[id as usize])
                    .sum()
            })
            .collect();

        Ok(RankOneResult {
            scores,
            singular_value: power.eigenvalue.max(0.0).sqrt(),
            iterations: power.iterations,
            delta: power.delta,
            converged: power.converged,
        })
    }

    /// Power iteration on a dense symmetric `dim × dim` matrix
    fn dominant_eigenpair(&self, gram: &[f64], dim: usize) -> Result<EigenPair> {
        let mut x = vec![1.0 / (dim as f64).sqrt(); dim];
        let mut y = vec![0.0; dim];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.tolerance {
            iterations += 1;
            mat_vec(gram, dim, &x, &mut y);

            let norm = y.iter().map(|v| v * v).sum::<f64>().sqrt();
            if !norm.is_finite() || norm <= EPSILON {
                return Err(SummarizeError::scoring_unavailable(
                    "dominant singular value is zero",
                ));
            }
            for v in &mut y {
                *v /= norm;
            }

            delta = x
                .iter()
                .zip(y.iter())
                .map(|(old, new)| (old - new) * (old - new))
                .sum::<f64>()
                .sqrt();

            std::mem::swap(&mut x, &mut y);
        }

        mat_vec(gram, dim, &x, &mut y);
        let eigenvalue: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();

        Ok(EigenPair {
            eigenvalue,
            vector: x,
            iterations,
            delta,
            converged: delta <= self.tolerance,
        })
    }
}

struct EigenPair {
    eigenvalue: f64,
    vector: Vec<f64>,
    iterations: usize,
    delta: f64,
    converged: bool,
}

fn mat_vec(matrix: &[f64], dim: usize, x: &[f64], out: &mut [f64]) {
    for (i, slot) in out.iter_mut().enumerate() {
        let row = &matrix[i * dim..(i + 1) * dim];
        *slot = row.iter().zip(x).map(|(a, b)| a * b).sum();
    }
}

/// Make the largest-magnitude score positive
fn flip_sign(scores: &mut [f64]) {
    let mut pivot = 0.0_f64;
    for &s in scores.iter() {
        if s.abs() > pivot.abs() {
            pivot = s;
        }
    }
    if pivot < 0.0 {
        for s in scores.iter_mut() {
            *s = -*s;
        }
    }
}
