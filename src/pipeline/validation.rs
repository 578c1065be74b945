//! Validation engine for summarizer configuration.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummaryConfig`] and collects every diagnostic into a
//! [`ValidationReport`]. It never short-circuits on the first error, so
//! users see all problems at once.
//!
//! ```rust
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//! use rapid_summarizer::SummaryConfig;
//!
//! let config = SummaryConfig::default().with_ngram_range(3, 1);
//! let report = ValidationEngine::with_defaults().validate(&config);
//! assert!(report.has_errors());
//! ```

use crate::nlp::stopwords::resolve_language;
use crate::types::SummaryConfig;
use serde::Serialize;
use std::fmt;

// ─── Diagnostics ────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Stable machine-readable category of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidRange,
    InvalidSolver,
    InvalidWeight,
    UnknownLanguage,
}

/// A single finding: code, JSON-pointer path, message and optional hint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigIssue {
    pub code: IssueCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigIssue {
    pub fn new(code: IssueCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub issue: ConfigIssue,
}

impl ValidationDiagnostic {
    pub fn error(issue: ConfigIssue) -> Self {
        Self {
            severity: Severity::Error,
            issue,
        }
    }

    pub fn warning(issue: ConfigIssue) -> Self {
        Self {
            severity: Severity::Warning,
            issue,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigIssue> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.issue)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummaryConfig`] and returns
/// zero or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"ngram_range"`).
    fn name(&self) -> &str;

    fn validate(&self, config: &SummaryConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(NgramRangeRule));
        engine.add_rule(Box::new(SolverRule));
        engine.add_rule(Box::new(KeywordWeightRule));
        engine.add_rule(Box::new(LanguageRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `config` and return the collected report.
    pub fn validate(&self, config: &SummaryConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(config));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. 1 ≤ min ≤ max ───────────────────────────────────────────────────────

struct NgramRangeRule;

impl ValidationRule for NgramRangeRule {
    fn name(&self) -> &str {
        "ngram_range"
    }

    fn validate(&self, config: &SummaryConfig) -> Vec<ValidationDiagnostic> {
        let (min, max) = config.ngram_range;
        if min == 0 || min > max {
            vec![ValidationDiagnostic::error(
                ConfigIssue::new(
                    IssueCode::InvalidRange,
                    "/ngram_range",
                    format!("n-gram range ({min}, {max}) must satisfy 1 <= min <= max"),
                )
                .with_hint("Use [1, 2] for unigrams and bigrams"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 2. Solver limits ───────────────────────────────────────────────────────

struct SolverRule;

impl ValidationRule for SolverRule {
    fn name(&self) -> &str {
        "solver"
    }

    fn validate(&self, config: &SummaryConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if config.solver.max_iterations == 0 {
            out.push(ValidationDiagnostic::error(ConfigIssue::new(
                IssueCode::InvalidSolver,
                "/solver/max_iterations",
                "max_iterations must be greater than 0",
            )));
        }

        let tol = config.solver.tolerance;
        if !tol.is_finite() || tol <= 0.0 {
            out.push(ValidationDiagnostic::error(
                ConfigIssue::new(
                    IssueCode::InvalidSolver,
                    "/solver/tolerance",
                    format!("tolerance must be a positive finite number, got {tol}"),
                )
                .with_hint("The default is 1e-10"),
            ));
        }

        out
    }
}

// ─── 3. Keyword weight ──────────────────────────────────────────────────────

struct KeywordWeightRule;

impl ValidationRule for KeywordWeightRule {
    fn name(&self) -> &str {
        "keyword_weight"
    }

    fn validate(&self, config: &SummaryConfig) -> Vec<ValidationDiagnostic> {
        let w = config.keyword_weight;
        if !w.is_finite() || w < 0.0 {
            vec![ValidationDiagnostic::error(
                ConfigIssue::new(
                    IssueCode::InvalidWeight,
                    "/keyword_weight",
                    format!("keyword_weight must be finite and non-negative, got {w}"),
                )
                .with_hint("Set 0 to ignore keyword hints"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 4. Language (unknown → warning, falls back to English) ─────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, config: &SummaryConfig) -> Vec<ValidationDiagnostic> {
        if resolve_language(&config.language).is_some() {
            return vec![];
        }
        vec![ValidationDiagnostic::warning(
            ConfigIssue::new(
                IssueCode::UnknownLanguage,
                "/language",
                format!("no stop-word list for \"{}\"; English is used", config.language),
            )
            .with_hint("Use an ISO 639-1 code such as \"en\" or \"de\""),
        )]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
