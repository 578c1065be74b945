//! Pipeline runner that orchestrates the summarization stages.
//!
//! [`Summarizer::summarize`] threads a document through
//! segment → score → combine → select, notifying an optional
//! [`PipelineObserver`] and entering a `tracing` span at each boundary.
//! Rendering ([`Summarizer::render`]) is the final, separate stage.
//!
//! Paths through the pipeline:
//!
//! | Input | Result |
//! |-------|--------|
//! | empty / whitespace | [`SummaryKind::Empty`], 0 sentences, 0 words |
//! | one sentence | [`SummaryKind::Verbatim`], input returned unchanged |
//! | scoring unavailable | [`SummaryKind::Positional`], ranked by position only |
//! | otherwise | [`SummaryKind::Ranked`] |

use crate::error::{Result, SummarizeError};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_COMBINE, STAGE_FORMAT,
    STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::resources::LanguageResources;
use crate::summarizer::format::{format_bulleted, Formatter};
use crate::summarizer::keywords::extract_keywords;
use crate::summarizer::rank::RankCombiner;
use crate::summarizer::scorer::FeatureScorer;
use crate::summarizer::selector::BudgetSelector;
use crate::types::{Summary, SummaryConfig, SummaryKind};
use std::sync::Arc;

/// Run one stage inside a span, timing it and notifying the observer.
fn run_stage<T, O>(
    observer: &mut O,
    name: &'static str,
    count: impl FnOnce(&T) -> usize,
    body: impl FnOnce() -> T,
) -> T
where
    O: PipelineObserver + ?Sized,
{
    let _span = tracing::info_span!("summarize_stage", stage = name).entered();
    observer.on_stage_start(name);
    let clock = StageClock::start();
    let out = body();
    let report = StageReport::new(clock.elapsed()).with_items(count(&out));
    observer.on_stage_end(name, &report);
    out
}

/// Extractive summarizer bound to one set of language resources.
///
/// Cheap to clone; resources are shared through an [`Arc`].
#[derive(Debug, Clone)]
pub struct Summarizer {
    resources: Arc<LanguageResources>,
    config: SummaryConfig,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            resources: LanguageResources::shared_english(),
            config: SummaryConfig::default(),
        }
    }
}

impl Summarizer {
    /// Summarizer with the shared English resources and default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarizer with injected resources.
    ///
    /// Fails if `config` does not validate.
    pub fn with_resources(
        resources: Arc<LanguageResources>,
        config: SummaryConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { resources, config })
    }

    /// Summarizer that loads resources for `config.language`
    pub fn from_config(config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        let resources = Arc::new(LanguageResources::new(&config.language));
        Ok(Self { resources, config })
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Split `text` into trimmed sentence strings
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.resources.segmenter().segment(text)
    }

    /// Summarize `text` within `target_word_count` words.
    ///
    /// Empty input and input with fewer than two sentences are returned
    /// before the budget is checked, so a zero target only fails with
    /// [`SummarizeError::InvalidBudget`] when there is something to select.
    pub fn summarize(&self, text: &str, target_word_count: usize) -> Result<Summary> {
        self.summarize_observed::<&str, _>(text, target_word_count, &[], &mut NoopObserver)
    }

    /// Summarize with keyword hints that raise the rank of sentences
    /// containing them (see [`RankCombiner::with_keywords`])
    pub fn summarize_with_keywords<S: AsRef<str>>(
        &self,
        text: &str,
        target_word_count: usize,
        keywords: &[S],
    ) -> Result<Summary> {
        self.summarize_observed(text, target_word_count, keywords, &mut NoopObserver)
    }

    /// Full pipeline with stage callbacks
    pub fn summarize_observed<S, O>(
        &self,
        text: &str,
        target_word_count: usize,
        keywords: &[S],
        observer: &mut O,
    ) -> Result<Summary>
    where
        S: AsRef<str>,
        O: PipelineObserver + ?Sized,
    {
        if text.trim().is_empty() {
            tracing::debug!("empty input, returning empty summary");
            return Ok(Summary::empty());
        }

        // Stage 1: Segment
        let sentences = run_stage(observer, STAGE_SEGMENT, Vec::len, || {
            self.resources.segmenter().sentences(text)
        });

        if sentences.len() < 2 {
            tracing::debug!(
                sentences = sentences.len(),
                "fewer than two sentences, returning input verbatim"
            );
            return Ok(Summary::verbatim(text, sentences.len()));
        }

        let selector = BudgetSelector::new(target_word_count)?;

        // Stage 2: Score
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        let scored = run_stage(
            observer,
            STAGE_SCORE,
            |r: &Result<Vec<f64>>| r.as_ref().map_or(0, Vec::len),
            || FeatureScorer::from_config(self.resources.stopwords(), &self.config).score(&texts),
        );
        let (salience, kind) = match scored {
            Ok(salience) => (salience, SummaryKind::Ranked),
            Err(SummarizeError::ScoringUnavailable { reason }) => {
                tracing::warn!(%reason, "scoring unavailable, ranking by position only");
                (vec![0.0; sentences.len()], SummaryKind::Positional)
            }
            Err(err) => return Err(err),
        };

        // Stage 3: Combine
        let ranked = run_stage(observer, STAGE_COMBINE, Vec::len, || {
            RankCombiner::new()
                .with_keywords(keywords, self.config.keyword_weight)
                .combine(&sentences, &salience)
        });

        // Stage 4: Select
        let mut summary = run_stage(
            observer,
            STAGE_SELECT,
            |s: &Summary| s.sentence_count,
            || selector.select(&ranked),
        );
        summary.kind = kind;

        tracing::debug!(
            sentences = summary.sentence_count,
            words = summary.word_count,
            target = target_word_count,
            kind = ?summary.kind,
            "summary assembled"
        );
        Ok(summary)
    }

    /// Render a summary in the configured [`OutputStyle`](crate::OutputStyle)
    pub fn render(&self, summary: &Summary) -> String {
        self.render_observed(summary, &mut NoopObserver)
    }

    pub fn render_observed<O>(&self, summary: &Summary, observer: &mut O) -> String
    where
        O: PipelineObserver + ?Sized,
    {
        run_stage(observer, STAGE_FORMAT, |s: &String| s.len(), || {
            Formatter::new(self.resources.segmenter(), self.config.style).render(summary)
        })
    }

    /// Re-segment `summary_text` and bullet each sentence
    pub fn format_bulleted(&self, summary_text: &str) -> String {
        format_bulleted(self.resources.segmenter(), summary_text)
    }

    /// Candidate keyword hints drawn from `text`
    pub fn keywords(&self, text: &str) -> Vec<String> {
        extract_keywords(text, self.resources.stopwords())
    }
}
