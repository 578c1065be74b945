//! Pipeline observer: hooks for logging and profiling.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. [`NoopObserver`] is the zero-cost default;
//! [`StageTimingObserver`] records how long each stage took.

use std::time::{Duration, Instant};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_COMBINE: &str = "combine";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_FORMAT: &str = "format";

/// Measurements reported when a stage ends
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Number of items the stage produced (sentences, scores, ...)
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }
}

/// Starts timing a stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Callbacks fired around every pipeline stage
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records the report of every completed stage, in order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Names of completed stages, in execution order
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }

    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::trace!(stage, elapsed_us = report.elapsed.as_micros() as u64, "stage finished");
        self.reports.push((stage, *report));
    }
}
