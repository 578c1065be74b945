//! Summarization pipeline: stage orchestration, observers and configuration
//! validation.

pub mod observer;
pub mod runner;
pub mod validation;
