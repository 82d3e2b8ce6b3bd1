//! Interchangeable analysis strategies producing a `FeedbackReport`
//!
//! The heuristic scorer is always available; the LLM-backed analyzer is
//! composed in front of it with [`FallbackAnalyzer`] when a completion
//! source is configured.

pub mod fallback;
pub mod heuristic;
pub mod llm;

pub use fallback::FallbackAnalyzer;
pub use heuristic::HeuristicAnalyzer;
pub use llm::LlmAnalyzer;

use crate::error::Result;
use crate::scoring::feedback::{AnalysisInput, FeedbackReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Which strategy produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Heuristic,
    Llm,
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisSource::Heuristic => f.write_str("heuristic"),
            AnalysisSource::Llm => f.write_str("llm"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub feedback: FeedbackReport,
    pub source: AnalysisSource,
}

pub trait FeedbackAnalyzer {
    /// Source reported when this analyzer succeeds on its own
    fn source(&self) -> AnalysisSource;

    fn analyze(
        &self,
        input: &AnalysisInput,
        resume_text: &str,
    ) -> impl Future<Output = Result<AnalysisOutcome>> + Send;
}
