//! Stored review record wrapping a feedback report with its context

use crate::analysis::{AnalysisOutcome, AnalysisSource};
use crate::scoring::feedback::{AnalysisInput, FeedbackReport};
use crate::scoring::taxonomy::JobCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A finished review as rendered and saved by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// `<resume stem>-<generation time in millis>`
    pub id: String,
    pub file_name: String,
    pub company_name: String,
    pub job_title: String,
    pub job_category: JobCategory,
    pub source: AnalysisSource,
    pub generated_at: DateTime<Utc>,
    pub feedback: FeedbackReport,
}

impl ReviewRecord {
    pub fn new(input: &AnalysisInput, outcome: AnalysisOutcome) -> Self {
        Self::generated_at(input, outcome, Utc::now())
    }

    pub fn generated_at(input: &AnalysisInput, outcome: AnalysisOutcome, generated_at: DateTime<Utc>) -> Self {
        let stem = Path::new(&input.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "resume".to_string());

        Self {
            id: format!("{}-{}", stem, generated_at.timestamp_millis()),
            file_name: input.file_name.clone(),
            company_name: input.company_name.clone(),
            job_title: input.job_title.clone(),
            job_category: JobCategory::classify(&input.job_title),
            source: outcome.source,
            generated_at,
            feedback: outcome.feedback,
        }
    }
}
