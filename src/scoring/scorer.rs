//! Heuristic resume scorer: the deterministic baseline analysis

use crate::error::Result;
use crate::scoring::aggregator;
use crate::scoring::ats::AtsAnalyzer;
use crate::scoring::content::ContentAnalyzer;
use crate::scoring::feedback::{AnalysisInput, FeedbackReport};
use crate::scoring::skills;
use crate::scoring::structure::StructureAnalyzer;
use crate::scoring::taxonomy::JobCategory;
use crate::scoring::tone::ToneAnalyzer;
use log::debug;

/// Rule-based scorer over static keyword tables.
///
/// Construction builds the keyword matchers once; scoring itself is pure
/// and can be shared across threads.
pub struct HeuristicScorer {
    ats: AtsAnalyzer,
    content: ContentAnalyzer,
    structure: StructureAnalyzer,
    tone: ToneAnalyzer,
}

impl HeuristicScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ats: AtsAnalyzer::new()?,
            content: ContentAnalyzer::new()?,
            structure: StructureAnalyzer::new()?,
            tone: ToneAnalyzer::new()?,
        })
    }

    /// Score `resume_text` for the role described by `input`
    pub fn score(&self, input: &AnalysisInput, resume_text: &str) -> FeedbackReport {
        self.score_text(resume_text, &input.job_title, &input.job_description, &input.company_name)
    }

    pub fn score_text(
        &self,
        resume_text: &str,
        job_title: &str,
        job_description: &str,
        company_name: &str,
    ) -> FeedbackReport {
        let text = resume_text.to_lowercase();
        let job_description = job_description.to_lowercase();
        let category = JobCategory::classify(job_title);

        debug!(
            "Scoring {} chars of resume text as '{}' role (company: '{}')",
            text.chars().count(),
            category,
            company_name
        );

        let ats = self.ats.analyze(&text, &job_description);
        let skills = skills::analyze(&text, category.skills());
        let content = self.content.analyze(&text);
        let structure = self.structure.analyze(&text);
        let tone = self.tone.analyze(&text);

        debug!(
            "Category scores: ats={} skills={} content={} structure={} tone={}",
            ats.score, skills.score, content.score, structure.score, tone.score
        );

        aggregator::aggregate(ats, skills, content, structure, tone)
    }
}
