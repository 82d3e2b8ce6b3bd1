use crate::analysis::{AnalysisOutcome, AnalysisSource, FeedbackAnalyzer};
use crate::error::Result;
use crate::scoring::feedback::AnalysisInput;
use crate::scoring::scorer::HeuristicScorer;
use log::info;

/// Deterministic analysis backed by [`HeuristicScorer`]
pub struct HeuristicAnalyzer {
    scorer: HeuristicScorer,
}

impl HeuristicAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scorer: HeuristicScorer::new()?,
        })
    }

    pub fn from_scorer(scorer: HeuristicScorer) -> Self {
        Self { scorer }
    }
}

impl FeedbackAnalyzer for HeuristicAnalyzer {
    fn source(&self) -> AnalysisSource {
        AnalysisSource::Heuristic
    }

    async fn analyze(&self, input: &AnalysisInput, resume_text: &str) -> Result<AnalysisOutcome> {
        info!("Running heuristic analysis for '{}'", input.job_title);

        Ok(AnalysisOutcome {
            feedback: self.scorer.score(input, resume_text),
            source: AnalysisSource::Heuristic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matches_direct_scoring() {
        let analyzer = HeuristicAnalyzer::new().unwrap();
        let input = AnalysisInput::new("resume.txt", "Backend Engineer", "Rust services with Docker", "Initech");
        let resume = "Experience: developed Rust services. Education: BSc. Skills: docker, aws.";

        let outcome = analyzer.analyze(&input, resume).await.unwrap();
        assert_eq!(outcome.source, AnalysisSource::Heuristic);
        assert_eq!(outcome.feedback, HeuristicScorer::new().unwrap().score(&input, resume));
    }
}
