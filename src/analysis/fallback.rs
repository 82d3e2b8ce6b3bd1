use crate::analysis::{AnalysisOutcome, AnalysisSource, FeedbackAnalyzer};
use crate::error::Result;
use crate::scoring::feedback::AnalysisInput;
use log::warn;

/// Runs `primary`, and `fallback` whenever the primary fails
pub struct FallbackAnalyzer<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackAnalyzer<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> FeedbackAnalyzer for FallbackAnalyzer<P, F>
where
    P: FeedbackAnalyzer + Sync,
    F: FeedbackAnalyzer + Sync,
{
    fn source(&self) -> AnalysisSource {
        self.primary.source()
    }

    async fn analyze(&self, input: &AnalysisInput, resume_text: &str) -> Result<AnalysisOutcome> {
        match self.primary.analyze(input, resume_text).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!(
                    "{} analysis failed ({}), falling back to {} analysis",
                    self.primary.source(),
                    e,
                    self.fallback.source()
                );
                self.fallback.analyze(input, resume_text).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::HeuristicAnalyzer;
    use crate::error::ResumeReviewError;

    struct Failing;

    impl FeedbackAnalyzer for Failing {
        fn source(&self) -> AnalysisSource {
            AnalysisSource::Llm
        }

        async fn analyze(&self, _input: &AnalysisInput, _resume_text: &str) -> Result<AnalysisOutcome> {
            Err(ResumeReviewError::Completion("service unavailable".to_string()))
        }
    }

    fn input() -> AnalysisInput {
        AnalysisInput::new("resume.md", "Frontend Developer", "React and TypeScript", "")
    }

    #[tokio::test]
    async fn test_uses_fallback_when_primary_fails() {
        let analyzer = FallbackAnalyzer::new(Failing, HeuristicAnalyzer::new().unwrap());
        let outcome = analyzer.analyze(&input(), "react developer").await.unwrap();

        assert_eq!(analyzer.source(), AnalysisSource::Llm);
        assert_eq!(outcome.source, AnalysisSource::Heuristic);
    }

    #[tokio::test]
    async fn test_primary_result_wins() {
        let analyzer = FallbackAnalyzer::new(HeuristicAnalyzer::new().unwrap(), Failing);
        let outcome = analyzer.analyze(&input(), "react developer").await.unwrap();
        assert_eq!(outcome.source, AnalysisSource::Heuristic);
    }

    #[tokio::test]
    async fn test_both_failing_reports_fallback_error() {
        let analyzer = FallbackAnalyzer::new(Failing, Failing);
        assert!(analyzer.analyze(&input(), "").await.is_err());
    }
}
