use crate::analysis::{AnalysisOutcome, AnalysisSource, FeedbackAnalyzer};
use crate::config::{AnalysisConfig, LlmConfig};
use crate::error::Result;
use crate::llm::client::{CompletionClient, CompletionRequest};
use crate::llm::prompts::{build_review_prompt, PromptParams};
use crate::llm::response::parse_llm_feedback;
use crate::scoring::feedback::AnalysisInput;
use log::{debug, info, warn};
use std::time::Duration;

/// Model-backed analysis: prompt, complete, coerce
pub struct LlmAnalyzer<C> {
    client: C,
    llm: LlmConfig,
    analysis: AnalysisConfig,
}

impl<C: CompletionClient + Sync> LlmAnalyzer<C> {
    pub fn new(client: C, llm: LlmConfig, analysis: AnalysisConfig) -> Self {
        Self { client, llm, analysis }
    }

    /// Send the request, retrying transport failures `max_retries` times
    async fn complete_with_retry(&self, request: &CompletionRequest) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.client.complete(request).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < self.llm.max_retries => {
                    attempt += 1;
                    warn!(
                        "Completion attempt {} of {} failed: {}",
                        attempt,
                        self.llm.max_retries + 1,
                        e
                    );
                    tokio::time::sleep(Duration::from_millis(self.llm.retry_delay_ms)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl<C: CompletionClient + Sync> FeedbackAnalyzer for LlmAnalyzer<C> {
    fn source(&self) -> AnalysisSource {
        AnalysisSource::Llm
    }

    async fn analyze(&self, input: &AnalysisInput, resume_text: &str) -> Result<AnalysisOutcome> {
        info!("Requesting {} review from {} ({})", input.job_title, self.llm.provider, self.llm.model);

        let prompt = build_review_prompt(&PromptParams {
            job_title: &input.job_title,
            job_description: &input.job_description,
            resume_text,
        });
        debug!("Prompt is {} chars", prompt.chars().count());

        let request = CompletionRequest::new(prompt, &self.llm);
        let raw = self.complete_with_retry(&request).await?;
        let feedback = parse_llm_feedback(&raw, &input.company_name, &self.analysis)?;

        Ok(AnalysisOutcome {
            feedback,
            source: AnalysisSource::Llm,
        })
    }
}
