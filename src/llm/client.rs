//! Completion transport seam for LLM-backed analysis

use crate::config::{LlmConfig, LlmProvider};
use crate::error::{Result, ResumeReviewError};
use log::info;
use std::future::Future;
use std::path::PathBuf;
use tokio::fs;

/// A single chat-completion request for the review prompt
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub provider: LlmProvider,
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: String, config: &LlmConfig) -> Self {
        Self {
            provider: config.provider,
            model: config.model.clone(),
            prompt,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Anything that can turn a prompt into raw model text.
///
/// Network clients for hosted providers implement this outside the crate.
pub trait CompletionClient {
    fn complete(&self, request: &CompletionRequest) -> impl Future<Output = Result<String>> + Send;
}

/// Replays a model reply captured to disk earlier
#[derive(Debug, Clone)]
pub struct FileCompletionClient {
    path: PathBuf,
}

impl FileCompletionClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CompletionClient for FileCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        info!(
            "Replaying {} ({}) response from {}",
            request.provider,
            request.model,
            self.path.display()
        );

        let text = fs::read_to_string(&self.path).await.map_err(|e| {
            ResumeReviewError::Completion(format!("Cannot read response file '{}': {}", self.path.display(), e))
        })?;

        if text.trim().is_empty() {
            return Err(ResumeReviewError::Completion(format!(
                "Response file '{}' is empty",
                self.path.display()
            )));
        }

        Ok(text)
    }
}
