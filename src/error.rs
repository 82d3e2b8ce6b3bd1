//! Error handling for the resume reviewer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeReviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Completion service error: {0}")]
    Completion(String),

    #[error("Malformed LLM response: {0}")]
    LlmResponse(String),

    #[error("Scorer initialization failed: {0}")]
    ScorerInit(String),
}

pub type Result<T> = std::result::Result<T, ResumeReviewError>;

impl From<aho_corasick::BuildError> for ResumeReviewError {
    fn from(err: aho_corasick::BuildError) -> Self {
        ResumeReviewError::ScorerInit(err.to_string())
    }
}
