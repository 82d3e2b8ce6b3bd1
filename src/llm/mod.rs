//! LLM integration: prompt building, completion transport and reply coercion

pub mod client;
pub mod prompts;
pub mod response;

pub use client::{CompletionClient, CompletionRequest, FileCompletionClient};
pub use prompts::{build_review_prompt, PromptParams};
pub use response::parse_llm_feedback;
