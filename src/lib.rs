//! Resume reviewer library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ResumeReviewError};
pub use scoring::{FeedbackReport, HeuristicScorer};
