//! CLI interface for the resume reviewer

use crate::config::OutputFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-reviewer", version)]
#[command(about = "Score a resume against a target job")]
#[command(long_about = "Review a resume for ATS compatibility, skills coverage, content, structure and tone, \
    using built-in heuristics or a captured LLM reply")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Review a resume for a job
    #[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_description"])))]
    Review {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Title of the target position
        #[arg(short = 't', long)]
        job_title: String,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(short = 'D', long)]
        job_description: Option<String>,

        /// Company the job is posted by
        #[arg(long, default_value = "")]
        company: String,

        /// Use a captured LLM reply instead of heuristics, falling back to heuristics if it is unusable
        #[arg(long)]
        llm_response: Option<PathBuf>,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show every tip with its explanation
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the job category and skill groups used for a title
    Classify {
        /// Job title to classify
        title: String,
    },

    /// Print the LLM review prompt for a resume and job
    #[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_description"])))]
    Prompt {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        #[arg(short = 't', long)]
        job_title: String,

        #[arg(short, long)]
        job: Option<PathBuf>,

        #[arg(short = 'D', long)]
        job_description: Option<String>,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_review_requires_a_job_source() {
        let missing = Cli::try_parse_from(["resume-reviewer", "review", "-r", "cv.pdf", "-t", "Engineer"]);
        assert!(missing.is_err());

        let both = Cli::try_parse_from([
            "resume-reviewer", "review", "-r", "cv.pdf", "-t", "Engineer", "-j", "job.txt", "-D", "inline",
        ]);
        assert!(both.is_err());

        let cli = Cli::try_parse_from([
            "resume-reviewer", "review", "-r", "cv.pdf", "-t", "Engineer", "-D", "Rust", "--company", "Acme",
        ])
        .unwrap();
        match cli.command {
            Commands::Review {
                job_description,
                company,
                job,
                ..
            } => {
                assert_eq!(job_description.as_deref(), Some("Rust"));
                assert_eq!(company, "Acme");
                assert!(job.is_none());
            }
            _ => panic!("expected review command"),
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_extension_validation() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }
}
