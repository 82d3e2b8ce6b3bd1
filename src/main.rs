//! resume-reviewer: score a resume against a target job

use clap::Parser;
use log::{error, info};
use resume_reviewer::analysis::{FallbackAnalyzer, FeedbackAnalyzer, HeuristicAnalyzer, LlmAnalyzer};
use resume_reviewer::cli::{self, Cli, Commands, ConfigAction};
use resume_reviewer::config::{Config, OutputConfig};
use resume_reviewer::input::DocumentLoader;
use resume_reviewer::llm::{build_review_prompt, FileCompletionClient, PromptParams};
use resume_reviewer::output::{save_report_to_file, ReportGenerator, ReviewRecord};
use resume_reviewer::scoring::{AnalysisInput, JobCategory};
use resume_reviewer::{Result, ResumeReviewError};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];
const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Review {
            resume,
            job_title,
            job,
            job_description,
            company,
            llm_response,
            output,
            save,
            detailed,
        } => {
            let mut output_config = config.output.clone();
            if let Some(format) = output {
                output_config.format = cli::parse_output_format(&format).map_err(ResumeReviewError::InvalidInput)?;
            }
            output_config.detailed |= detailed;

            let mut loader = DocumentLoader::new();
            let (input, resume_text) =
                load_inputs(&mut loader, &resume, job_title, job.as_deref(), job_description, company).await?;

            let heuristic = HeuristicAnalyzer::new()?;
            let record = match llm_response {
                Some(path) => {
                    info!("Using captured LLM reply: {}", path.display());
                    let llm = LlmAnalyzer::new(
                        FileCompletionClient::new(path),
                        config.llm.clone(),
                        config.analysis.clone(),
                    );
                    review(&FallbackAnalyzer::new(llm, heuristic), &input, &resume_text).await?
                }
                None => review(&heuristic, &input, &resume_text).await?,
            };

            emit_report(&record, &output_config, save.as_deref())?;
        }

        Commands::Classify { title } => {
            let category = JobCategory::classify(&title);
            println!("Job category: {}\n", category);
            println!("Skill groups:");
            for group in category.skills() {
                println!("  {} (weight {:.0}%)", group.name, group.weight * 100.0);
                println!("    {}", group.keywords.join(", "));
            }
        }

        Commands::Prompt {
            resume,
            job_title,
            job,
            job_description,
        } => {
            let mut loader = DocumentLoader::new();
            let (input, resume_text) =
                load_inputs(&mut loader, &resume, job_title, job.as_deref(), job_description, String::new()).await?;

            println!(
                "{}",
                build_review_prompt(&PromptParams {
                    job_title: &input.job_title,
                    job_description: &input.job_description,
                    resume_text: &resume_text,
                })
            );
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeReviewError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("# {}\n{}", config_path.display(), rendered);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

/// Read the resume and the job description, from a file or inline text
async fn load_inputs(
    loader: &mut DocumentLoader,
    resume: &Path,
    job_title: String,
    job: Option<&Path>,
    job_description: Option<String>,
    company: String,
) -> Result<(AnalysisInput, String)> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| ResumeReviewError::InvalidInput(format!("Resume file: {}", e)))?;

    if job_title.trim().is_empty() {
        return Err(ResumeReviewError::InvalidInput("Job title must not be empty".to_string()));
    }

    let job_description = match (job, job_description) {
        (Some(path), _) => {
            cli::validate_file_extension(path, JOB_EXTENSIONS)
                .map_err(|e| ResumeReviewError::InvalidInput(format!("Job description file: {}", e)))?;
            loader.load_text(path).await?
        }
        (None, Some(text)) => text,
        (None, None) => {
            return Err(ResumeReviewError::InvalidInput(
                "Provide a job description with --job or --job-description".to_string(),
            ))
        }
    };

    let document = loader.load(resume).await?;
    info!(
        "Loaded {} resume '{}' ({} chars)",
        document.file_type,
        document.file_name,
        document.text.chars().count()
    );

    let input = AnalysisInput::new(document.file_name, job_title, job_description, company);
    Ok((input, document.text))
}

async fn review<A: FeedbackAnalyzer>(analyzer: &A, input: &AnalysisInput, resume_text: &str) -> Result<ReviewRecord> {
    let outcome = analyzer.analyze(input, resume_text).await?;
    info!(
        "Review finished: {}/100 from {} analysis",
        outcome.feedback.overall_score, outcome.source
    );
    Ok(ReviewRecord::new(input, outcome))
}

fn emit_report(record: &ReviewRecord, output: &OutputConfig, save: Option<&Path>) -> Result<()> {
    let generator = ReportGenerator::from_config(output);
    println!("{}", generator.generate_report(record, output.format)?);

    if let Some(path) = save {
        // Files never get ANSI escapes
        let plain = ReportGenerator::with_options(false, output.detailed, output.pretty_json, true);
        let content = plain.generate_report(record, output.format)?;
        let path: PathBuf = if path.is_dir() {
            path.join(resume_reviewer::output::suggest_filename(output.format, &record.file_name, true))
        } else {
            path.to_path_buf()
        };
        save_report_to_file(&content, &path)?;
        info!("Report saved to {}", path.display());
    }

    Ok(())
}
