//! Output formatters: colored console text, JSON and Markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::ReviewRecord;
use crate::scoring::feedback::{CategoryScore, TipKind};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a finished review
pub trait OutputFormatter {
    fn format_report(&self, record: &ReviewRecord) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors and per-tip detail
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn score_label(score: u8) -> &'static str {
    match score {
        85..=u8::MAX => "EXCELLENT",
        70..=84 => "GOOD",
        55..=69 => "FAIR",
        40..=54 => "WEAK",
        _ => "POOR",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            70..=u8::MAX => Color::Green,
            55..=69 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let badge = score_label(score);
        if self.use_colors {
            format!("[{}]", badge.color(Self::score_color(score)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    /// Twenty-cell bar, one cell per five points
    fn score_bar(&self, score: u8) -> String {
        let filled = (score as usize + 2) / 5;
        let bar = format!("{}{}", "■".repeat(filled), "·".repeat(20 - filled.min(20)));
        self.colorize(&bar, Self::score_color(score))
    }

    fn format_tips(&self, output: &mut String, category: &CategoryScore) {
        for tip in &category.tips {
            let marker = match tip.kind {
                TipKind::Good => self.colorize("+", Color::Green),
                TipKind::Improve => self.colorize("-", Color::Yellow),
            };
            output.push_str(&format!("    {} {}\n", marker, tip.tip));
            if let Some(explanation) = &tip.explanation {
                output.push_str(&format!("      {}\n", self.colorize(explanation, Color::BrightBlack)));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, record: &ReviewRecord) -> Result<String> {
        let feedback = &record.feedback;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME REVIEW", 1));
        output.push_str(&format!(
            "Resume: {} | Role: {} ({})\n",
            record.file_name, record.job_title, record.job_category
        ));
        if !record.company_name.is_empty() {
            output.push_str(&format!("Company: {}\n", record.company_name));
        }
        output.push_str(&format!(
            "Generated: {} | Analysis: {}\n",
            record.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            record.source
        ));

        output.push_str(&self.format_header("Overall", 2));
        output.push_str(&format!(
            "Score: {}/100 {}\n",
            feedback.overall_score,
            self.format_score_badge(feedback.overall_score)
        ));
        output.push_str(&format!("{}\n", self.colorize(&feedback.compatibility, Color::Cyan)));

        output.push_str(&self.format_header("Category Breakdown", 2));
        for (name, category) in feedback.categories() {
            output.push_str(&format!("  {:<13} {:>3}  {}\n", name, category.score, self.score_bar(category.score)));
            if self.detailed {
                self.format_tips(&mut output, category);
            }
        }

        if !feedback.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            for strength in &feedback.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !feedback.improvements.is_empty() {
            output.push_str(&self.format_header("Improvements", 3));
            for improvement in &feedback.improvements {
                output.push_str(&format!("  • {}\n", self.colorize(improvement, Color::Yellow)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, record: &ReviewRecord) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(record)?)
        } else {
            Ok(serde_json::to_string(record)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, record: &ReviewRecord) -> Result<String> {
        let feedback = &record.feedback;
        let mut output = String::new();

        output.push_str(&format!("# Resume Review: {}\n\n", record.job_title));

        if self.include_metadata {
            output.push_str(&format!(
                "**Resume:** `{}` | **Category:** {} | **Analysis:** {}\n",
                record.file_name, record.job_category, record.source
            ));
            if !record.company_name.is_empty() {
                output.push_str(&format!("**Company:** {}\n", record.company_name));
            }
            output.push_str(&format!(
                "**Generated:** {}\n\n",
                record.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}/100 ({})\n\n",
            feedback.overall_score,
            score_label(feedback.overall_score)
        ));
        output.push_str(&format!("> {}\n\n", feedback.compatibility));

        output.push_str("| Category | Score |\n");
        output.push_str("|----------|-------|\n");
        for (name, category) in feedback.categories() {
            output.push_str(&format!("| {} | {} |\n", name, category.score));
        }
        output.push('\n');

        if !feedback.strengths.is_empty() {
            output.push_str("### Strengths\n\n");
            for strength in &feedback.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !feedback.improvements.is_empty() {
            output.push_str("### Improvements\n\n");
            for improvement in &feedback.improvements {
                output.push_str(&format!("- {}\n", improvement));
            }
            output.push('\n');
        }

        output.push_str("## Category Details\n\n");
        for (name, category) in feedback.categories() {
            output.push_str(&format!("### {} ({}/100)\n\n", name, category.score));
            for tip in &category.tips {
                let mark = if tip.is_good() { "✅" } else { "⚠️" };
                match &tip.explanation {
                    Some(explanation) => {
                        output.push_str(&format!("- {} **{}**: {}\n", mark, tip.tip, explanation));
                    }
                    None => {
                        output.push_str(&format!("- {} {}\n", mark, tip.tip));
                    }
                }
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by resume-reviewer v{}*\n", env!("CARGO_PKG_VERSION")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::with_options(output.color_output, output.detailed, output.pretty_json, true)
    }

    pub fn generate_report(&self, record: &ReviewRecord, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(record),
            OutputFormat::Json => self.json_formatter.format_report(record),
            OutputFormat::Markdown => self.markdown_formatter.format_report(record),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_review{}.{}", base_name, timestamp_suffix, extension)
}
