//! CLI interface for the resume optimizer

use crate::config::OutputFormat;
use crate::processing::catalog::KeywordCategory;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-optimizer")]
#[command(about = "Keyword-driven resume optimizer")]
#[command(long_about = "Extract ATS keywords from a job description, score a resume against them and produce an optimized resume draft")]
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
    /// Optimize a resume for a job description
    Optimize {
        /// Path to resume file (TXT, MD, PDF, DOC, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description passed inline
        #[arg(short = 't', long)]
        job_text: Option<String>,

        /// Override the MIME type inferred from the resume extension
        #[arg(long)]
        mime_type: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Seed for reproducible scores and suggestions
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the simulated processing delay
        #[arg(long)]
        no_delay: bool,
    },

    /// List the keyword and suggestion catalogs
    Catalog {
        /// Only show one category: technical, soft, seniority
        #[arg(long)]
        category: Option<String>,

        /// Show the suggestion catalog instead of keywords
        #[arg(long)]
        suggestions: bool,
    },

    /// Show or reset configuration
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

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

pub fn parse_category(category: &str) -> Result<KeywordCategory, String> {
    match category.to_lowercase().as_str() {
        "technical" | "tech" => Ok(KeywordCategory::Technical),
        "soft" | "soft-skill" | "soft_skill" => Ok(KeywordCategory::SoftSkill),
        "seniority" | "level" => Ok(KeywordCategory::Seniority),
        _ => Err(format!(
            "Invalid category: {}. Supported: technical, soft, seniority",
            category
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
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
    fn test_optimize_arguments() {
        let cli = Cli::try_parse_from([
            "resume-optimizer",
            "optimize",
            "-r",
            "resume.pdf",
            "-t",
            "We need a senior Rust engineer",
            "--seed",
            "7",
            "--no-delay",
        ])
        .unwrap();

        match cli.command {
            Commands::Optimize { resume, job, job_text, seed, no_delay, .. } => {
                assert_eq!(resume, PathBuf::from("resume.pdf"));
                assert!(job.is_none());
                assert_eq!(job_text.as_deref(), Some("We need a senior Rust engineer"));
                assert_eq!(seed, Some(7));
                assert!(no_delay);
            }
            _ => panic!("expected optimize command"),
        }
    }

    #[test]
    fn test_job_file_conflicts_with_inline_text() {
        let result = Cli::try_parse_from([
            "resume-optimizer",
            "optimize",
            "-r",
            "resume.txt",
            "-j",
            "job.txt",
            "-t",
            "inline",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("soft"), Ok(KeywordCategory::SoftSkill));
        assert!(parse_category("hobbies").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("job.MD"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("job.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("job"), &["txt", "md"]).is_err());
    }
}
