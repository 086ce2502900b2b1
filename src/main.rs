//! resume-optimizer: keyword-driven resume optimization tool

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_optimizer::cli::{self, Cli, Commands, ConfigAction};
use resume_optimizer::config::{Config, OutputFormat};
use resume_optimizer::error::{Result, ResumeOptimizerError};
use resume_optimizer::input::file_detector::FileType;
use resume_optimizer::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use resume_optimizer::input::ResumeUpload;
use resume_optimizer::output::formatter::{save_report_to_file, suggest_filename};
use resume_optimizer::output::ReportGenerator;
use resume_optimizer::processing::catalog::{self, KeywordCategory, SUGGESTION_CATALOG};
use resume_optimizer::processing::random::{RandomSource, SeededRandom, ThreadRandom};
use resume_optimizer::processing::{ResumeOptimizer, SessionState};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    if let Err(e) = run_command(cli.command, config, config_path).await {
        if e.is_user_error() {
            error!("{}", e);
        } else {
            error!("Command failed: {}", e);
        }
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Optimize {
            resume,
            job,
            job_text,
            mime_type,
            output,
            save,
            seed,
            no_delay,
        } => {
            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(ResumeOptimizerError::InvalidInput)?
                }
                None => config.output.format,
            };

            let job_description = match (job, job_text) {
                (Some(path), _) => Some(read_job_description(&path).await?),
                (None, text) => text,
            };

            let upload = ResumeUpload::from_path(&resume, mime_type.as_deref()).await?;

            let mut optimizer = ResumeOptimizer::new(&config)?;
            let delay = if no_delay {
                Duration::ZERO
            } else {
                Duration::from_millis(config.processing.delay_ms)
            };
            optimizer = optimizer.with_delay(delay);

            let mut rng: Box<dyn RandomSource> = match seed {
                Some(seed) => {
                    info!("Using seeded random source ({})", seed);
                    Box::new(SeededRandom::new(seed))
                }
                None => Box::new(ThreadRandom),
            };

            let spinner = (output_format == OutputFormat::Console && !delay.is_zero())
                .then(processing_spinner);

            let mut state = SessionState::default();
            let result = optimizer
                .run_session(&mut state, Some(&upload), job_description.as_deref(), rng.as_mut())
                .await;

            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            let report = result?;

            let generator =
                ReportGenerator::with_options(config.output.color_output, config.output.pretty_json);
            println!("{}", generator.render_state(&state, &output_format)?);

            if let Some(save_path) = save {
                let target = if save_path.is_dir() {
                    save_path.join(suggest_filename(&output_format, &report.source_file_name, true))
                } else {
                    save_path
                };
                let plain = ReportGenerator::with_options(false, config.output.pretty_json);
                save_report_to_file(&plain.generate_report(&report, &output_format)?, &target)?;
                println!("💾 Report saved to {}", target.display());
            }

            Ok(())
        }

        Commands::Catalog { category, suggestions } => {
            if suggestions {
                println!("💡 Suggestion catalog ({} entries):", SUGGESTION_CATALOG.len());
                for (i, suggestion) in SUGGESTION_CATALOG.iter().enumerate() {
                    println!("  {}. {}", i + 1, suggestion);
                }
                return Ok(());
            }

            let categories = match category {
                Some(name) => vec![cli::parse_category(&name).map_err(ResumeOptimizerError::InvalidInput)?],
                None => vec![
                    KeywordCategory::Technical,
                    KeywordCategory::SoftSkill,
                    KeywordCategory::Seniority,
                ],
            };

            for category in categories {
                let terms: Vec<&str> = catalog::terms_for(category).iter().map(|e| e.term).collect();
                println!("\n🏷️  {} ({} terms):", category, terms.len());
                println!("  {}", terms.join(", "));
            }

            if !config.keywords.additional_terms.is_empty() {
                println!("\n➕ Additional terms from config:");
                println!("  {}", config.keywords.additional_terms.join(", "));
            }

            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeOptimizerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("📁 {}\n", config_path.display());
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&config_path)?;
                    println!("✅ Configuration reset to defaults at {}", config_path.display());
                }
                ConfigAction::Path => {
                    println!("{}", config_path.display());
                }
            }
            Ok(())
        }
    }
}

async fn read_job_description(path: &Path) -> Result<String> {
    cli::validate_file_extension(&path.to_path_buf(), &["txt", "md"])
        .map_err(|e| ResumeOptimizerError::InvalidInput(format!("Job description file: {}", e)))?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ResumeOptimizerError::FileReadFailure(format!("{}: {}", path.display(), e))
    })?;

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    match FileType::from_extension(extension) {
        FileType::Markdown => MarkdownExtractor::new().extract(&bytes),
        _ => PlainTextExtractor.extract(&bytes),
    }
}

fn processing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Optimizing your resume...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
