//! Configuration management for the resume optimizer

use crate::error::{Result, ResumeOptimizerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub input: InputConfig,
    pub keywords: KeywordConfig,
    pub scoring: ScoringConfig,
    pub suggestions: SuggestionConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    pub max_file_size_bytes: u64,
    pub min_job_description_chars: usize,
    pub allowed_mime_types: Vec<String>,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordConfig {
    pub max_keywords: usize,
    /// Extra terms appended to the technical catalog
    #[serde(default)]
    pub additional_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Points awarded for full keyword overlap, within 0.0..=100.0
    pub keyword_weight: f32,
    pub bonus_min: u32,
    pub bonus_max: u32,
    pub score_ceiling: u8,
    /// Fraction used in place of the overlap ratio when no keywords were extracted
    pub empty_keyword_fraction: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionConfig {
    pub min_count: usize,
    pub max_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessingConfig {
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_MARKDOWN: &str = "text/markdown";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                max_file_size_bytes: 5 * 1024 * 1024,
                min_job_description_chars: 50,
                allowed_mime_types: vec![
                    MIME_PLAIN_TEXT.to_string(),
                    MIME_MARKDOWN.to_string(),
                    MIME_PDF.to_string(),
                    MIME_DOC.to_string(),
                    MIME_DOCX.to_string(),
                ],
                enable_caching: true,
            },
            keywords: KeywordConfig {
                max_keywords: 12,
                additional_terms: Vec::new(),
            },
            scoring: ScoringConfig {
                keyword_weight: 70.0,
                bonus_min: 15,
                bonus_max: 28,
                score_ceiling: 98,
                empty_keyword_fraction: 0.5,
            },
            suggestions: SuggestionConfig {
                min_count: 4,
                max_count: 6,
            },
            processing: ProcessingConfig { delay_ms: 2000 },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeOptimizerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeOptimizerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-optimizer")
            .join("config.toml")
    }

    /// Reject settings that would break the scoring or suggestion invariants
    pub fn validate(&self) -> Result<()> {
        if self.scoring.bonus_min > self.scoring.bonus_max {
            return Err(ResumeOptimizerError::Configuration(format!(
                "scoring.bonus_min ({}) exceeds scoring.bonus_max ({})",
                self.scoring.bonus_min, self.scoring.bonus_max
            )));
        }
        let weight = self.scoring.keyword_weight;
        if !weight.is_finite() || !(0.0..=100.0).contains(&weight) {
            return Err(ResumeOptimizerError::Configuration(format!(
                "scoring.keyword_weight ({}) must be within 0.0..=100.0",
                weight
            )));
        }
        if self.scoring.score_ceiling > 100 {
            return Err(ResumeOptimizerError::Configuration(
                "scoring.score_ceiling must be at most 100".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.scoring.empty_keyword_fraction) {
            return Err(ResumeOptimizerError::Configuration(
                "scoring.empty_keyword_fraction must be within 0.0..=1.0".to_string(),
            ));
        }
        if self.suggestions.min_count > self.suggestions.max_count {
            return Err(ResumeOptimizerError::Configuration(format!(
                "suggestions.min_count ({}) exceeds suggestions.max_count ({})",
                self.suggestions.min_count, self.suggestions.max_count
            )));
        }
        if self.keywords.max_keywords == 0 {
            return Err(ResumeOptimizerError::Configuration(
                "keywords.max_keywords must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_mime_allowed(&self, mime_type: &str) -> bool {
        self.input
            .allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }
}
