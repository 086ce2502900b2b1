//! Report structures produced by an optimization run

use crate::processing::keyword_extractor::KeywordSet;
use crate::processing::requirements::JobRequirements;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to show one result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Templated resume text
    pub optimized_resume_text: String,

    /// Catalog keywords found in the job description
    pub keywords: KeywordSet,

    /// Subset of `keywords` already present in the resume
    pub matched_keywords: Vec<String>,

    /// Improvement suggestions
    pub suggestions: Vec<String>,

    /// Match score (0-100)
    pub match_score: u8,

    /// Name of the uploaded resume file
    pub source_file_name: String,

    /// Requirements inferred from the job description
    pub job_requirements: JobRequirements,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub optimizer_version: String,
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            optimizer_version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms,
        }
    }
}

impl OptimizationReport {
    /// Short label for the score band
    pub fn score_label(&self) -> &'static str {
        match self.match_score {
            90..=100 => "Excellent",
            80..=89 => "Very Good",
            70..=79 => "Good",
            60..=69 => "Fair",
            _ => "Needs Work",
        }
    }

    pub fn verdict(&self) -> String {
        match self.match_score {
            80..=100 => "Your resume is well-aligned with the job requirements!".to_string(),
            60..=79 => "Your resume covers the basics; tailoring it further will help.".to_string(),
            _ => "Your resume needs significant tailoring for this role.".to_string(),
        }
    }

    /// Keywords from the job description that the resume does not mention
    pub fn missing_keywords(&self) -> Vec<&str> {
        self.keywords
            .iter()
            .map(|k| k.text.as_str())
            .filter(|text| !self.matched_keywords.iter().any(|m| m == text))
            .collect()
    }
}
