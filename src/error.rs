//! Error handling for the resume optimizer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeOptimizerError {
    #[error("Please upload your resume first")]
    MissingFile,

    #[error("Please provide the job description")]
    MissingJobDescription,

    #[error("Job description is too short: {actual} characters (minimum {minimum})")]
    JobDescriptionTooShort { actual: usize, minimum: usize },

    #[error("File is too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("File type not supported: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to read file: {0}")]
    FileReadFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("An optimization is already in progress")]
    Busy,
}

impl ResumeOptimizerError {
    /// True for errors caused by what the user supplied, as opposed to the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ResumeOptimizerError::MissingFile
                | ResumeOptimizerError::MissingJobDescription
                | ResumeOptimizerError::JobDescriptionTooShort { .. }
                | ResumeOptimizerError::FileTooLarge { .. }
                | ResumeOptimizerError::UnsupportedFileType(_)
                | ResumeOptimizerError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeOptimizerError>;

impl From<askama::Error> for ResumeOptimizerError {
    fn from(err: askama::Error) -> Self {
        ResumeOptimizerError::OutputFormatting(err.to_string())
    }
}
