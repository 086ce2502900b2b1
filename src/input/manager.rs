//! Input manager: upload validation and resume text extraction

use crate::config::InputConfig;
use crate::error::{Result, ResumeOptimizerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PlaceholderExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// A resume file as received from the user
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read an upload from disk, inferring the MIME type from the extension
    /// unless one is given
    pub async fn from_path(path: &Path, mime_override: Option<&str>) -> Result<Self> {
        let bytes = fs::read(path).await.map_err(|e| {
            ResumeOptimizerError::FileReadFailure(format!("{}: {}", path.display(), e))
        })?;

        let mime_type = match mime_override {
            Some(mime) => mime.to_string(),
            None => {
                let extension = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or_default();
                FileType::from_extension(extension).mime_type().to_string()
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn file_type(&self) -> FileType {
        FileType::from_mime(&self.mime_type)
    }
}

/// Extracted text keyed by file type, then by the exact upload bytes
type TextCache = HashMap<FileType, HashMap<Vec<u8>, String>>;

pub struct InputManager {
    config: InputConfig,
    cache: TextCache,
    enable_cache: bool,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        let enable_cache = config.enable_caching;
        Self {
            config,
            cache: HashMap::new(),
            enable_cache,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Check presence, size and MIME type of an upload
    pub fn validate_upload<'a>(&self, upload: Option<&'a ResumeUpload>) -> Result<&'a ResumeUpload> {
        let upload = upload.ok_or(ResumeOptimizerError::MissingFile)?;

        if upload.size() > self.config.max_file_size_bytes {
            return Err(ResumeOptimizerError::FileTooLarge {
                size: upload.size(),
                limit: self.config.max_file_size_bytes,
            });
        }

        let allowed = self
            .config
            .allowed_mime_types
            .iter()
            .any(|mime| FileType::from_mime(mime) == upload.file_type());
        if !allowed || upload.file_type() == FileType::Unknown {
            return Err(ResumeOptimizerError::UnsupportedFileType(upload.mime_type.clone()));
        }

        debug!(
            "Upload '{}' accepted ({} bytes, {})",
            upload.file_name,
            upload.size(),
            upload.mime_type
        );
        Ok(upload)
    }

    /// Check a job description and return it trimmed
    pub fn validate_job_description<'a>(&self, job_description: Option<&'a str>) -> Result<&'a str> {
        let trimmed = job_description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(ResumeOptimizerError::MissingJobDescription)?;

        let actual = trimmed.chars().count();
        if actual < self.config.min_job_description_chars {
            return Err(ResumeOptimizerError::JobDescriptionTooShort {
                actual,
                minimum: self.config.min_job_description_chars,
            });
        }

        Ok(trimmed)
    }

    /// Read resume text from a validated upload
    pub fn extract_text(&mut self, upload: &ResumeUpload) -> Result<String> {
        let file_type = upload.file_type();

        if self.enable_cache {
            let cached = self
                .cache
                .get(&file_type)
                .and_then(|by_content| by_content.get(upload.bytes.as_slice()));
            if let Some(cached_text) = cached {
                info!("Using cached text for: {}", upload.file_name);
                return Ok(cached_text.clone());
            }
        }

        let text = match file_type {
            FileType::PlainText => {
                info!("Reading plain text resume: {}", upload.file_name);
                PlainTextExtractor.extract(&upload.bytes)?
            }
            FileType::Markdown => {
                info!("Processing markdown resume: {}", upload.file_name);
                MarkdownExtractor::new().extract(&upload.bytes)?
            }
            FileType::Pdf | FileType::Doc | FileType::Docx => {
                warn!(
                    "'{}' is a binary document; substituting the sample resume",
                    upload.file_name
                );
                PlaceholderExtractor.extract(&upload.bytes)?
            }
            FileType::Unknown => {
                return Err(ResumeOptimizerError::UnsupportedFileType(upload.mime_type.clone()));
            }
        };

        if self.enable_cache {
            self.cache
                .entry(file_type)
                .or_default()
                .insert(upload.bytes.clone(), text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.values().map(HashMap::len).sum()
    }
}
