//! File type detection

use crate::config::{MIME_DOC, MIME_DOCX, MIME_MARKDOWN, MIME_PDF, MIME_PLAIN_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    PlainText,
    Markdown,
    Pdf,
    Doc,
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => FileType::PlainText,
            "md" | "markdown" => FileType::Markdown,
            "pdf" => FileType::Pdf,
            "doc" => FileType::Doc,
            "docx" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        // Ignore parameters such as "; charset=utf-8"
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_lowercase().as_str() {
            MIME_PLAIN_TEXT => FileType::PlainText,
            MIME_MARKDOWN => FileType::Markdown,
            MIME_PDF => FileType::Pdf,
            MIME_DOC => FileType::Doc,
            MIME_DOCX => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    /// MIME type reported for uploads of this type
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileType::PlainText => MIME_PLAIN_TEXT,
            FileType::Markdown => MIME_MARKDOWN,
            FileType::Pdf => MIME_PDF,
            FileType::Doc => MIME_DOC,
            FileType::Docx => MIME_DOCX,
            FileType::Unknown => "application/octet-stream",
        }
    }
}
