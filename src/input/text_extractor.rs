//! Text extraction from uploaded resume bytes

use crate::error::{Result, ResumeOptimizerError};
use pulldown_cmark::{html, Parser};
use regex::Regex;

/// Stand-in resume used for binary formats, which are never parsed
pub const PLACEHOLDER_RESUME: &str = "\
Jane Doe
Software Developer

SUMMARY
Developer with several years of experience building web applications.

EXPERIENCE
Software Developer | Example Corp | 2019 - Present
- Built and maintained internal tools
- Worked with a cross-functional team on customer-facing features

EDUCATION
Bachelor of Science in Computer Science

SKILLS
JavaScript, Python, SQL, Communication";

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            ResumeOptimizerError::FileReadFailure(format!("File is not valid UTF-8 text: {}", e))
        })?;
        // Strip a UTF-8 byte order mark if present
        Ok(text.trim_start_matches('\u{feff}').to_string())
    }
}

pub struct MarkdownExtractor {
    tag_regex: Regex,
}

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self {
            tag_regex: Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"),
        }
    }

    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let clean_text = self.tag_regex.replace_all(&text, "");
        // Ampersand last so "&amp;lt;" stays literal
        let clean_text = clean_text.replace("&amp;", "&");

        clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown_content = PlainTextExtractor.extract(bytes)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

pub struct PlaceholderExtractor;

impl TextExtractor for PlaceholderExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String> {
        Ok(PLACEHOLDER_RESUME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_extraction() {
        let text = PlainTextExtractor.extract("\u{feff}John Doe\nRust".as_bytes()).unwrap();
        assert_eq!(text, "John Doe\nRust");
    }

    #[test]
    fn test_invalid_utf8_is_read_failure() {
        let result = PlainTextExtractor.extract(&[0xff, 0xfe, 0x00, 0xd8]);
        assert!(matches!(result, Err(ResumeOptimizerError::FileReadFailure(_))));
    }

    #[test]
    fn test_markdown_formatting_removed() {
        let source = "# John Doe\n\n**Skills**: Rust & Python\n\n- Docker\n- AWS\n";
        let text = MarkdownExtractor::new().extract(source.as_bytes()).unwrap();

        assert!(text.contains("John Doe"));
        assert!(text.contains("Rust & Python"));
        assert!(text.contains("Docker"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains("<li>"));
    }

    #[test]
    fn test_placeholder_ignores_content() {
        let text = PlaceholderExtractor.extract(b"%PDF-1.7 binary").unwrap();
        assert_eq!(text, PLACEHOLDER_RESUME);
    }
}
