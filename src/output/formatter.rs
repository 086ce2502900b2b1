//! Output formatters for optimization reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::OptimizationReport;
use crate::processing::catalog::KeywordCategory;
use crate::processing::optimizer::SessionState;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting optimization reports
pub trait OutputFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

pub struct HtmlFormatter;

/// Coordinates the formatters and renders session state
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Resume Optimization Report</title>
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 900px; margin: 0 auto; padding: 20px; color: #333; }
        .success { background: #d4edda; padding: 15px; border-radius: 6px; }
        .score-badge { padding: 4px 12px; border-radius: 12px; color: white; background: {{ badge_color }}; }
        pre { background: #f8f9fa; padding: 15px; border-radius: 6px; white-space: pre-wrap; }
        .meta { color: #6c757d; font-size: 0.9em; }
    </style>
</head>
<body>
    <h1>Resume Optimization Complete</h1>
    <div class="success">
        <strong>Match Score: {{ match_score }}%</strong>
        <span class="score-badge">{{ score_label }}</span>
        <p>{{ verdict }}</p>
    </div>
    <h2>Job Requirements</h2>
    <ul>
        <li>Experience: {{ experience_level }}</li>
        <li>Industry: {{ industry }}</li>
        <li>Remote: {% if remote %}Yes{% else %}No{% endif %}</li>
    </ul>
    <h2>Optimized Resume</h2>
    <pre>{{ optimized_resume }}</pre>
    <h2>Key Improvements</h2>
    <ul>
    {% for suggestion in suggestions %}
        <li>{{ suggestion }}</li>
    {% endfor %}
    </ul>
    <h2>Keywords</h2>
    {% if keywords.is_empty() %}
    <p>No catalog keywords were found in the job description.</p>
    {% else %}
    <p><strong>{{ keywords.join(", ") }}</strong></p>
    {% endif %}
    <p class="meta">Source: {{ source_file }} | Generated {{ generated_at }} | v{{ version }}</p>
</body>
</html>"#
)]
struct HtmlReportTemplate {
    match_score: u8,
    score_label: String,
    badge_color: String,
    verdict: String,
    experience_level: String,
    industry: String,
    remote: bool,
    optimized_resume: String,
    suggestions: Vec<String>,
    keywords: Vec<String>,
    source_file: String,
    generated_at: String,
    version: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
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

    fn format_score_badge(&self, report: &OptimizationReport) -> String {
        let color = match report.match_score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            _ => Color::Red,
        };
        let label = report.score_label().to_uppercase();

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_keyword_group(&self, report: &OptimizationReport, category: KeywordCategory) -> Option<String> {
        let terms = report.keywords.in_category(category);
        if terms.is_empty() {
            return None;
        }

        let rendered: Vec<String> = terms
            .iter()
            .map(|term| {
                if report.matched_keywords.iter().any(|m| m == term) {
                    self.colorize(&format!("{} ✓", term), Color::Green)
                } else {
                    term.to_string()
                }
            })
            .collect();
        Some(format!("  • {}: {}\n", category, rendered.join(", ")))
    }

    /// One-line rendering of a non-completed session
    pub fn format_status(&self, state: &SessionState) -> String {
        match state {
            SessionState::Idle => "Ready. Provide a resume and a job description.".to_string(),
            SessionState::Processing => self.colorize("⏳ Processing...", Color::Cyan),
            SessionState::Failed(message) => {
                format!("{} {}", self.colorize("Error:", Color::Red), message)
            }
            SessionState::Completed(report) => format!(
                "✅ Optimization complete for {} ({}%)",
                report.source_file_name, report.match_score
            ),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎉 RESUME OPTIMIZATION COMPLETE", 1));
        output.push_str(&format!(
            "Source: {} | Generated: {} | Processing time: {}ms\n",
            report.source_file_name,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Match Score", 2));
        output.push_str(&format!(
            "Match Score: {}% {}\n",
            report.match_score,
            self.format_score_badge(report)
        ));
        output.push_str(&format!("{}\n", self.colorize(&report.verdict(), Color::Cyan)));

        output.push_str(&self.format_header("Job Requirements", 2));
        output.push_str(&format!(
            "  • Experience: {}\n  • Industry: {}\n  • Remote: {}\n",
            report.job_requirements.experience_level,
            report.job_requirements.industry,
            if report.job_requirements.remote { "Yes" } else { "No" }
        ));

        output.push_str(&self.format_header("🏷️  Keywords", 2));
        if report.keywords.is_empty() {
            output.push_str("  No catalog keywords were found in the job description.\n");
        } else {
            for category in [
                KeywordCategory::Technical,
                KeywordCategory::SoftSkill,
                KeywordCategory::Seniority,
            ] {
                if let Some(line) = self.format_keyword_group(report, category) {
                    output.push_str(&line);
                }
            }
            output.push_str(&format!(
                "  Matched in resume: {}/{}\n",
                report.matched_keywords.len(),
                report.keywords.len()
            ));
        }

        output.push_str(&self.format_header("🔑 Key Improvements", 2));
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        output.push_str(&self.format_header("📄 Optimized Resume", 2));
        output.push_str(&report.optimized_resume_text);
        output.push('\n');

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
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Optimization Report\n\n");
        output.push_str(&format!(
            "**Match Score: {}%** ({}) - {}\n\n",
            report.match_score,
            report.score_label(),
            report.verdict()
        ));

        output.push_str("## Job Requirements\n\n");
        output.push_str("| Requirement | Value |\n|---|---|\n");
        output.push_str(&format!(
            "| Experience | {} |\n| Industry | {} |\n| Remote | {} |\n\n",
            report.job_requirements.experience_level,
            report.job_requirements.industry,
            if report.job_requirements.remote { "Yes" } else { "No" }
        ));

        output.push_str("## Keywords\n\n");
        if report.keywords.is_empty() {
            output.push_str("_No catalog keywords were found in the job description._\n\n");
        } else {
            for keyword in report.keywords.iter() {
                let mark = if report.matched_keywords.contains(&keyword.text) { "x" } else { " " };
                output.push_str(&format!("- [{}] {} ({})\n", mark, keyword.text, keyword.category));
            }
            output.push('\n');
        }

        output.push_str("## Key Improvements\n\n");
        for suggestion in &report.suggestions {
            output.push_str(&format!("- {}\n", suggestion));
        }

        output.push_str("\n## Optimized Resume\n\n```text\n");
        output.push_str(&report.optimized_resume_text);
        output.push_str("\n```\n\n");

        output.push_str(&format!(
            "---\n*Source: {} | Generated {} | resume-optimizer v{}*\n",
            report.source_file_name,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.optimizer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let badge_color = match report.match_score {
            80..=100 => "#28a745",
            60..=79 => "#ffc107",
            _ => "#dc3545",
        };

        let template = HtmlReportTemplate {
            match_score: report.match_score,
            score_label: report.score_label().to_string(),
            badge_color: badge_color.to_string(),
            verdict: report.verdict(),
            experience_level: report.job_requirements.experience_level.to_string(),
            industry: report.job_requirements.industry.to_string(),
            remote: report.job_requirements.remote,
            optimized_resume: report.optimized_resume_text.clone(),
            suggestions: report.suggestions.clone(),
            keywords: report.keywords.texts().iter().map(|s| s.to_string()).collect(),
            source_file: report.source_file_name.clone(),
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            version: report.metadata.optimizer_version.clone(),
        };

        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
            html_formatter: HtmlFormatter,
        }
    }

    pub fn generate_report(&self, report: &OptimizationReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    /// Render whatever the session currently holds
    pub fn render_state(&self, state: &SessionState, format: &OutputFormat) -> Result<String> {
        match state {
            SessionState::Completed(report) => self.generate_report(report, format),
            other => match format {
                OutputFormat::Json => {
                    let value = match other {
                        SessionState::Failed(message) => {
                            serde_json::json!({ "status": "failed", "error": message })
                        }
                        SessionState::Processing => serde_json::json!({ "status": "processing" }),
                        _ => serde_json::json!({ "status": "idle" }),
                    };
                    Ok(value.to_string())
                }
                _ => Ok(self.console_formatter.format_status(other)),
            },
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

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
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
        OutputFormat::Html => "html",
    };

    format!("{}_optimized{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::keyword_extractor::{Keyword, KeywordSet};
    use crate::processing::requirements::{ExperienceLevel, Industry, JobRequirements};
    use tempfile::tempdir;

    fn sample_report() -> OptimizationReport {
        OptimizationReport {
            optimized_resume_text: "OPTIMIZED RESUME\n<Jane & Co>".to_string(),
            keywords: KeywordSet::from(vec![
                Keyword { text: "Python".to_string(), category: KeywordCategory::Technical },
                Keyword { text: "Communication".to_string(), category: KeywordCategory::SoftSkill },
            ]),
            matched_keywords: vec!["Python".to_string()],
            suggestions: vec![
                "Optimize section headers for ATS compatibility".to_string(),
                "Highlight leadership and collaboration experiences".to_string(),
            ],
            match_score: 84,
            source_file_name: "jane_resume.txt".to_string(),
            job_requirements: JobRequirements {
                experience_level: ExperienceLevel::Senior,
                industry: Industry::Finance,
                remote: true,
            },
            metadata: ReportMetadata::new(2001),
        }
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.contains("Match Score: 84% [VERY GOOD]"));
        assert!(output.contains("Technical: Python ✓"));
        assert!(output.contains("Soft Skill: Communication"));
        assert!(output.contains("Matched in resume: 1/2"));
        assert!(output.contains("  2. Highlight leadership"));
        assert!(output.contains("Experience: Senior Level"));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: OptimizationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_markdown_checklist() {
        let output = MarkdownFormatter.format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# Resume Optimization Report"));
        assert!(output.contains("- [x] Python (Technical)"));
        assert!(output.contains("- [ ] Communication (Soft Skill)"));
        assert!(output.contains("| Remote | Yes |"));
    }

    #[test]
    fn test_html_escapes_content() {
        let output = HtmlFormatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("Match Score: 84%"));
        assert!(output.contains("Python, Communication"));
        assert!(output.contains("&lt;Jane &amp; Co&gt;"));
        assert!(!output.contains("<Jane & Co>"));
    }

    #[test]
    fn test_render_state() {
        let generator = ReportGenerator::with_options(false, false);

        let idle = generator.render_state(&SessionState::Idle, &OutputFormat::Console).unwrap();
        assert!(idle.starts_with("Ready"));

        let failed = SessionState::Failed("Please upload your resume first".to_string());
        let json = generator.render_state(&failed, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"], "Please upload your resume first");

        let completed = SessionState::Completed(Box::new(sample_report()));
        let markdown = generator.render_state(&completed, &OutputFormat::Markdown).unwrap();
        assert!(markdown.contains("**Match Score: 84%**"));
    }

    #[test]
    fn test_save_and_suggest_filename() {
        let dir = tempdir().unwrap();
        let name = suggest_filename(&OutputFormat::Markdown, "cv/jane_resume.pdf", false);
        assert_eq!(name, "jane_resume_optimized.md");

        let path = dir.path().join("reports").join(&name);
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }
}
