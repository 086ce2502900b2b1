//! Templated "optimized resume" generation

use crate::processing::keyword_extractor::KeywordSet;
use crate::processing::requirements::{ExperienceLevel, Industry, JobRequirements};

const DISCLAIMER: &str = "Note: This is a simulated optimization. A real implementation would \
rewrite your actual resume content.";

pub struct ResumeSynthesizer;

impl ResumeSynthesizer {
    /// Fill the resume template from keywords and requirements.
    /// The original resume text only decorates the header.
    pub fn synthesize(
        original_resume: &str,
        keywords: &KeywordSet,
        requirements: &JobRequirements,
    ) -> String {
        let slot = |index: usize, fallback: &'static str| keywords.text_at(index).unwrap_or(fallback);

        let leading = keywords.texts().into_iter().take(3).collect::<Vec<_>>();
        let expertise = if leading.is_empty() {
            "software development, problem solving and delivery".to_string()
        } else {
            leading.join(", ")
        };

        let competencies = if keywords.is_empty() {
            "• Software Development • Problem Solving • Communication".to_string()
        } else {
            format!("• {}", keywords.texts().join(" • "))
        };

        let title = match requirements.experience_level {
            ExperienceLevel::Entry => "Software Developer",
            ExperienceLevel::Mid => "Software Engineer",
            ExperienceLevel::Senior => "Senior Software Engineer",
        };

        let industry_phrase = match requirements.industry {
            Industry::Technology => "technology products",
            Industry::Finance => "financial services platforms",
            Industry::Healthcare => "healthcare systems",
        };

        let remote_bullet = if requirements.remote {
            "\n• Collaborated effectively across time zones in a fully remote team"
        } else {
            ""
        };

        let header_name = original_resume
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && line.len() <= 60)
            .unwrap_or("YOUR NAME");

        format!(
            "OPTIMIZED RESUME
{header_name}
{title}

PROFESSIONAL SUMMARY
Results-driven {level_lower} professional with expertise in {expertise}. Proven track record \
of delivering high-quality {industry_phrase} and driving business growth through innovative approaches.

CORE COMPETENCIES
{competencies}

PROFESSIONAL EXPERIENCE

{title} | TechCorp Inc. | 2021 - Present
• Developed and maintained applications using {primary}
• Improved system performance by 40% through code optimization
• Led a team of 5 developers in agile development practices{remote_bullet}
• Collaborated with cross-functional teams to deliver projects 20% ahead of schedule

Software Developer | Innovation Labs | 2019 - 2021
• Built {industry_phrase} serving 10,000+ users with {secondary}
• Implemented automated testing reducing bugs by 35%
• Participated in code reviews and mentored junior developers

EDUCATION
Bachelor of Computer Science | University Name | 2019
• Relevant Coursework: {expertise}

CERTIFICATIONS
• AWS Certified Developer
• {certification} Certification

{disclaimer}",
            level_lower = requirements.experience_level.to_string().to_lowercase(),
            primary = slot(0, "modern technologies"),
            secondary = slot(2, "industry-standard tools"),
            certification = slot(1, "Technology"),
            disclaimer = DISCLAIMER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::keyword_extractor::KeywordExtractor;

    fn requirements(experience_level: ExperienceLevel, remote: bool) -> JobRequirements {
        JobRequirements {
            experience_level,
            industry: Industry::Technology,
            remote,
        }
    }

    #[test]
    fn test_keywords_fill_slots() {
        let keywords = KeywordExtractor::new(12)
            .unwrap()
            .extract("Python and Docker on AWS with a focus on communication");
        let resume = ResumeSynthesizer::synthesize(
            "Ada Lovelace\nEngineer",
            &keywords,
            &requirements(ExperienceLevel::Senior, true),
        );

        assert!(resume.starts_with("OPTIMIZED RESUME\nAda Lovelace\nSenior Software Engineer"));
        assert!(resume.contains("expertise in Python, AWS, Docker."));
        assert!(resume.contains("• Python • AWS • Docker • Communication"));
        assert!(resume.contains("applications using Python"));
        assert!(resume.contains("• AWS Certification"));
        assert!(resume.contains("fully remote team"));
        assert!(resume.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_fallbacks_when_keywords_missing() {
        let resume = ResumeSynthesizer::synthesize(
            "",
            &KeywordSet::default(),
            &requirements(ExperienceLevel::Mid, false),
        );

        assert!(resume.contains("YOUR NAME\nSoftware Engineer"));
        assert!(resume.contains("applications using modern technologies"));
        assert!(resume.contains("• Technology Certification"));
        assert!(resume.contains("with industry-standard tools"));
        assert!(!resume.contains("remote team"));
    }

    #[test]
    fn test_sections_present() {
        let resume = ResumeSynthesizer::synthesize(
            "Someone",
            &KeywordSet::default(),
            &requirements(ExperienceLevel::Entry, false),
        );
        for section in [
            "PROFESSIONAL SUMMARY",
            "CORE COMPETENCIES",
            "PROFESSIONAL EXPERIENCE",
            "EDUCATION",
            "CERTIFICATIONS",
        ] {
            assert!(resume.contains(section), "missing section {}", section);
        }
    }
}
