//! Rule-based job requirement detection

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub experience_level: ExperienceLevel,
    pub industry: Industry,
    pub remote: bool,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior Level",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Industry::Technology => "Technology",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
        };
        write!(f, "{}", label)
    }
}

/// Lowercase phrases (substring match) and words (whole-word match) that
/// select a value when any is present
struct Rule<T> {
    phrases: &'static [&'static str],
    words: &'static [&'static str],
    value: T,
}

const EXPERIENCE_RULES: &[Rule<ExperienceLevel>] = &[
    Rule {
        phrases: &[
            "senior",
            "principal",
            "staff engineer",
            "5+ years",
            "7+ years",
            "10+ years",
        ],
        words: &["lead"],
        value: ExperienceLevel::Senior,
    },
    Rule {
        phrases: &[
            "entry level",
            "entry-level",
            "junior",
            "graduate",
            "internship",
            "0-2 years",
        ],
        words: &["intern"],
        value: ExperienceLevel::Entry,
    },
];

const INDUSTRY_RULES: &[Rule<Industry>] = &[
    Rule {
        phrases: &["finance", "financial", "banking", "fintech", "trading", "insurance"],
        words: &[],
        value: Industry::Finance,
    },
    Rule {
        phrases: &["healthcare", "health care", "medical", "clinical", "hospital", "patient"],
        words: &[],
        value: Industry::Healthcare,
    },
];

const REMOTE_PHRASES: &[&str] = &["remote", "work from home", "wfh", "distributed team"];

/// Derives `JobRequirements` from a job description
pub struct RequirementsAnalyzer;

impl RequirementsAnalyzer {
    pub fn analyze(job_description: &str) -> JobRequirements {
        let text = job_description.to_lowercase();

        JobRequirements {
            experience_level: first_match(EXPERIENCE_RULES, &text).unwrap_or(ExperienceLevel::Mid),
            industry: first_match(INDUSTRY_RULES, &text).unwrap_or(Industry::Technology),
            remote: REMOTE_PHRASES.iter().any(|phrase| text.contains(phrase)),
        }
    }
}

fn first_match<T: Copy>(rules: &[Rule<T>], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| {
            rule.phrases.iter().any(|phrase| text.contains(phrase))
                || rule.words.iter().any(|word| contains_word(text, word))
        })
        .map(|rule| rule.value)
}

fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric()).any(|token| token == word)
}
