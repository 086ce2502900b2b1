//! Catalog keyword extraction from job descriptions

use crate::error::{Result, ResumeOptimizerError};
use crate::processing::catalog::{self, KeywordCategory};
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub category: KeywordCategory,
}

/// Ordered, deduplicated keywords found in a job description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    /// Keyword text at `index`, if that slot is filled
    pub fn text_at(&self, index: usize) -> Option<&str> {
        self.keywords.get(index).map(|k| k.text.as_str())
    }

    pub fn texts(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.text.as_str()).collect()
    }

    pub fn in_category(&self, category: KeywordCategory) -> Vec<&str> {
        self.keywords
            .iter()
            .filter(|k| k.category == category)
            .map(|k| k.text.as_str())
            .collect()
    }
}

impl From<Vec<Keyword>> for KeywordSet {
    fn from(keywords: Vec<Keyword>) -> Self {
        Self { keywords }
    }
}

/// Substring matcher over the keyword catalogs
pub struct KeywordExtractor {
    matcher: AhoCorasick,
    terms: Vec<(String, KeywordCategory)>,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(max_keywords: usize) -> Result<Self> {
        Self::with_additional_terms(max_keywords, &[])
    }

    /// Extra terms are matched after the technical catalog, before soft skills
    pub fn with_additional_terms(max_keywords: usize, additional_terms: &[String]) -> Result<Self> {
        let mut terms: Vec<(String, KeywordCategory)> = catalog::TECHNICAL_TERMS
            .iter()
            .map(|entry| (entry.term.to_string(), entry.category))
            .collect();
        terms.extend(
            additional_terms
                .iter()
                .map(|term| term.trim())
                .filter(|term| !term.is_empty())
                .map(|term| (term.to_string(), KeywordCategory::Technical)),
        );
        terms.extend(
            catalog::SOFT_SKILL_TERMS
                .iter()
                .chain(catalog::SENIORITY_TERMS.iter())
                .map(|entry| (entry.term.to_string(), entry.category)),
        );

        // Patterns and haystack are both lowercased so non-ASCII letters fold too.
        // Standard semantics so overlapping iteration reports every pattern present
        let patterns: Vec<String> = terms.iter().map(|(term, _)| term.to_lowercase()).collect();
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| {
                ResumeOptimizerError::InvalidInput(format!("Failed to build keyword matcher: {}", e))
            })?;

        Ok(Self {
            matcher,
            terms,
            max_keywords,
        })
    }

    /// Catalog terms contained in `job_description`, in catalog order
    pub fn extract(&self, job_description: &str) -> KeywordSet {
        let found: HashSet<usize> = self
            .matcher
            .find_overlapping_iter(&job_description.to_lowercase())
            .map(|mat| mat.pattern().as_usize())
            .collect();

        let mut seen = HashSet::new();
        let keywords: Vec<Keyword> = self
            .terms
            .iter()
            .enumerate()
            .filter(|(index, _)| found.contains(index))
            .filter(|(_, (term, _))| seen.insert(term.to_lowercase()))
            .map(|(_, (term, category))| Keyword {
                text: capitalize_words(term),
                category: *category,
            })
            .take(self.max_keywords)
            .collect();

        debug!(
            "Matched {} catalog terms, keeping {}",
            found.len(),
            keywords.len()
        );
        KeywordSet::from(keywords)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// Uppercase the first letter of each word and keep the rest as written
pub fn capitalize_words(term: &str) -> String {
    term.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
