//! Static keyword and suggestion catalogs

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordCategory {
    Technical,
    SoftSkill,
    Seniority,
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeywordCategory::Technical => "Technical",
            KeywordCategory::SoftSkill => "Soft Skill",
            KeywordCategory::Seniority => "Seniority",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub term: &'static str,
    pub category: KeywordCategory,
}

const fn tech(term: &'static str) -> CatalogEntry {
    CatalogEntry { term, category: KeywordCategory::Technical }
}

const fn soft(term: &'static str) -> CatalogEntry {
    CatalogEntry { term, category: KeywordCategory::SoftSkill }
}

const fn level(term: &'static str) -> CatalogEntry {
    CatalogEntry { term, category: KeywordCategory::Seniority }
}

pub const TECHNICAL_TERMS: &[CatalogEntry] = &[
    tech("JavaScript"),
    tech("TypeScript"),
    tech("React"),
    tech("Angular"),
    tech("Vue"),
    tech("Node.js"),
    tech("Python"),
    tech("Java"),
    tech("C++"),
    tech("C#"),
    tech("Rust"),
    tech("Ruby"),
    tech("PHP"),
    tech("SQL"),
    tech("PostgreSQL"),
    tech("MongoDB"),
    tech("GraphQL"),
    tech("REST API"),
    tech("AWS"),
    tech("Azure"),
    tech("GCP"),
    tech("Docker"),
    tech("Kubernetes"),
    tech("Terraform"),
    tech("CI/CD"),
    tech("Git"),
    tech("Linux"),
    tech("machine learning"),
    tech("data analysis"),
    tech("data science"),
    tech("cloud computing"),
    tech("microservices"),
];

pub const SOFT_SKILL_TERMS: &[CatalogEntry] = &[
    soft("project management"),
    soft("agile"),
    soft("scrum"),
    soft("leadership"),
    soft("communication"),
    soft("problem solving"),
    soft("team work"),
    soft("teamwork"),
    soft("collaboration"),
    soft("time management"),
    soft("critical thinking"),
    soft("mentoring"),
    soft("stakeholder management"),
];

pub const SENIORITY_TERMS: &[CatalogEntry] = &[
    level("senior"),
    level("junior"),
    level("lead"),
    level("principal"),
    level("staff"),
    level("manager"),
    level("director"),
    level("entry level"),
    level("mid level"),
];

/// All catalogs in matching order: technical, soft skills, seniority
pub fn all_terms() -> impl Iterator<Item = &'static CatalogEntry> {
    TECHNICAL_TERMS
        .iter()
        .chain(SOFT_SKILL_TERMS.iter())
        .chain(SENIORITY_TERMS.iter())
}

pub fn terms_for(category: KeywordCategory) -> &'static [CatalogEntry] {
    match category {
        KeywordCategory::Technical => TECHNICAL_TERMS,
        KeywordCategory::SoftSkill => SOFT_SKILL_TERMS,
        KeywordCategory::Seniority => SENIORITY_TERMS,
    }
}

pub const SUGGESTION_CATALOG: &[&str] = &[
    "Add more quantifiable achievements with specific numbers and percentages",
    "Include relevant technical skills mentioned in the job description",
    "Optimize section headers for ATS compatibility",
    "Strengthen your professional summary to match job requirements",
    "Add industry-specific keywords naturally throughout your resume",
    "Highlight leadership and collaboration experiences",
    "Include relevant certifications or training programs",
    "Use strong action verbs at the start of each bullet point",
    "Tailor your most recent role to mirror the responsibilities in the posting",
    "Keep formatting simple so parsers can read every section",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order() {
        let terms: Vec<_> = all_terms().collect();
        assert_eq!(
            terms.len(),
            TECHNICAL_TERMS.len() + SOFT_SKILL_TERMS.len() + SENIORITY_TERMS.len()
        );
        assert_eq!(terms[0].category, KeywordCategory::Technical);
        assert_eq!(terms.last().unwrap().category, KeywordCategory::Seniority);
    }

    #[test]
    fn test_categories_tagged_consistently() {
        for category in [
            KeywordCategory::Technical,
            KeywordCategory::SoftSkill,
            KeywordCategory::Seniority,
        ] {
            assert!(terms_for(category).iter().all(|entry| entry.category == category));
        }
    }

    #[test]
    fn test_catalogs_have_no_duplicates() {
        let mut seen = HashSet::new();
        for entry in all_terms() {
            assert!(seen.insert(entry.term.to_lowercase()), "duplicate term {}", entry.term);
        }

        let suggestions: HashSet<_> = SUGGESTION_CATALOG.iter().collect();
        assert_eq!(suggestions.len(), SUGGESTION_CATALOG.len());
    }
}
