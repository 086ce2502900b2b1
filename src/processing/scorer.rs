//! Match score calculation

use crate::config::ScoringConfig;
use crate::processing::keyword_extractor::KeywordSet;
use crate::processing::random::RandomSource;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub matched_keywords: Vec<String>,
    pub total_keywords: usize,
    pub base: u32,
    pub bonus: u32,
    pub score: u8,
}

pub struct MatchScorer {
    config: ScoringConfig,
}

impl MatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Keywords that occur, case-insensitively, anywhere in the resume
    pub fn matched_keywords(resume_text: &str, keywords: &KeywordSet) -> Vec<String> {
        let resume = resume_text.to_lowercase();
        keywords
            .iter()
            .filter(|keyword| resume.contains(&keyword.text.to_lowercase()))
            .map(|keyword| keyword.text.clone())
            .collect()
    }

    pub fn score(
        &self,
        resume_text: &str,
        keywords: &KeywordSet,
        rng: &mut dyn RandomSource,
    ) -> ScoreBreakdown {
        let matched_keywords = Self::matched_keywords(resume_text, keywords);

        // An empty keyword set falls back to a neutral overlap instead of dividing by zero
        let fraction = if keywords.is_empty() {
            self.config.empty_keyword_fraction
        } else {
            matched_keywords.len() as f32 / keywords.len() as f32
        };
        let base = (fraction * self.config.keyword_weight).floor().max(0.0) as u32;
        let bonus = rng.range_inclusive(self.config.bonus_min, self.config.bonus_max);
        let score = base.saturating_add(bonus).min(self.config.score_ceiling as u32) as u8;

        debug!(
            "Score: {}/{} keywords matched, base {}, bonus {}, final {}",
            matched_keywords.len(),
            keywords.len(),
            base,
            bonus,
            score
        );

        ScoreBreakdown {
            matched_keywords,
            total_keywords: keywords.len(),
            base,
            bonus,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::catalog::KeywordCategory;
    use crate::processing::keyword_extractor::Keyword;
    use crate::processing::random::{ScriptedRandom, SeededRandom};

    fn keywords(texts: &[&str]) -> KeywordSet {
        KeywordSet::from(
            texts
                .iter()
                .map(|text| Keyword {
                    text: text.to_string(),
                    category: KeywordCategory::Technical,
                })
                .collect::<Vec<_>>(),
        )
    }

    fn scorer() -> MatchScorer {
        MatchScorer::new(Config::default().scoring)
    }

    #[test]
    fn test_partial_overlap() {
        let set = keywords(&["Python", "Docker", "AWS", "Kubernetes"]);
        let breakdown = scorer().score(
            "Built python services deployed with docker.",
            &set,
            &mut ScriptedRandom::new(vec![20]),
        );
        assert_eq!(breakdown.matched_keywords, vec!["Python", "Docker"]);
        assert_eq!(breakdown.base, 35);
        assert_eq!(breakdown.bonus, 20);
        assert_eq!(breakdown.score, 55);
    }

    #[test]
    fn test_ceiling_applied() {
        let set = keywords(&["Python"]);
        let breakdown = scorer().score("Python", &set, &mut ScriptedRandom::new(vec![28]));
        assert_eq!(breakdown.base, 70);
        assert_eq!(breakdown.score, 98);
    }

    #[test]
    fn test_empty_keyword_set_uses_neutral_fraction() {
        let breakdown = scorer().score(
            "Anything at all",
            &KeywordSet::default(),
            &mut ScriptedRandom::new(vec![15]),
        );
        assert!(breakdown.matched_keywords.is_empty());
        assert_eq!(breakdown.base, 35);
        assert_eq!(breakdown.score, 50);
    }

    #[test]
    fn test_score_bounds_hold() {
        let set = keywords(&["Rust", "SQL", "Leadership"]);
        let scorer = scorer();
        for seed in 0..200 {
            let breakdown = scorer.score("rust and sql", &set, &mut SeededRandom::new(seed));
            assert!(breakdown.matched_keywords.len() <= breakdown.total_keywords);
            assert!(breakdown.score <= 98);
            assert!((15..=28).contains(&breakdown.bonus));
        }
    }

    #[test]
    fn test_large_weight_stays_within_ceiling() {
        let mut config = Config::default().scoring;
        config.keyword_weight = 1.0e12;
        let scorer = MatchScorer::new(config);

        let breakdown = scorer.score("python", &keywords(&["Python"]), &mut ScriptedRandom::new(vec![20]));
        assert_eq!(breakdown.base, u32::MAX);
        assert_eq!(breakdown.score, 98);
    }
}
