//! Canned improvement suggestions

use crate::config::SuggestionConfig;
use crate::processing::catalog::SUGGESTION_CATALOG;
use crate::processing::random::RandomSource;

pub struct SuggestionGenerator {
    min_count: usize,
    max_count: usize,
}

impl SuggestionGenerator {
    pub fn new(config: &SuggestionConfig) -> Self {
        let max_count = config.max_count.min(SUGGESTION_CATALOG.len());
        Self {
            min_count: config.min_count.min(max_count),
            max_count,
        }
    }

    /// Shuffle the catalog and keep a prefix of random length
    pub fn generate(&self, rng: &mut dyn RandomSource) -> Vec<String> {
        let count = rng.range_inclusive(self.min_count as u32, self.max_count as u32) as usize;

        let mut indices: Vec<usize> = (0..SUGGESTION_CATALOG.len()).collect();
        rng.shuffle(&mut indices);

        indices
            .into_iter()
            .take(count)
            .map(|index| SUGGESTION_CATALOG[index].to_string())
            .collect()
    }

    pub fn count_range(&self) -> (usize, usize) {
        (self.min_count, self.max_count)
    }
}
