//! Injectable randomness for scoring and suggestions

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of the random choices made by the pipeline
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Reorder `indices` in place
    fn shuffle(&mut self, indices: &mut [usize]);
}

/// Backed by the thread-local generator
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }

    fn shuffle(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut rand::thread_rng());
    }
}

/// Reproducible source for `--seed`
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    fn shuffle(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut self.rng);
    }
}

/// Replays a fixed list of values, clamped into the requested range.
/// Shuffling leaves the order untouched.
pub struct ScriptedRandom {
    values: Vec<u32>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, position: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = if self.values.is_empty() {
            low
        } else {
            let value = self.values[self.position % self.values.len()];
            self.position += 1;
            value
        };
        value.clamp(low, high)
    }

    fn shuffle(&mut self, _indices: &mut [usize]) {}
}
