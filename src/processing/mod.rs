//! Keyword matching, scoring and resume synthesis

pub mod catalog;
pub mod random;
pub mod keyword_extractor;
pub mod requirements;
pub mod suggestions;
pub mod scorer;
pub mod synthesizer;
pub mod optimizer;

pub use optimizer::{ResumeOptimizer, SessionState};
