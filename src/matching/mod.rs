//! Scoring a single job against a candidate

pub mod matcher;
pub mod similarity;
pub mod weights;

pub use matcher::{DimensionScores, JobMatch, JobMatcher};
pub use weights::{ScoringWeights, DEFAULT_WEIGHTS};
