//! Domain records consumed by the engine

pub mod job;
pub mod profile;

pub use job::{Job, SalaryRange};
pub use profile::{MatchingCriteria, SearchOverrides, UserProfile};
