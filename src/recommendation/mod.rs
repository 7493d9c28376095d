//! Ranking, insights and scenario views over a job corpus

pub mod insights;
pub mod recommender;
pub mod scenarios;

pub use insights::{insights, RecommendationInsights};
pub use recommender::{ApplyWindow, JobRecommendation, RecommendationTier, Recommender};
pub use scenarios::{scenarios, ScenarioViews};
