//! Report structures assembled from a recommendation run

use crate::models::MatchingCriteria;
use crate::recommendation::{
    insights, scenarios, JobRecommendation, RecommendationInsights, ScenarioViews,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to render one recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Display name of the candidate the run was made for
    pub profile_name: String,

    /// Ranked recommendations, best first
    pub recommendations: Vec<JobRecommendation>,

    /// Aggregates over `recommendations`
    pub insights: RecommendationInsights,

    /// Named slices over `recommendations`
    pub scenarios: ScenarioViews,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    /// Size of the corpus handed to the engine
    pub jobs_considered: usize,
    pub jobs_returned: usize,
    pub processing_time_ms: u64,
}

impl RecommendationReport {
    pub fn new(
        profile_name: impl Into<String>,
        recommendations: Vec<JobRecommendation>,
        criteria: &MatchingCriteria,
        jobs_considered: usize,
        processing_time_ms: u64,
    ) -> Self {
        Self::new_at(
            profile_name,
            recommendations,
            criteria,
            jobs_considered,
            processing_time_ms,
            Utc::now(),
        )
    }

    pub fn new_at(
        profile_name: impl Into<String>,
        recommendations: Vec<JobRecommendation>,
        criteria: &MatchingCriteria,
        jobs_considered: usize,
        processing_time_ms: u64,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let insights = insights(&recommendations);
        let scenarios = scenarios(&recommendations, criteria);
        let metadata = ReportMetadata {
            generated_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            jobs_considered,
            jobs_returned: recommendations.len(),
            processing_time_ms,
        };

        Self {
            profile_name: profile_name.into(),
            recommendations,
            insights,
            scenarios,
            metadata,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
