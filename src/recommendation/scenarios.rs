//! Named slices over a ranked recommendation list

use crate::models::MatchingCriteria;
use crate::recommendation::recommender::{JobRecommendation, RecommendationTier};
use serde::{Deserialize, Serialize};

const SCENARIO_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioViews {
    /// Perfect and good matches
    pub quick_wins: Vec<JobRecommendation>,
    /// Roles asking for more experience than the candidate has
    pub career_growth: Vec<JobRecommendation>,
    /// Roles whose floor is above the candidate's stated ceiling
    pub salary_boost: Vec<JobRecommendation>,
    pub remote_work: Vec<JobRecommendation>,
}

/// Filter `recommendations` (already ranked) into scenario views. Each view
/// keeps ranking order and holds at most five entries.
pub fn scenarios(
    recommendations: &[JobRecommendation],
    criteria: &MatchingCriteria,
) -> ScenarioViews {
    ScenarioViews {
        quick_wins: top(recommendations, |rec| {
            matches!(
                rec.tier,
                RecommendationTier::PerfectMatch | RecommendationTier::GoodMatch
            )
        }),
        career_growth: top(recommendations, |rec| {
            match (rec.job().experience_required, criteria.years_experience) {
                (Some(required), Some(years)) => required > years,
                _ => false,
            }
        }),
        salary_boost: top(recommendations, |rec| {
            match (rec.job().salary_min, criteria.salary_range) {
                (Some(floor), Some(wanted)) => floor > wanted.max,
                _ => false,
            }
        }),
        remote_work: top(recommendations, |rec| rec.job().remote),
    }
}

fn top<F>(recommendations: &[JobRecommendation], keep: F) -> Vec<JobRecommendation>
where
    F: Fn(&JobRecommendation) -> bool,
{
    recommendations
        .iter()
        .filter(|rec| keep(*rec))
        .take(SCENARIO_LIMIT)
        .cloned()
        .collect()
}
