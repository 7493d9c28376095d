//! Market insights aggregated over a final recommendation list

use crate::recommendation::recommender::{JobRecommendation, RecommendationTier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const TOP_SKILLS: usize = 10;
const TOP_INDUSTRIES: usize = 5;
const TOP_LOCATIONS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierCounts {
    pub perfect_match: usize,
    pub good_match: usize,
    pub explore: usize,
    pub stretch: usize,
}

impl TierCounts {
    fn record(&mut self, tier: RecommendationTier) {
        match tier {
            RecommendationTier::PerfectMatch => self.perfect_match += 1,
            RecommendationTier::GoodMatch => self.good_match += 1,
            RecommendationTier::Explore => self.explore += 1,
            RecommendationTier::Stretch => self.stretch += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountedItem {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryInsights {
    pub jobs_with_salary: usize,
    /// Mean of each posting's salary midpoint
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationInsights {
    pub total: usize,
    pub tier_counts: TierCounts,
    pub average_match_score: f64,
    pub top_skills: Vec<CountedItem>,
    pub top_industries: Vec<CountedItem>,
    pub salary: SalaryInsights,
    /// Share of remote postings, 0-100
    pub remote_percentage: f64,
    pub top_locations: Vec<CountedItem>,
}

/// Aggregate whatever the ranking stage surfaced. No thresholds of its own.
pub fn insights(recommendations: &[JobRecommendation]) -> RecommendationInsights {
    if recommendations.is_empty() {
        return RecommendationInsights::default();
    }

    let mut tier_counts = TierCounts::default();
    let mut skills = Tally::default();
    let mut industries = Tally::default();
    let mut locations = Tally::default();
    let mut midpoints = Vec::new();
    let mut salary_min = f64::INFINITY;
    let mut salary_max = f64::NEG_INFINITY;
    let mut remote = 0usize;
    let mut score_sum = 0.0f64;

    for rec in recommendations {
        let job = rec.job();
        tier_counts.record(rec.tier);
        score_sum += rec.match_score();

        for skill in &job.required_skills {
            skills.add(skill);
        }
        if let Some(industry) = job.industry() {
            industries.add(industry);
        }
        if let Some(range) = job.salary_range() {
            midpoints.push(range.midpoint());
            salary_min = salary_min.min(range.min);
            salary_max = salary_max.max(range.max);
        }
        if job.remote {
            remote += 1;
        } else if let Some(city) = job
            .location()
            .and_then(|l| l.split(',').next())
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            locations.add(city);
        }
    }

    let total = recommendations.len();
    let salary = if midpoints.is_empty() {
        SalaryInsights::default()
    } else {
        SalaryInsights {
            jobs_with_salary: midpoints.len(),
            average: midpoints.iter().sum::<f64>() / midpoints.len() as f64,
            min: salary_min,
            max: salary_max,
        }
    };

    RecommendationInsights {
        total,
        tier_counts,
        average_match_score: score_sum / total as f64,
        top_skills: skills.top(TOP_SKILLS),
        top_industries: industries.top(TOP_INDUSTRIES),
        salary,
        remote_percentage: remote as f64 / total as f64 * 100.0,
        top_locations: locations.top(TOP_LOCATIONS),
    }
}

/// Case-insensitive frequency count keeping the first spelling seen
#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    items: Vec<CountedItem>,
}

impl Tally {
    fn add(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let key = value.to_lowercase();
        match self.index.get(&key) {
            Some(&idx) => self.items[idx].count += 1,
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(CountedItem {
                    name: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Most frequent first; ties keep first-seen order.
    fn top(mut self, limit: usize) -> Vec<CountedItem> {
        self.items.sort_by(|a, b| b.count.cmp(&a.count));
        self.items.truncate(limit);
        self.items
    }
}
