//! Scoring weights and step tables for the matcher
//!
//! Everything the matcher multiplies or looks up lives here so it can be
//! audited and tuned without touching the scoring code.

use serde::{Deserialize, Serialize};

/// Relative weight of each scoring dimension in the overall fit score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub education: f64,
    pub industry: f64,
}

/// Hard skill and experience alignment dominate soft preference alignment.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    skills: 0.30,
    experience: 0.25,
    location: 0.15,
    salary: 0.15,
    education: 0.10,
    industry: 0.05,
};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary + self.education + self.industry
    }

    pub fn validate(&self) -> Result<(), String> {
        let all = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("location", self.location),
            ("salary", self.salary),
            ("education", self.education),
            ("industry", self.industry),
        ];
        if let Some((name, value)) = all.iter().find(|(_, w)| !(0.0..=1.0).contains(w)) {
            return Err(format!("weight '{}' must be within [0, 1], got {}", name, value));
        }
        if (self.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("scoring weights must sum to 1.0, got {:.3}", self.sum()));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Score used when one side of a comparison has no data
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Experience and education scores when the job states no requirement
pub const NO_REQUIREMENT_SCORE: f64 = 0.8;

/// Similarity a skill pair must exceed to count as a fuzzy match
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Credit given to a fuzzy-only skill match
pub const FUZZY_MATCH_CREDIT: f64 = 0.7;

/// `(max |candidate - required| years, score)`, checked in order
pub const EXPERIENCE_STEPS: [(f64, f64); 5] = [
    (0.0, 1.0),
    (1.0, 0.9),
    (2.0, 0.7),
    (3.0, 0.5),
    (5.0, 0.3),
];
pub const EXPERIENCE_FLOOR: f64 = 0.1;

/// `(max relative midpoint difference, score)` for non-overlapping salaries
pub const SALARY_STEPS: [(f64, f64); 3] = [(0.2, 0.8), (0.4, 0.6), (0.6, 0.4)];
pub const SALARY_FLOOR: f64 = 0.2;
pub const SALARY_OVERLAP_SCORE: f64 = 1.0;

pub const REMOTE_ACCEPTED_SCORE: f64 = 1.0;
pub const REMOTE_NOT_PREFERRED_SCORE: f64 = 0.6;
pub const LOCATION_EXACT_SCORE: f64 = 1.0;
pub const LOCATION_CONTAINS_SCORE: f64 = 0.8;
pub const LOCATION_SAME_REGION_SCORE: f64 = 0.6;
pub const LOCATION_MISMATCH_SCORE: f64 = 0.2;

pub const INDUSTRY_MATCH_SCORE: f64 = 1.0;
pub const INDUSTRY_MISMATCH_SCORE: f64 = 0.3;

/// Confidence accounting: fixed increments for each populated field
pub const CONFIDENCE_BASE: f64 = 0.5;
pub const CONFIDENCE_MAJOR_FIELD: f64 = 0.1;
pub const CONFIDENCE_MINOR_FIELD: f64 = 0.05;
pub const CONFIDENCE_MIN: f64 = 0.3;
pub const CONFIDENCE_MAX: f64 = 0.9;

/// Dimensions above this produce a reason, below `IMPROVEMENT_THRESHOLD` an improvement
pub const REASON_THRESHOLD: f64 = 0.8;
pub const IMPROVEMENT_THRESHOLD: f64 = 0.6;

/// Salary/location scores at or above this set the boolean match flags
pub const MATCH_FLAG_THRESHOLD: f64 = 0.8;

/// Granularity every derived value is rounded to before a threshold test
const SNAP_SCALE: f64 = 1e9;

/// Round away floating-point residue so that a value computed as
/// `0.8999999999` or `1.0000000002` lands on the bound it represents.
pub fn snap(value: f64) -> f64 {
    (value * SNAP_SCALE).round() / SNAP_SCALE
}

/// Look up a step table; the first bound that `value` does not exceed wins.
pub fn step_score(steps: &[(f64, f64)], value: f64, floor: f64) -> f64 {
    let value = snap(value);
    steps
        .iter()
        .find(|(bound, _)| value <= *bound)
        .map(|(_, score)| *score)
        .unwrap_or(floor)
}
