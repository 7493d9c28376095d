//! Job postings as supplied by the external job store

use crate::error::{JobMatcherError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A salary band in a single currency unit per year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Build a range from optional bounds; a single bound becomes a point range.
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        match (min, max) {
            (Some(min), Some(max)) => Some(Self { min, max }),
            (Some(value), None) | (None, Some(value)) => Some(Self { min: value, max: value }),
            (None, None) => None,
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn overlaps(&self, other: &SalaryRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err("salary bounds must be finite numbers".to_string());
        }
        if self.min < 0.0 || self.max < 0.0 {
            return Err("salary bounds must not be negative".to_string());
        }
        if self.min > self.max {
            return Err(format!(
                "salary minimum {} exceeds maximum {}",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

/// A job posting. The engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,

    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub remote: bool,

    /// e.g. "full-time", "contract"
    #[serde(default)]
    pub job_type: Option<String>,

    #[serde(default)]
    pub salary_min: Option<f64>,

    #[serde(default)]
    pub salary_max: Option<f64>,

    #[serde(default)]
    pub required_skills: Vec<String>,

    /// Years of experience asked for
    #[serde(default)]
    pub experience_required: Option<f64>,

    #[serde(default)]
    pub education_required: Vec<String>,

    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Minimal posting with every optional field empty
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            industry: None,
            location: None,
            remote: false,
            job_type: None,
            salary_min: None,
            salary_max: None,
            required_skills: Vec::new(),
            experience_required: None,
            education_required: Vec::new(),
            posted_at: None,
        }
    }

    pub fn salary_range(&self) -> Option<SalaryRange> {
        SalaryRange::from_bounds(self.salary_min, self.salary_max)
    }

    /// Location string if present and non-blank
    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    pub fn industry(&self) -> Option<&str> {
        non_blank(self.industry.as_deref())
    }

    pub fn job_type(&self) -> Option<&str> {
        non_blank(self.job_type.as_deref())
    }

    /// Whole days since posting, never negative. `None` without a timestamp.
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.posted_at
            .map(|posted| (now - posted).num_days().max(0))
    }

    /// Reject structurally impossible postings before they reach the matcher.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| JobMatcherError::InvalidJob {
            id: self.id.clone(),
            reason,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("job id must not be empty".to_string()));
        }

        if let Some(range) = self.salary_range() {
            range.validate().map_err(invalid)?;
        }

        if let Some(years) = self.experience_required {
            if !years.is_finite() || years < 0.0 {
                return Err(invalid(format!(
                    "required experience must be a non-negative number, got {}",
                    years
                )));
            }
        }

        Ok(())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
