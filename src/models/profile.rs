//! Candidate profiles and the matching criteria derived from them

use crate::error::{JobMatcherError, Result};
use crate::models::job::{non_blank, SalaryRange};
use serde::{Deserialize, Serialize};

/// Candidate profile as stored by the profile service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub years_experience: Option<f64>,

    #[serde(default)]
    pub education: Vec<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub desired_salary: Option<SalaryRange>,

    #[serde(default)]
    pub job_types: Vec<String>,

    #[serde(default)]
    pub industries: Vec<String>,

    #[serde(default)]
    pub remote_ok: bool,
}

/// Per-search overrides layered on top of a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOverrides {
    pub skills: Option<Vec<String>>,
    pub years_experience: Option<f64>,
    pub location: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub job_types: Option<Vec<String>>,
    pub industries: Option<Vec<String>>,
    pub remote_ok: Option<bool>,
}

/// Immutable candidate-side input for one matching run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingCriteria {
    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub years_experience: Option<f64>,

    #[serde(default)]
    pub education: Vec<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub salary_range: Option<SalaryRange>,

    #[serde(default)]
    pub job_types: Vec<String>,

    #[serde(default)]
    pub industries: Vec<String>,

    #[serde(default)]
    pub remote_ok: bool,
}

impl MatchingCriteria {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            skills: profile.skills.clone(),
            years_experience: profile.years_experience,
            education: profile.education.clone(),
            location: profile.location.clone(),
            salary_range: profile.desired_salary,
            job_types: profile.job_types.clone(),
            industries: profile.industries.clone(),
            remote_ok: profile.remote_ok,
        }
    }

    /// Apply per-search overrides, consuming the base criteria.
    pub fn with_overrides(mut self, overrides: &SearchOverrides) -> Self {
        if let Some(skills) = &overrides.skills {
            self.skills = skills.clone();
        }
        if let Some(years) = overrides.years_experience {
            self.years_experience = Some(years);
        }
        if let Some(location) = &overrides.location {
            self.location = Some(location.clone());
        }
        if let Some(range) = overrides.salary_range {
            self.salary_range = Some(range);
        }
        if let Some(job_types) = &overrides.job_types {
            self.job_types = job_types.clone();
        }
        if let Some(industries) = &overrides.industries {
            self.industries = industries.clone();
        }
        if let Some(remote_ok) = overrides.remote_ok {
            self.remote_ok = remote_ok;
        }
        self
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(years) = self.years_experience {
            if !years.is_finite() || years < 0.0 {
                return Err(JobMatcherError::InvalidCriteria(format!(
                    "years of experience must be a non-negative number, got {}",
                    years
                )));
            }
        }

        if let Some(range) = &self.salary_range {
            range.validate().map_err(JobMatcherError::InvalidCriteria)?;
        }

        Ok(())
    }
}

impl From<&UserProfile> for MatchingCriteria {
    fn from(profile: &UserProfile) -> Self {
        Self::from_profile(profile)
    }
}
