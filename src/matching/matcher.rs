//! Multi-factor job/candidate matcher
//!
//! `JobMatcher::match_job` scores one posting against one set of criteria.
//! It is pure and deterministic: missing data falls back to neutral scores
//! instead of failing, and the matcher holds no mutable state, so a single
//! instance can be shared across threads.

use crate::config::ScoringConfig;
use crate::matching::similarity::{best_similarity, contains_either, normalize_skill};
use crate::matching::weights::*;
use crate::models::{Job, MatchingCriteria};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-dimension scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub education: f64,
    pub industry: f64,
}

impl DimensionScores {
    pub fn weighted(&self, weights: &ScoringWeights) -> f64 {
        let total = self.skills * weights.skills
            + self.experience * weights.experience
            + self.location * weights.location
            + self.salary * weights.salary
            + self.education * weights.education
            + self.industry * weights.industry;
        snap(total).clamp(0.0, 1.0)
    }
}

/// Matcher output for one (job, criteria) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: Job,
    /// Weighted fit score in [0, 1]
    pub match_score: f64,
    /// How much of the fit score is backed by real data, in [0.3, 0.9]
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub improvements: Vec<String>,
    pub salary_match: bool,
    pub location_match: bool,
    pub scores: DimensionScores,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct SkillOutcome {
    score: f64,
    total: usize,
    matched: Vec<String>,
    missing: Vec<String>,
}

/// Rule-based scorer; configuration is fixed at construction
#[derive(Debug, Clone)]
pub struct JobMatcher {
    weights: ScoringWeights,
    fuzzy_threshold: f64,
    fuzzy_credit: f64,
}

impl JobMatcher {
    pub fn new() -> Self {
        Self::with_weights(DEFAULT_WEIGHTS)
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            fuzzy_threshold: FUZZY_MATCH_THRESHOLD,
            fuzzy_credit: FUZZY_MATCH_CREDIT,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            weights: config.weights,
            fuzzy_threshold: config.fuzzy_threshold,
            fuzzy_credit: config.fuzzy_credit,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    /// Score `job` against `criteria`
    pub fn match_job(&self, job: &Job, criteria: &MatchingCriteria) -> JobMatch {
        let skills = self.skill_match(job, criteria);
        let scores = DimensionScores {
            skills: skills.score,
            experience: experience_match(job, criteria),
            location: location_match(job, criteria),
            salary: salary_match(job, criteria),
            education: education_match(job, criteria),
            industry: industry_match(job, criteria),
        };

        let match_score = scores.weighted(&self.weights);
        let confidence = confidence(job, criteria);
        let reasons = build_reasons(job, &scores, &skills);
        let improvements = build_improvements(job, criteria, &scores, &skills);

        JobMatch {
            job: job.clone(),
            match_score,
            confidence,
            reasons,
            improvements,
            salary_match: scores.salary >= MATCH_FLAG_THRESHOLD,
            location_match: scores.location >= MATCH_FLAG_THRESHOLD,
            scores,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
        }
    }

    fn skill_match(&self, job: &Job, criteria: &MatchingCriteria) -> SkillOutcome {
        let required = dedup_skills(&job.required_skills);
        if required.is_empty() {
            return SkillOutcome {
                score: NEUTRAL_SCORE,
                total: 0,
                matched: Vec::new(),
                missing: Vec::new(),
            };
        }

        let candidate: Vec<String> = criteria
            .skills
            .iter()
            .map(|s| normalize_skill(s))
            .filter(|s| !s.is_empty())
            .collect();
        let candidate_set: HashSet<&str> = candidate.iter().map(String::as_str).collect();

        let mut exact = 0usize;
        let mut fuzzy = 0usize;
        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for (normalized, original) in &required {
            if candidate_set.contains(normalized.as_str()) {
                exact += 1;
                matched.push(original.clone());
                continue;
            }

            match best_similarity(normalized, &candidate) {
                Some((_, score)) if snap(score) > self.fuzzy_threshold => {
                    fuzzy += 1;
                    matched.push(original.clone());
                }
                _ => missing.push(original.clone()),
            }
        }

        let total = required.len();
        let score = snap((exact as f64 + self.fuzzy_credit * fuzzy as f64) / total as f64);

        SkillOutcome {
            score: score.clamp(0.0, 1.0),
            total,
            matched,
            missing,
        }
    }
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalized required skills, first spelling kept, duplicates dropped
fn dedup_skills(skills: &[String]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter_map(|original| {
            let normalized = normalize_skill(original);
            if normalized.is_empty() || !seen.insert(normalized.clone()) {
                None
            } else {
                Some((normalized, original.trim().to_string()))
            }
        })
        .collect()
}

fn experience_match(job: &Job, criteria: &MatchingCriteria) -> f64 {
    let Some(required) = job.experience_required else {
        return NO_REQUIREMENT_SCORE;
    };
    let Some(years) = criteria.years_experience else {
        return NEUTRAL_SCORE;
    };

    let diff = (years - required).abs();
    step_score(&EXPERIENCE_STEPS, diff, EXPERIENCE_FLOOR)
}

fn location_match(job: &Job, criteria: &MatchingCriteria) -> f64 {
    if job.remote {
        return if criteria.remote_ok {
            REMOTE_ACCEPTED_SCORE
        } else {
            REMOTE_NOT_PREFERRED_SCORE
        };
    }

    let (Some(job_location), Some(wanted)) = (job.location(), criteria.location()) else {
        return NEUTRAL_SCORE;
    };

    let job_location = job_location.to_lowercase();
    let wanted = wanted.to_lowercase();

    if job_location == wanted {
        LOCATION_EXACT_SCORE
    } else if job_location.contains(&wanted) || wanted.contains(&job_location) {
        LOCATION_CONTAINS_SCORE
    } else if region_token(&job_location).is_some()
        && region_token(&job_location) == region_token(&wanted)
    {
        LOCATION_SAME_REGION_SCORE
    } else {
        LOCATION_MISMATCH_SCORE
    }
}

/// Last token of a location, treated as its state or region ("Austin, TX" -> "tx")
fn region_token(location: &str) -> Option<&str> {
    location
        .rsplit(|c: char| c == ',' || c.is_whitespace())
        .find(|token| !token.is_empty())
}

fn salary_match(job: &Job, criteria: &MatchingCriteria) -> f64 {
    let (Some(offered), Some(wanted)) = (job.salary_range(), criteria.salary_range) else {
        return NEUTRAL_SCORE;
    };

    if offered.overlaps(&wanted) {
        return SALARY_OVERLAP_SCORE;
    }

    step_score(
        &SALARY_STEPS,
        relative_salary_gap(offered.midpoint(), wanted.midpoint()),
        SALARY_FLOOR,
    )
}

/// Midpoint difference relative to what the candidate asked for
fn relative_salary_gap(offered: f64, wanted: f64) -> f64 {
    let base = if wanted > 0.0 { wanted } else { offered.max(wanted) };
    if base <= 0.0 {
        return 0.0;
    }
    (offered - wanted).abs() / base
}

fn education_match(job: &Job, criteria: &MatchingCriteria) -> f64 {
    let required = trimmed_non_empty(&job.education_required);
    if required.is_empty() {
        return NO_REQUIREMENT_SCORE;
    }

    let held = trimmed_non_empty(&criteria.education);
    let met = required
        .iter()
        .filter(|needed| held.iter().any(|have| contains_either(have, needed)))
        .count();

    snap(met as f64 / required.len() as f64)
}

fn industry_match(job: &Job, criteria: &MatchingCriteria) -> f64 {
    let preferences = trimmed_non_empty(&criteria.industries);
    let Some(industry) = job.industry() else {
        return NEUTRAL_SCORE;
    };
    if preferences.is_empty() {
        return NEUTRAL_SCORE;
    }

    if preferences.iter().any(|p| contains_either(p, industry)) {
        INDUSTRY_MATCH_SCORE
    } else {
        INDUSTRY_MISMATCH_SCORE
    }
}

fn trimmed_non_empty(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Data completeness, not fit quality.
fn confidence(job: &Job, criteria: &MatchingCriteria) -> f64 {
    let major = [
        !dedup_skills(&job.required_skills).is_empty(),
        job.experience_required.is_some(),
        job.salary_range().is_some(),
        criteria.skills.iter().any(|s| !s.trim().is_empty()),
        criteria.years_experience.is_some(),
        criteria.salary_range.is_some(),
    ];
    let minor = [
        job.location().is_some(),
        !trimmed_non_empty(&job.education_required).is_empty(),
    ];

    let populated = |fields: &[bool]| fields.iter().filter(|present| **present).count() as f64;
    let score = CONFIDENCE_BASE
        + CONFIDENCE_MAJOR_FIELD * populated(&major)
        + CONFIDENCE_MINOR_FIELD * populated(&minor);

    snap(score).clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
}

fn build_reasons(job: &Job, scores: &DimensionScores, skills: &SkillOutcome) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.skills > REASON_THRESHOLD {
        reasons.push(format!(
            "Strong skill match ({} of {} required skills)",
            skills.matched.len(),
            skills.total
        ));
    }
    if scores.experience > REASON_THRESHOLD {
        match job.experience_required {
            Some(required) => reasons.push(format!(
                "Experience level fits the {} years required",
                format_years(required)
            )),
            None => reasons.push("Experience level fits the role".to_string()),
        }
    }
    if scores.location > REASON_THRESHOLD {
        if job.remote {
            reasons.push("Remote position matches your remote preference".to_string());
        } else {
            reasons.push("Location matches your preference".to_string());
        }
    }
    if scores.salary > REASON_THRESHOLD {
        reasons.push("Salary range aligns with your expectations".to_string());
    }
    if scores.education > REASON_THRESHOLD {
        reasons.push("Meets the education requirements".to_string());
    }
    if scores.industry > REASON_THRESHOLD {
        let industry = job.industry().unwrap_or("this industry");
        reasons.push(format!("In your preferred industry ({})", industry));
    }

    if reasons.is_empty() {
        reasons.push("Potential match worth exploring".to_string());
    }

    reasons
}

fn build_improvements(
    job: &Job,
    criteria: &MatchingCriteria,
    scores: &DimensionScores,
    skills: &SkillOutcome,
) -> Vec<String> {
    let mut improvements = Vec::new();

    if scores.skills < IMPROVEMENT_THRESHOLD {
        if skills.total == 0 {
            improvements.push(
                "No required skills are listed; review the full description before applying"
                    .to_string(),
            );
        } else if !skills.missing.is_empty() {
            let top: Vec<&str> = skills.missing.iter().take(3).map(String::as_str).collect();
            improvements.push(format!("Build experience with: {}", top.join(", ")));
        }
    }

    if scores.experience < IMPROVEMENT_THRESHOLD {
        match (job.experience_required, criteria.years_experience) {
            (Some(required), Some(years)) if years < required => improvements.push(format!(
                "Gain about {} more years of experience (role asks for {})",
                format_years(required - years),
                format_years(required)
            )),
            (Some(required), Some(years)) => improvements.push(format!(
                "You exceed the {} years asked for by {}; consider more senior roles",
                format_years(required),
                format_years(years - required)
            )),
            (Some(_), None) => improvements
                .push("Add your years of experience to your profile".to_string()),
            (None, _) => {}
        }
    }

    if scores.location < IMPROVEMENT_THRESHOLD {
        if scores.location == NEUTRAL_SCORE {
            improvements.push("Confirm the work location with the employer".to_string());
        } else {
            improvements.push(
                "Location differs from your preference; consider relocation or remote roles"
                    .to_string(),
            );
        }
    }

    if scores.salary < IMPROVEMENT_THRESHOLD {
        match (job.salary_range(), criteria.salary_range) {
            (Some(offered), Some(wanted)) if offered.midpoint() < wanted.midpoint() => {
                improvements.push(
                    "Salary is below your expectations; negotiate or weigh other benefits"
                        .to_string(),
                )
            }
            (Some(_), Some(_)) => improvements.push(
                "Salary is above your stated range; you may be able to raise your expectations"
                    .to_string(),
            ),
            _ => improvements
                .push("Salary information is incomplete; confirm compensation early".to_string()),
        }
    }

    if scores.education < IMPROVEMENT_THRESHOLD {
        let held = trimmed_non_empty(&criteria.education);
        let missing: Vec<&str> = trimmed_non_empty(&job.education_required)
            .into_iter()
            .filter(|needed| !held.iter().any(|have| contains_either(have, needed)))
            .take(3)
            .collect();
        improvements.push(format!("Education requirements not met: {}", missing.join(", ")));
    }

    if scores.industry < IMPROVEMENT_THRESHOLD {
        match job.industry() {
            Some(industry) if scores.industry == INDUSTRY_MISMATCH_SCORE => improvements.push(
                format!("Outside your preferred industries ({})", industry),
            ),
            _ => improvements.push(
                "Add preferred industries to your profile to sharpen matches".to_string(),
            ),
        }
    }

    improvements
}

/// "3" for whole years, "1.5" otherwise
fn format_years(years: f64) -> String {
    if (years - years.round()).abs() < 0.05 {
        format!("{}", years.round() as i64)
    } else {
        format!("{:.1}", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryRange;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn go_job() -> Job {
        let mut job = Job::new("go-1", "Backend Engineer", "Acme");
        job.remote = true;
        job.required_skills = strings(&["Go", "SQL"]);
        job.experience_required = Some(3.0);
        job.salary_min = Some(100_000.0);
        job.salary_max = Some(130_000.0);
        job
    }

    fn go_candidate() -> MatchingCriteria {
        MatchingCriteria {
            skills: strings(&["go", "sql", "python"]),
            years_experience: Some(3.0),
            salary_range: Some(SalaryRange::new(110_000.0, 140_000.0)),
            remote_ok: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_scenario_fit() {
        let result = JobMatcher::new().match_job(&go_job(), &go_candidate());

        assert_eq!(result.scores.skills, 1.0);
        assert_eq!(result.scores.experience, 1.0);
        assert_eq!(result.scores.location, 1.0);
        assert_eq!(result.scores.salary, 1.0);
        assert_eq!(result.scores.education, 0.8);
        assert_eq!(result.scores.industry, 0.5);
        assert!((result.match_score - 0.955).abs() < 1e-4);
        assert!(result.salary_match);
        assert!(result.location_match);
    }

    #[test]
    fn test_no_required_skills_is_neutral() {
        let mut job = go_job();
        job.required_skills.clear();
        let result = JobMatcher::new().match_job(&job, &go_candidate());
        assert_eq!(result.scores.skills, 0.5);
    }

    #[test]
    fn test_subset_skills_score_full() {
        let mut job = go_job();
        job.required_skills = strings(&["PYTHON", "Go"]);
        let result = JobMatcher::new().match_job(&job, &go_candidate());
        assert_eq!(result.scores.skills, 1.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_fuzzy_skill_gets_partial_credit() {
        let mut job = go_job();
        job.required_skills = strings(&["Kubernetes", "Terraform"]);
        let criteria = MatchingCriteria {
            skills: strings(&["kubernete"]),
            ..Default::default()
        };

        let result = JobMatcher::new().match_job(&job, &criteria);
        assert!((result.scores.skills - 0.35).abs() < 1e-6);
        assert_eq!(result.matched_skills, strings(&["Kubernetes"]));
        assert_eq!(result.missing_skills, strings(&["Terraform"]));
        assert!(result
            .improvements
            .iter()
            .any(|i| i.contains("Terraform")));
    }

    #[test]
    fn test_duplicate_required_skills_count_once() {
        let mut job = go_job();
        job.required_skills = strings(&["Go", "golang", "SQL", "Haskell"]);
        let result = JobMatcher::new().match_job(&job, &go_candidate());
        let expected = 2.0 / 3.0;
        assert!((result.scores.skills - expected).abs() < 1e-6);
    }

    #[test]
    fn test_experience_steps_penalize_both_directions() {
        let job = go_job();
        let mut criteria = go_candidate();

        criteria.years_experience = Some(1.0);
        let under = JobMatcher::new().match_job(&job, &criteria);
        criteria.years_experience = Some(5.0);
        let over = JobMatcher::new().match_job(&job, &criteria);

        assert_eq!(under.scores.experience, 0.7);
        assert_eq!(over.scores.experience, 0.7);
    }

    #[test]
    fn test_experience_without_requirement_is_lenient() {
        let mut job = go_job();
        job.experience_required = None;
        let result = JobMatcher::new().match_job(&job, &go_candidate());
        assert_eq!(result.scores.experience, 0.8);
    }

    #[test]
    fn test_experience_gap_improvement() {
        let mut job = go_job();
        job.experience_required = Some(9.0);
        let result = JobMatcher::new().match_job(&job, &go_candidate());
        assert_eq!(result.scores.experience, 0.1);
        assert!(result
            .improvements
            .iter()
            .any(|i| i.contains("6 more years")));
    }

    #[test]
    fn test_remote_job_for_onsite_candidate() {
        let mut criteria = go_candidate();
        criteria.remote_ok = false;
        let result = JobMatcher::new().match_job(&go_job(), &criteria);
        assert_eq!(result.scores.location, 0.6);
        assert!(!result.location_match);
    }

    #[test]
    fn test_location_ladder() {
        let mut job = go_job();
        job.remote = false;
        let mut criteria = go_candidate();
        let matcher = JobMatcher::new();

        let mut score_for = |job_loc: Option<&str>, wanted: Option<&str>| {
            job.location = job_loc.map(str::to_string);
            criteria.location = wanted.map(str::to_string);
            matcher.match_job(&job, &criteria).scores.location
        };

        assert_eq!(score_for(Some("Austin, TX"), Some("austin, tx")), 1.0);
        assert_eq!(score_for(Some("Austin, TX"), Some("Austin")), 0.8);
        assert_eq!(score_for(Some("Dallas, TX"), Some("Austin, TX")), 0.6);
        assert_eq!(score_for(Some("Berlin, Germany"), Some("Austin, TX")), 0.2);
        assert_eq!(score_for(None, Some("Austin, TX")), 0.5);
        assert_eq!(score_for(Some("Austin, TX"), None), 0.5);
    }

    #[test]
    fn test_salary_midpoint_ladder() {
        let mut criteria = go_candidate();
        let job = go_job(); // midpoint 115k

        criteria.salary_range = Some(SalaryRange::new(135_000.0, 145_000.0)); // mid 140k
        let close = JobMatcher::new().match_job(&job, &criteria);
        assert_eq!(close.scores.salary, 0.8);
        assert!(close.salary_match);

        criteria.salary_range = Some(SalaryRange::new(240_000.0, 260_000.0)); // mid 250k
        let far = JobMatcher::new().match_job(&job, &criteria);
        assert_eq!(far.scores.salary, 0.4);
        assert!(!far.salary_match);
        assert!(far.improvements.iter().any(|i| i.contains("below")));

        criteria.salary_range = None;
        let unknown = JobMatcher::new().match_job(&job, &criteria);
        assert_eq!(unknown.scores.salary, 0.5);
    }

    #[test]
    fn test_experience_step_bounds_with_fractional_years() {
        let mut job = go_job();
        let mut criteria = go_candidate();
        let mut experience_for = |required: f64, years: f64| {
            job.experience_required = Some(required);
            criteria.years_experience = Some(years);
            JobMatcher::new().match_job(&job, &criteria).scores.experience
        };

        // each difference is an exact step bound once the subtraction residue is gone
        assert_eq!(experience_for(1.4, 2.4), 0.9);
        assert_eq!(experience_for(1.2, 2.2), 0.9);
        assert_eq!(experience_for(2.2, 1.2), 0.9);
        assert_eq!(experience_for(2.4, 4.4), 0.7);
        assert_eq!(experience_for(1.4, 4.4), 0.5);
        assert_eq!(experience_for(1.4, 4.5), 0.3);
    }

    #[test]
    fn test_salary_step_bounds_with_derived_gaps() {
        let mut job = go_job();
        let mut criteria = go_candidate();
        criteria.salary_range = Some(SalaryRange::new(51.0, 51.0));
        let mut salary_for = |offered: f64| {
            job.salary_min = Some(offered);
            job.salary_max = Some(offered);
            JobMatcher::new().match_job(&job, &criteria).scores.salary
        };

        // gaps of 0.2, 0.4 and 0.6 relative to the 51.0 ask
        assert_eq!(salary_for(61.2), 0.8);
        assert_eq!(salary_for(40.8), 0.8);
        assert_eq!(salary_for(71.4), 0.6);
        assert_eq!(salary_for(20.4), 0.4);
        assert_eq!(salary_for(81.6), 0.4);
        assert_eq!(salary_for(90.0), 0.2);
    }

    #[test]
    fn test_fuzzy_similarity_at_threshold_does_not_count() {
        let mut job = go_job();
        job.required_skills = strings(&["TypeScript"]);
        let mut criteria = go_candidate();

        // three deletions over ten characters: similarity exactly 0.7
        criteria.skills = strings(&["typescr"]);
        let at_threshold = JobMatcher::new().match_job(&job, &criteria);
        assert_eq!(at_threshold.scores.skills, 0.0);
        assert!(at_threshold.matched_skills.is_empty());
        assert_eq!(at_threshold.missing_skills, strings(&["TypeScript"]));

        criteria.skills = strings(&["typescri"]);
        let above = JobMatcher::new().match_job(&job, &criteria);
        assert_eq!(above.scores.skills, 0.7);
        assert_eq!(above.matched_skills, strings(&["TypeScript"]));
    }

    #[test]
    fn test_fit_lands_exactly_on_perfect_bar() {
        let mut job = go_job();
        job.education_required = strings(&["Bachelor", "AWS Certified"]);
        let mut criteria = go_candidate();
        criteria.years_experience = Some(4.0);
        criteria.education = strings(&["bachelor of science"]);

        let result = JobMatcher::new().match_job(&job, &criteria);
        assert_eq!(result.scores.skills, 1.0);
        assert_eq!(result.scores.experience, 0.9);
        assert_eq!(result.scores.location, 1.0);
        assert_eq!(result.scores.salary, 1.0);
        assert_eq!(result.scores.education, 0.5);
        assert_eq!(result.scores.industry, 0.5);
        assert_eq!(result.match_score, 0.9);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_education_fraction() {
        let mut job = go_job();
        job.education_required = strings(&["Bachelor", "AWS Certified"]);
        let mut criteria = go_candidate();
        criteria.education = strings(&["bachelor of science"]);

        let result = JobMatcher::new().match_job(&job, &criteria);
        assert_eq!(result.scores.education, 0.5);
        assert!(result
            .improvements
            .iter()
            .any(|i| i.contains("AWS Certified")));
    }

    #[test]
    fn test_industry_match_and_mismatch() {
        let mut job = go_job();
        job.industry = Some("Financial Technology".to_string());
        let mut criteria = go_candidate();

        criteria.industries = strings(&["technology"]);
        assert_eq!(JobMatcher::new().match_job(&job, &criteria).scores.industry, 1.0);

        criteria.industries = strings(&["Healthcare"]);
        assert_eq!(JobMatcher::new().match_job(&job, &criteria).scores.industry, 0.3);

        criteria.industries.clear();
        assert_eq!(JobMatcher::new().match_job(&job, &criteria).scores.industry, 0.5);
    }

    #[test]
    fn test_confidence_bounds() {
        let empty_job = Job::new("bare", "Mystery Role", "Unknown Co");
        let bare = JobMatcher::new().match_job(&empty_job, &MatchingCriteria::default());
        assert_eq!(bare.confidence, 0.5);

        let mut full_job = go_job();
        full_job.location = Some("Austin, TX".to_string());
        full_job.education_required = strings(&["Bachelor"]);
        let full = JobMatcher::new().match_job(&full_job, &go_candidate());
        assert_eq!(full.confidence, 0.9);
    }

    #[test]
    fn test_confidence_monotonic_as_fields_fill_in() {
        let matcher = JobMatcher::new();
        let mut job = Job::new("j", "Engineer", "Acme");
        let mut criteria = MatchingCriteria::default();
        let mut last = matcher.match_job(&job, &criteria).confidence;

        let steps: [fn(&mut Job, &mut MatchingCriteria); 8] = [
            |j: &mut Job, _: &mut MatchingCriteria| j.required_skills = vec!["Rust".to_string()],
            |_: &mut Job, c: &mut MatchingCriteria| c.skills = vec!["Rust".to_string()],
            |j: &mut Job, _: &mut MatchingCriteria| j.location = Some("Berlin".to_string()),
            |j: &mut Job, _: &mut MatchingCriteria| j.experience_required = Some(2.0),
            |_: &mut Job, c: &mut MatchingCriteria| c.years_experience = Some(2.0),
            |j: &mut Job, _: &mut MatchingCriteria| j.education_required = vec!["BSc".to_string()],
            |j: &mut Job, _: &mut MatchingCriteria| {
                j.salary_min = Some(1.0);
                j.salary_max = Some(2.0);
            },
            |_: &mut Job, c: &mut MatchingCriteria| {
                c.salary_range = Some(SalaryRange::new(1.0, 2.0))
            },
        ];

        for step in steps {
            step(&mut job, &mut criteria);
            let next = matcher.match_job(&job, &criteria).confidence;
            assert!(next >= last, "confidence dropped from {} to {}", last, next);
            last = next;
        }
        assert_eq!(last, 0.9);
    }

    #[test]
    fn test_generic_reason_when_nothing_stands_out() {
        let job = Job::new("bare", "Mystery Role", "Unknown Co");
        let result = JobMatcher::new().match_job(&job, &MatchingCriteria::default());
        assert_eq!(result.reasons, vec!["Potential match worth exploring".to_string()]);
    }

    #[test]
    fn test_matcher_is_deterministic() {
        let matcher = JobMatcher::new();
        let first = matcher.match_job(&go_job(), &go_candidate());
        let second = matcher.match_job(&go_job(), &go_candidate());
        assert_eq!(first, second);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let matcher = JobMatcher::new();
        let mut job = go_job();
        job.remote = false;
        job.location = Some("Tokyo".to_string());
        job.salary_min = Some(1_000_000.0);
        job.salary_max = Some(2_000_000.0);
        job.experience_required = Some(40.0);
        job.industry = Some("Mining".to_string());
        job.education_required = strings(&["PhD"]);
        let mut criteria = go_candidate();
        criteria.skills.clear();
        criteria.industries = strings(&["Retail"]);
        criteria.location = Some("Lima".to_string());

        let result = matcher.match_job(&job, &criteria);
        for score in [
            result.match_score,
            result.confidence,
            result.scores.skills,
            result.scores.experience,
            result.scores.location,
            result.scores.salary,
            result.scores.education,
            result.scores.industry,
        ] {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(3.0), "3");
        assert_eq!(format_years(1.5), "1.5");
    }
}
