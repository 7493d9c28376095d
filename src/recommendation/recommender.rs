//! Ranking engine: runs the matcher over a job corpus and orders the results

use crate::config::{Config, RecommendationConfig};
use crate::error::Result;
use crate::matching::weights::snap;
use crate::matching::{JobMatch, JobMatcher};
use crate::models::{Job, MatchingCriteria};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Fit and confidence weights in the base priority
const PRIORITY_FIT_WEIGHT: f64 = 0.4;
const PRIORITY_CONFIDENCE_WEIGHT: f64 = 0.3;
/// Share of `diversity_weight` applied uniformly to every recommendation
const UNIFORM_DIVERSITY_FACTOR: f64 = 0.1;
/// One-off bumps for the first recommendation of an unseen company / industry
const NEW_COMPANY_BONUS: f64 = 0.05;
const NEW_INDUSTRY_BONUS: f64 = 0.03;

/// Postings at most this old get the recency boost and the "Recent" tag
const RECENT_DAYS: i64 = 7;
const JUST_POSTED_DAYS: i64 = 1;

const HIGH_MATCH_TAG: f64 = 0.8;
const HIGH_CONFIDENCE_TAG: f64 = 0.8;

const RESPONSE_RATE_BASE: f64 = 0.10;
const RESPONSE_RATE_CAP: f64 = 0.8;
const RESPONSE_RATE_FRESH_DAYS: i64 = 3;

/// Actionable bucket for a match, decided jointly by fit and confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    PerfectMatch,
    GoodMatch,
    Explore,
    Stretch,
}

impl RecommendationTier {
    /// Both scores must clear their own bar; high fit alone is not enough.
    pub fn classify(match_score: f64, confidence: f64) -> Self {
        let (match_score, confidence) = (snap(match_score), snap(confidence));
        if match_score >= 0.9 && confidence >= 0.8 {
            Self::PerfectMatch
        } else if match_score >= 0.7 && confidence >= 0.6 {
            Self::GoodMatch
        } else if match_score >= 0.5 && confidence >= 0.5 {
            Self::Explore
        } else {
            Self::Stretch
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PerfectMatch => "Perfect Match",
            Self::GoodMatch => "Good Match",
            Self::Explore => "Explore",
            Self::Stretch => "Stretch",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How soon to apply, from posting age alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyWindow {
    Today,
    WithinTwoDays,
    WithinWeek,
    WithinTwoWeeks,
    Soon,
    Unknown,
}

impl ApplyWindow {
    pub fn from_age(age_days: Option<i64>) -> Self {
        match age_days {
            None => Self::Unknown,
            Some(days) if days <= 1 => Self::Today,
            Some(days) if days <= 3 => Self::WithinTwoDays,
            Some(days) if days <= 7 => Self::WithinWeek,
            Some(days) if days <= 14 => Self::WithinTwoWeeks,
            Some(_) => Self::Soon,
        }
    }
}

impl fmt::Display for ApplyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hint = match self {
            Self::Today => "Apply today",
            Self::WithinTwoDays => "Apply within 2 days",
            Self::WithinWeek => "Apply within a week",
            Self::WithinTwoWeeks => "Apply within 2 weeks",
            Self::Soon => "Apply soon",
            Self::Unknown => "Unknown",
        };
        f.write_str(hint)
    }
}

/// A match enriched for presentation and final ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job_match: JobMatch,
    pub tier: RecommendationTier,
    /// Ordering score in [0, 1]; not a fit score
    pub priority: f64,
    pub tags: Vec<String>,
    pub estimated_response_rate: f64,
    pub apply_window: ApplyWindow,
    pub posted_days_ago: Option<i64>,
}

impl JobRecommendation {
    pub fn job(&self) -> &Job {
        &self.job_match.job
    }

    pub fn match_score(&self) -> f64 {
        self.job_match.match_score
    }

    pub fn confidence(&self) -> f64 {
        self.job_match.confidence
    }
}

/// Orchestrates the matcher over a corpus. Holds only immutable configuration,
/// so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Recommender {
    matcher: JobMatcher,
    config: RecommendationConfig,
}

impl Recommender {
    pub fn new(matcher: JobMatcher, config: RecommendationConfig) -> Self {
        Self { matcher, config }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            JobMatcher::from_config(&config.scoring),
            config.recommendation.clone(),
        )
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn matcher(&self) -> &JobMatcher {
        &self.matcher
    }

    pub fn recommend(
        &self,
        jobs: &[Job],
        criteria: &MatchingCriteria,
    ) -> Result<Vec<JobRecommendation>> {
        self.recommend_at(jobs, criteria, Utc::now())
    }

    /// Score, filter, classify and rank `jobs` as of `now`.
    ///
    /// Invalid criteria abort the request; invalid jobs are skipped with a
    /// warning so the rest of the corpus still gets recommendations.
    pub fn recommend_at(
        &self,
        jobs: &[Job],
        criteria: &MatchingCriteria,
        now: DateTime<Utc>,
    ) -> Result<Vec<JobRecommendation>> {
        criteria.validate()?;
        if jobs.is_empty() {
            warn!("Empty job corpus; no recommendations to compute");
            return Ok(Vec::new());
        }

        let matches: Vec<JobMatch> = valid_jobs(jobs)
            .map(|job| self.matcher.match_job(job, criteria))
            .collect();

        Ok(self.rank(matches, now))
    }

    pub async fn recommend_concurrent(
        &self,
        jobs: Vec<Job>,
        criteria: &MatchingCriteria,
    ) -> Result<Vec<JobRecommendation>> {
        self.recommend_concurrent_at(jobs, criteria, Utc::now()).await
    }

    /// Same result as [`Recommender::recommend_at`], with scoring spread over a
    /// bounded set of blocking workers. Chunks are rejoined in corpus order
    /// before ranking so ties break identically.
    pub async fn recommend_concurrent_at(
        &self,
        jobs: Vec<Job>,
        criteria: &MatchingCriteria,
        now: DateTime<Utc>,
    ) -> Result<Vec<JobRecommendation>> {
        criteria.validate()?;
        if jobs.is_empty() {
            warn!("Empty job corpus; no recommendations to compute");
            return Ok(Vec::new());
        }

        let valid: Vec<Job> = jobs.into_iter().filter(is_valid).collect();
        let total = valid.len();
        let workers = self.worker_count().min(total).max(1);
        let chunk_size = total.div_ceil(workers).max(1);
        debug!(
            "Scoring {} jobs on {} workers ({} per chunk)",
            total, workers, chunk_size
        );

        let criteria = Arc::new(criteria.clone());
        let mut handles = Vec::with_capacity(workers);
        let mut remaining = valid.into_iter().peekable();
        while remaining.peek().is_some() {
            let chunk: Vec<Job> = remaining.by_ref().take(chunk_size).collect();
            let matcher = self.matcher.clone();
            let criteria = Arc::clone(&criteria);
            handles.push(tokio::task::spawn_blocking(move || {
                chunk
                    .iter()
                    .map(|job| matcher.match_job(job, &criteria))
                    .collect::<Vec<_>>()
            }));
        }

        let mut matches = Vec::with_capacity(total);
        for handle in handles {
            matches.extend(handle.await?);
        }

        Ok(self.rank(matches, now))
    }

    fn worker_count(&self) -> usize {
        if self.config.worker_threads > 0 {
            self.config.worker_threads
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }

    /// Filter, classify, prioritise, diversify and truncate. `matches` must be
    /// in corpus order.
    fn rank(&self, matches: Vec<JobMatch>, now: DateTime<Utc>) -> Vec<JobRecommendation> {
        let scored = matches.len();
        let mut recommendations: Vec<JobRecommendation> = matches
            .into_iter()
            .filter(|m| {
                m.match_score >= self.config.min_match_score
                    && m.confidence >= self.config.min_confidence
            })
            .map(|m| self.enrich(m, now))
            .collect();

        debug!(
            "{} of {} matches cleared fit >= {} and confidence >= {}",
            recommendations.len(),
            scored,
            self.config.min_match_score,
            self.config.min_confidence
        );

        sort_by_priority(&mut recommendations);
        apply_diversity_bonus(&mut recommendations);
        sort_by_priority(&mut recommendations);
        recommendations.truncate(self.config.max_recommendations);

        info!(
            "Returning {} recommendations from {} scored jobs",
            recommendations.len(),
            scored
        );
        recommendations
    }

    fn enrich(&self, job_match: JobMatch, now: DateTime<Utc>) -> JobRecommendation {
        let age = job_match.job.age_days(now);
        let tier = RecommendationTier::classify(job_match.match_score, job_match.confidence);
        let priority = self.priority(&job_match, age);
        let tags = build_tags(&job_match, age);
        let estimated_response_rate = response_rate(&job_match, age);

        JobRecommendation {
            job_match,
            tier,
            priority,
            tags,
            estimated_response_rate,
            apply_window: ApplyWindow::from_age(age),
            posted_days_ago: age,
        }
    }

    fn priority(&self, job_match: &JobMatch, age: Option<i64>) -> f64 {
        let mut priority = PRIORITY_FIT_WEIGHT * job_match.match_score
            + PRIORITY_CONFIDENCE_WEIGHT * job_match.confidence;

        if job_match.salary_match {
            priority += self.config.salary_match_weight;
        }
        if job_match.location_match {
            priority += self.config.location_match_weight;
        }
        if matches!(age, Some(days) if days <= RECENT_DAYS) {
            priority += self.config.recency_weight;
        }
        priority += UNIFORM_DIVERSITY_FACTOR * self.config.diversity_weight;

        snap(priority).clamp(0.0, 1.0)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(JobMatcher::default(), RecommendationConfig::default())
    }
}

fn valid_jobs(jobs: &[Job]) -> impl Iterator<Item = &Job> {
    jobs.iter().filter(|job| is_valid(job))
}

fn is_valid(job: &Job) -> bool {
    match job.validate() {
        Ok(()) => true,
        Err(e) => {
            warn!("Skipping job: {}", e);
            false
        }
    }
}

/// Stable, so equal priorities keep their current relative order.
fn sort_by_priority(recommendations: &mut [JobRecommendation]) {
    recommendations.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(Ordering::Equal)
    });
}

/// Single pass over the ranked list: the first recommendation from each
/// company and each industry gets a small bump.
fn apply_diversity_bonus(recommendations: &mut [JobRecommendation]) {
    let mut seen_companies = HashSet::new();
    let mut seen_industries = HashSet::new();

    for rec in recommendations.iter_mut() {
        let mut bonus = 0.0;

        let company = rec.job().company.trim().to_lowercase();
        if seen_companies.insert(company) {
            bonus += NEW_COMPANY_BONUS;
        }
        if let Some(industry) = rec.job().industry() {
            if seen_industries.insert(industry.to_lowercase()) {
                bonus += NEW_INDUSTRY_BONUS;
            }
        }

        rec.priority = snap(rec.priority + bonus).clamp(0.0, 1.0);
    }
}

fn build_tags(job_match: &JobMatch, age: Option<i64>) -> Vec<String> {
    let mut tags = Vec::new();
    let job = &job_match.job;

    if job_match.match_score >= HIGH_MATCH_TAG {
        tags.push("High Match".to_string());
    }
    if job_match.confidence >= HIGH_CONFIDENCE_TAG {
        tags.push("High Confidence".to_string());
    }
    if job_match.salary_match {
        tags.push("Salary Match".to_string());
    }
    if job_match.location_match {
        tags.push("Location Match".to_string());
    }
    if job.remote {
        tags.push("Remote".to_string());
    }
    match age {
        Some(days) if days <= JUST_POSTED_DAYS => tags.push("Just Posted".to_string()),
        Some(days) if days <= RECENT_DAYS => tags.push("Recent".to_string()),
        _ => {}
    }
    for extra in [job.industry(), job.job_type()].into_iter().flatten() {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(extra)) {
            tags.push(extra.to_string());
        }
    }

    tags
}

fn response_rate(job_match: &JobMatch, age: Option<i64>) -> f64 {
    let mut rate =
        RESPONSE_RATE_BASE + 0.3 * job_match.match_score + 0.2 * job_match.confidence;
    if job_match.match_score >= 0.9 {
        rate += 0.2;
    }
    if matches!(age, Some(days) if days <= RESPONSE_RATE_FRESH_DAYS) {
        rate += 0.1;
    }
    rate.min(RESPONSE_RATE_CAP)
}
