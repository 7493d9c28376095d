//! Integration tests for the job matcher

use job_matcher::config::OutputFormat;
use job_matcher::input::InputManager;
use job_matcher::models::{Job, MatchingCriteria, SearchOverrides};
use job_matcher::output::{
    resolve_save_path, save_report_to_file, RecommendationReport, ReportGenerator,
};
use job_matcher::recommendation::{insights, RecommendationTier, Recommender};
use job_matcher::JobMatcherError;
use std::path::Path;
use tempfile::tempdir;

async fn fixture_inputs() -> (Vec<Job>, MatchingCriteria) {
    let manager = InputManager::new();
    let jobs = manager
        .load_jobs(Path::new("tests/fixtures/jobs.json"))
        .await
        .unwrap();
    let profile = manager
        .load_profile(Path::new("tests/fixtures/profile.json"))
        .await
        .unwrap();
    (jobs, MatchingCriteria::from_profile(&profile))
}

#[tokio::test]
async fn test_load_json_corpus() {
    let (jobs, criteria) = fixture_inputs().await;
    assert_eq!(jobs.len(), 6);
    assert_eq!(jobs[0].id, "rust-platform");
    assert_eq!(criteria.skills.len(), 5);
    assert!(criteria.remote_ok);
}

#[tokio::test]
async fn test_load_json_lines_corpus() {
    let jobs = InputManager::new()
        .load_jobs(Path::new("tests/fixtures/jobs.jsonl"))
        .await
        .unwrap();

    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[2].id, "remote-rust");
    assert!(jobs[2].posted_at.is_some());
}

#[tokio::test]
async fn test_toml_and_json_profiles_agree() {
    let manager = InputManager::new();
    let from_json = manager
        .load_profile(Path::new("tests/fixtures/profile.json"))
        .await
        .unwrap();
    let from_toml = manager
        .load_profile(Path::new("tests/fixtures/profile.toml"))
        .await
        .unwrap();

    assert_eq!(from_json, from_toml);
}

#[tokio::test]
async fn test_empty_corpus_rejected_at_load() {
    let result = InputManager::new()
        .load_jobs(Path::new("tests/fixtures/empty.json"))
        .await;
    assert!(matches!(result, Err(JobMatcherError::EmptyCorpus)));
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let manager = InputManager::new();

    let unsupported = manager
        .load_jobs(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(matches!(unsupported, Err(JobMatcherError::UnsupportedFormat(_))));

    let missing = manager
        .load_profile(Path::new("tests/fixtures/nope.json"))
        .await;
    assert!(matches!(missing, Err(JobMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_recommend_ranks_fixture_corpus() {
    let (jobs, criteria) = fixture_inputs().await;
    let recs = Recommender::default().recommend(&jobs, &criteria).unwrap();

    // bad-salary is skipped as invalid, onsite-java falls below the fit floor
    let ranked: Vec<&str> = recs.iter().map(|r| r.job().id.as_str()).collect();
    assert_eq!(
        ranked,
        vec!["rust-platform", "go-backend", "generalist", "senior-staff"]
    );
    assert_eq!(recs[0].tier, RecommendationTier::PerfectMatch);
    assert_eq!(recs[1].tier, RecommendationTier::GoodMatch);
    assert!(recs[0].tags.iter().any(|t| t == "High Match"));
    assert!(recs
        .windows(2)
        .all(|pair| pair[0].priority >= pair[1].priority));
}

#[tokio::test]
async fn test_concurrent_matches_sequential_on_fixtures() {
    let (jobs, criteria) = fixture_inputs().await;
    let recommender = Recommender::default();
    let now = chrono::Utc::now();

    let sequential = recommender.recommend_at(&jobs, &criteria, now).unwrap();
    let concurrent = recommender
        .recommend_concurrent_at(jobs, &criteria, now)
        .await
        .unwrap();

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn test_remote_override() {
    let (jobs, criteria) = fixture_inputs().await;
    let remote_jobs: Vec<Job> = jobs.into_iter().filter(|job| job.remote).collect();
    let criteria = criteria.with_overrides(&SearchOverrides {
        remote_ok: Some(true),
        ..Default::default()
    });

    let recs = Recommender::default().recommend(&remote_jobs, &criteria).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].job().id, "go-backend");
    assert!(recs[0].job_match.location_match);
}

#[tokio::test]
async fn test_insights_and_scenarios() {
    let (jobs, criteria) = fixture_inputs().await;
    let recs = Recommender::default().recommend(&jobs, &criteria).unwrap();
    let summary = insights(&recs);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.tier_counts.perfect_match, 1);
    assert_eq!(summary.tier_counts.good_match, 1);
    assert_eq!(summary.tier_counts.explore, 2);
    assert!((summary.remote_percentage - 25.0).abs() < 1e-3);
    assert_eq!(summary.top_locations[0].name, "Austin");

    let report = RecommendationReport::new("Ada", recs, &criteria, 6, 1);
    let growth: Vec<&str> = report
        .scenarios
        .career_growth
        .iter()
        .map(|r| r.job().id.as_str())
        .collect();
    assert_eq!(growth, vec!["senior-staff"]);
    assert_eq!(report.scenarios.quick_wins.len(), 2);
    assert_eq!(report.scenarios.remote_work[0].job().id, "go-backend");
}

#[tokio::test]
async fn test_invalid_criteria_abort() {
    let (jobs, mut criteria) = fixture_inputs().await;
    criteria.years_experience = Some(-1.0);

    let result = Recommender::default().recommend(&jobs, &criteria);
    assert!(matches!(result, Err(JobMatcherError::InvalidCriteria(_))));
}

#[tokio::test]
async fn test_markdown_report_saved_to_disk() {
    let (jobs, criteria) = fixture_inputs().await;
    let recs = Recommender::default().recommend(&jobs, &criteria).unwrap();
    let report = RecommendationReport::new("Ada Lovelace", recs, &criteria, jobs.len(), 3);

    let rendered = ReportGenerator::with_options(false, true, true, true)
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("reports").join("ada.md");
    save_report_to_file(&rendered, &path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("Platform Engineer"));
    assert!(saved.contains("## Scenarios"));
}

#[tokio::test]
async fn test_json_report_saved_into_directory() {
    let (jobs, criteria) = fixture_inputs().await;
    let recs = Recommender::default().recommend(&jobs, &criteria).unwrap();
    let report = RecommendationReport::new("Ada Lovelace", recs, &criteria, jobs.len(), 3);

    let rendered = ReportGenerator::with_options(false, false, true, true)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();

    let dir = tempdir().unwrap();
    let path = resolve_save_path(dir.path(), &OutputFormat::Json, &report.profile_name);
    save_report_to_file(&rendered, &path).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["profile_name"], "Ada Lovelace");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
