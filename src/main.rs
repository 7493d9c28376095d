//! Job matcher: rank job postings against a candidate profile

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::{Config, OutputFormat};
use job_matcher::input::InputManager;
use job_matcher::matching::JobMatcher;
use job_matcher::models::{Job, MatchingCriteria, SearchOverrides, UserProfile};
use job_matcher::output::{
    resolve_save_path, save_report_to_file, RecommendationReport, ReportGenerator,
};
use job_matcher::recommendation::Recommender;
use job_matcher::JobMatcherError;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading configuration from {}", path.display())),
        None => Config::load().context("loading default configuration"),
    }
}

async fn run_command(
    command: Commands,
    mut config: Config,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    match command {
        Commands::Recommend {
            jobs,
            profile,
            max,
            min_score,
            min_confidence,
            output,
            save,
            detailed,
            remote_only,
        } => {
            if let Some(max) = max {
                config.recommendation.max_recommendations = max;
            }
            if let Some(score) = min_score {
                config.recommendation.min_match_score = cli::parse_unit_interval("min-score", score)
                    .map_err(JobMatcherError::InvalidInput)?;
            }
            if let Some(confidence) = min_confidence {
                config.recommendation.min_confidence =
                    cli::parse_unit_interval("min-confidence", confidence)
                        .map_err(JobMatcherError::InvalidInput)?;
            }
            config.recommendation.validate()?;
            let output_format = resolve_format(output.as_deref(), &config)?;

            let (corpus, profile) = load_inputs(&jobs, &profile).await?;
            let overrides = SearchOverrides {
                remote_ok: remote_only.then_some(true),
                ..Default::default()
            };
            let criteria = MatchingCriteria::from_profile(&profile).with_overrides(&overrides);

            let corpus: Vec<Job> = if remote_only {
                corpus.into_iter().filter(|job| job.remote).collect()
            } else {
                corpus
            };

            let report = build_report(&config, &profile, corpus, &criteria).await?;
            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, &output_format, &report.profile_name);
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("saving report to {}", path.display()))?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Match {
            jobs,
            profile,
            job_id,
            output,
        } => {
            let output_format = resolve_format(output.as_deref(), &config)?;
            let (corpus, profile) = load_inputs(&jobs, &profile).await?;
            let criteria = MatchingCriteria::from_profile(&profile);
            criteria.validate()?;

            let job = corpus
                .iter()
                .find(|job| job.id == job_id)
                .ok_or_else(|| JobMatcherError::JobNotFound(job_id.clone()))?;
            job.validate()?;

            let job_match = JobMatcher::from_config(&config.scoring).match_job(job, &criteria);
            let generator =
                ReportGenerator::with_options(config.output.color_output, true, true, true);
            println!("{}", generator.generate_match(&job_match, &output_format)?);
        }

        Commands::Insights {
            jobs,
            profile,
            output,
        } => {
            let output_format = resolve_format(output.as_deref(), &config)?;
            let (corpus, profile) = load_inputs(&jobs, &profile).await?;
            let criteria = MatchingCriteria::from_profile(&profile);

            let report = build_report(&config, &profile, corpus, &criteria).await?;
            let generator =
                ReportGenerator::with_options(config.output.color_output, true, true, true);
            println!("{}", generator.generate_insights(&report, &output_format)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| JobMatcherError::Configuration(e.to_string()))?;
                println!("{}", rendered);
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let path = config_path.unwrap_or_else(Config::config_path);
                Config::default()
                    .save_to(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("✅ Configuration reset successfully!");
            }
            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

fn resolve_format(flag: Option<&str>, config: &Config) -> anyhow::Result<OutputFormat> {
    match flag {
        Some(format) => {
            Ok(cli::parse_output_format(format).map_err(JobMatcherError::InvalidInput)?)
        }
        None => Ok(config.output.format),
    }
}

async fn load_inputs(jobs: &Path, profile: &Path) -> anyhow::Result<(Vec<Job>, UserProfile)> {
    let input_manager = InputManager::new();
    let corpus = input_manager
        .load_jobs(jobs)
        .await
        .with_context(|| format!("loading jobs from {}", jobs.display()))?;
    let profile = input_manager
        .load_profile(profile)
        .await
        .with_context(|| format!("loading profile from {}", profile.display()))?;
    Ok((corpus, profile))
}

async fn build_report(
    config: &Config,
    profile: &UserProfile,
    corpus: Vec<Job>,
    criteria: &MatchingCriteria,
) -> anyhow::Result<RecommendationReport> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Scoring {} jobs...", corpus.len()));

    let started = Instant::now();
    let considered = corpus.len();
    let recommender = Recommender::from_config(config);
    let result = recommender.recommend_concurrent(corpus, criteria).await;
    spinner.finish_and_clear();
    let recommendations = result?;

    let elapsed = started.elapsed().as_millis() as u64;
    info!(
        "Recommended {} of {} jobs in {}ms",
        recommendations.len(),
        considered,
        elapsed
    );

    let name = if profile.name.trim().is_empty() {
        profile.id.clone()
    } else {
        profile.name.clone()
    };
    Ok(RecommendationReport::new(
        name,
        recommendations,
        criteria,
        considered,
        elapsed,
    ))
}
