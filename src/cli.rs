//! CLI interface for the job matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Rank job postings against a candidate profile")]
#[command(long_about = "Score a job corpus against a candidate profile using weighted multi-factor matching, then classify, prioritise and diversify the results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend jobs for a profile
    Recommend {
        /// Path to the job corpus (JSON array, JSONL)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Path to the candidate profile (JSON, TOML)
        #[arg(short, long)]
        profile: PathBuf,

        /// Maximum number of recommendations
        #[arg(short, long)]
        max: Option<usize>,

        /// Minimum fit score (0-1)
        #[arg(long)]
        min_score: Option<f64>,

        /// Minimum confidence (0-1)
        #[arg(long)]
        min_confidence: Option<f64>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show reasons, improvements and scenario views
        #[arg(short, long)]
        detailed: bool,

        /// Only consider remote postings
        #[arg(long)]
        remote_only: bool,
    },

    /// Score a single job and show the breakdown
    Match {
        #[arg(short, long)]
        jobs: PathBuf,

        #[arg(short, long)]
        profile: PathBuf,

        /// Identifier of the job to score
        #[arg(long)]
        job_id: String,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show insights and scenario views for a profile
    Insights {
        #[arg(short, long)]
        jobs: PathBuf,

        #[arg(short, long)]
        profile: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate a score threshold given on the command line
pub fn parse_unit_interval(name: &str, value: f64) -> Result<f64, String> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} must be between 0 and 1, got {}", name, value))
    }
}
