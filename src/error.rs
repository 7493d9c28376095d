//! Error handling for the job matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid job '{id}': {reason}")]
    InvalidJob { id: String, reason: String },

    #[error("Invalid matching criteria: {0}")]
    InvalidCriteria(String),

    #[error("Job corpus is empty")]
    EmptyCorpus,

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Scoring worker failed: {0}")]
    Worker(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for JobMatcherError {
    fn from(err: anyhow::Error) -> Self {
        JobMatcherError::InvalidInput(err.to_string())
    }
}

/// A panicked or cancelled scoring task surfaces as a worker error
impl From<tokio::task::JoinError> for JobMatcherError {
    fn from(err: tokio::task::JoinError) -> Self {
        JobMatcherError::Worker(err.to_string())
    }
}
