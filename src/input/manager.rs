//! Input manager for loading job corpora and profiles from disk

use crate::error::{JobMatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::record_parser::{JsonLinesParser, JsonParser, RecordParser, TomlParser};
use crate::models::{Job, UserProfile};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Load a job corpus. An empty corpus is rejected here, at the boundary.
    pub async fn load_jobs(&self, path: &Path) -> Result<Vec<Job>> {
        let file_type = self.detect_file_type(path)?;
        let content = self.read(path).await?;
        let jobs: Vec<Job> = match file_type {
            FileType::JsonLines => JsonLinesParser.parse_many(&content)?,
            FileType::Toml => TomlParser.parse_many(&content)?,
            FileType::Json | FileType::Unknown => JsonParser.parse_many(&content)?,
        };

        if jobs.is_empty() {
            return Err(JobMatcherError::EmptyCorpus);
        }

        info!("Loaded {} jobs from {}", jobs.len(), path.display());
        Ok(jobs)
    }

    pub async fn load_profile(&self, path: &Path) -> Result<UserProfile> {
        let file_type = self.detect_file_type(path)?;
        let content = self.read(path).await?;
        let profile: UserProfile = parse_one(file_type, &content)?;
        debug!(
            "Loaded profile '{}' with {} skills",
            profile.name,
            profile.skills.len()
        );
        Ok(profile)
    }

    async fn read(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(JobMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        Ok(fs::read_to_string(path).await?)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        match FileType::from_path(path) {
            FileType::Unknown => Err(JobMatcherError::UnsupportedFormat(format!(
                "Unsupported file type for: {} (expected .json, .jsonl, .ndjson or .toml)",
                path.display()
            ))),
            file_type => Ok(file_type),
        }
    }
}

fn parse_one<T: DeserializeOwned>(file_type: FileType, content: &str) -> Result<T> {
    match file_type {
        FileType::JsonLines => JsonLinesParser.parse_one(content),
        FileType::Toml => TomlParser.parse_one(content),
        FileType::Json | FileType::Unknown => JsonParser.parse_one(content),
    }
}
