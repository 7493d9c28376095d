//! Configuration management for the job matcher

use crate::error::{JobMatcherError, Result};
use crate::matching::weights::{
    ScoringWeights, DEFAULT_WEIGHTS, FUZZY_MATCH_CREDIT, FUZZY_MATCH_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Similarity a skill pair must exceed to count as a fuzzy match
    pub fuzzy_threshold: f64,
    /// Credit given to a fuzzy-only skill match
    pub fuzzy_credit: f64,
}

/// Tunables for filtering and ordering recommendations.
///
/// The four weights only feed the priority used for ordering; they never
/// change the underlying fit score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub max_recommendations: usize,
    pub min_match_score: f64,
    pub min_confidence: f64,
    pub diversity_weight: f64,
    pub recency_weight: f64,
    pub salary_match_weight: f64,
    pub location_match_weight: f64,
    /// Scoring workers for concurrent runs; 0 uses every available core
    #[serde(default)]
    pub worker_threads: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            fuzzy_threshold: FUZZY_MATCH_THRESHOLD,
            fuzzy_credit: FUZZY_MATCH_CREDIT,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 20,
            min_match_score: 0.3,
            min_confidence: 0.4,
            diversity_weight: 0.3,
            recency_weight: 0.1,
            salary_match_weight: 0.1,
            location_match_weight: 0.05,
            worker_threads: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            recommendation: RecommendationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RecommendationConfig {
    pub fn validate(&self) -> Result<()> {
        let unit_fields = [
            ("min_match_score", self.min_match_score),
            ("min_confidence", self.min_confidence),
            ("diversity_weight", self.diversity_weight),
            ("recency_weight", self.recency_weight),
            ("salary_match_weight", self.salary_match_weight),
            ("location_match_weight", self.location_match_weight),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(JobMatcherError::Configuration(format!(
                    "recommendation.{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights
            .validate()
            .map_err(|e| JobMatcherError::Configuration(format!("scoring.weights: {}", e)))?;

        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(JobMatcherError::Configuration(format!(
                "scoring.fuzzy_threshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_credit) {
            return Err(JobMatcherError::Configuration(format!(
                "scoring.fuzzy_credit must be within [0, 1], got {}",
                self.fuzzy_credit
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load an explicit configuration file; missing sections take defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            JobMatcherError::Configuration(format!(
                "Failed to parse config {}: {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.recommendation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.recommendation.max_recommendations, 20);
        assert_eq!(config.recommendation.min_match_score, 0.3);
        assert_eq!(config.recommendation.min_confidence, 0.4);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.recommendation.max_recommendations = 5;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[recommendation]
max_recommendations = 3
min_match_score = 0.5
min_confidence = 0.4
diversity_weight = 0.3
recency_weight = 0.1
salary_match_weight = 0.1
location_match_weight = 0.05
"#,
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.recommendation.max_recommendations, 3);
        assert_eq!(loaded.recommendation.worker_threads, 0);
        assert_eq!(loaded.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_unbalanced_weights_fail_validation() {
        let mut config = Config::default();
        config.scoring.weights.industry = 0.5;
        assert!(matches!(
            config.validate(),
            Err(JobMatcherError::Configuration(_))
        ));
    }

    #[test]
    fn test_threshold_out_of_range_fails_validation() {
        let mut config = Config::default();
        config.recommendation.min_confidence = 1.5;
        assert!(config.validate().is_err());
    }
}
