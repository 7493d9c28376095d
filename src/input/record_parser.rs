//! Record parsing for the supported input formats

use crate::error::{JobMatcherError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub trait RecordParser {
    /// Parse a collection of records
    fn parse_many<T: DeserializeOwned>(&self, content: &str) -> Result<Vec<T>>;

    /// Parse a single record
    fn parse_one<T: DeserializeOwned>(&self, content: &str) -> Result<T>;
}

/// A JSON array of records, or a single JSON object
pub struct JsonParser;

impl RecordParser for JsonParser {
    fn parse_many<T: DeserializeOwned>(&self, content: &str) -> Result<Vec<T>> {
        Ok(serde_json::from_str(content)?)
    }

    fn parse_one<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        Ok(serde_json::from_str(content)?)
    }
}

/// One JSON object per line; blank lines are ignored
pub struct JsonLinesParser;

impl RecordParser for JsonLinesParser {
    fn parse_many<T: DeserializeOwned>(&self, content: &str) -> Result<Vec<T>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|e| {
                    JobMatcherError::InvalidInput(format!("line {}: {}", idx + 1, e))
                })
            })
            .collect()
    }

    fn parse_one<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        let mut records: Vec<T> = self.parse_many(content)?;
        if records.len() != 1 {
            return Err(JobMatcherError::InvalidInput(format!(
                "expected exactly one record, found {}",
                records.len()
            )));
        }
        Ok(records.remove(0))
    }
}

/// TOML document; collections live under a `[[jobs]]` array of tables
pub struct TomlParser;

#[derive(Deserialize)]
struct TomlJobs<T> {
    #[serde(default = "Vec::new")]
    jobs: Vec<T>,
}

impl RecordParser for TomlParser {
    fn parse_many<T: DeserializeOwned>(&self, content: &str) -> Result<Vec<T>> {
        let wrapper: TomlJobs<T> = toml::from_str(content)?;
        Ok(wrapper.jobs)
    }

    fn parse_one<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        Ok(toml::from_str(content)?)
    }
}
