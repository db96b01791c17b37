//! Configuration types for twinseed

use crate::error::{Result, SeedError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the service base URL
pub const ENV_URL: &str = "TWINSEED_URL";
/// Environment variable overriding the request timeout
pub const ENV_TIMEOUT: &str = "TWINSEED_TIMEOUT_SECS";

/// Settings for talking to the ingestion service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedConfig {
    /// Base URL of the ingestion service
    pub base_url: String,

    /// Create-or-replace twins on id collision
    pub upsert: bool,

    /// Per-request timeout
    pub timeout_secs: u64,

    /// Split bulk calls into chunks of this many items
    pub batch_size: Option<usize>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upsert: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            batch_size: None,
        }
    }
}

impl SeedConfig {
    /// Load configuration from a YAML or JSON file
    ///
    /// `.yaml` / `.yml` are parsed as YAML, anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let config: Self = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply `TWINSEED_*` environment overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(
            std::env::var(ENV_URL).ok(),
            std::env::var(ENV_TIMEOUT).ok(),
        )
    }

    fn apply_overrides(&mut self, url: Option<String>, timeout: Option<String>) -> Result<()> {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(timeout) = timeout {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                SeedError::Config(format!("{ENV_TIMEOUT} must be a whole number of seconds, got '{timeout}'"))
            })?;
        }
        self.validate()
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SeedError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SeedError::Config("timeout must be at least 1 second".to_string()));
        }
        if self.batch_size == Some(0) {
            return Err(SeedError::Config("batch size must be at least 1".to_string()));
        }
        Ok(())
    }
}
