//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::Result;

/// Public JSONPlaceholder instance the suite was written against
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the posts service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// CSV file that receives one row per executed case
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,

    /// Upper bound for the response-time case, in milliseconds
    #[serde(default = "default_elapsed_budget")]
    pub elapsed_budget_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            results_path: default_results_path(),
            elapsed_budget_ms: default_elapsed_budget(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_results_path() -> PathBuf {
    PathBuf::from("results.csv")
}

fn default_elapsed_budget() -> u64 {
    400
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}
