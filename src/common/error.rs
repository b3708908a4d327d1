//! Error types for the contract runner
//!
//! Assertion failures and infrastructure failures are kept apart: the former
//! are a verdict about the remote service, the latter mean the case could not
//! be judged at all.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the contract runner
#[derive(Error, Debug)]
pub enum Error {
    // === Assertion Errors ===
    #[error("{test}: assertion failed: {condition} ({detail})")]
    AssertionFailed {
        test: String,
        condition: String,
        detail: String,
    },

    #[error("{failed} failed and {errored} errored out of {total} cases")]
    SuiteFailed {
        total: usize,
        failed: usize,
        errored: usize,
    },

    // === Infrastructure Errors ===
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid target URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // === Result Log Errors ===
    #[error("Failed to append to result log '{path}': {error}")]
    ResultLog { path: String, error: String },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an assertion failure for a named test and condition
    pub fn assertion_failed(test: &str, condition: &str, detail: &str) -> Self {
        Self::AssertionFailed {
            test: test.to_string(),
            condition: condition.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: &str, reason: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error is a failed predicate rather than an infrastructure problem
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }
}
