//! Error types for the validator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom error.
pub type Result<T> = std::result::Result<T, ValidatorError>;

/// Errors that can occur while validating a RAG pipeline.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Error reading a file.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file error or missing setting.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The retrieval endpoint failed or returned an unusable answer.
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// LLM API error.
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// LLM response parsing error.
    #[error("Failed to parse LLM response: {0}")]
    LlmParse(String),

    /// HTTP request error.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The judge reply contained neither "true" nor "false".
    #[error("Invalid evaluation result. Cannot determine if 'true' or 'false' from response: {response:?}")]
    IndeterminateJudgement { response: String },

    /// A scenario's answer was judged not to match.
    #[error("Scenario '{scenario}' failed: actual response does not match the expected response")]
    AssertionFailed { scenario: String },

    /// No scenario with the requested name.
    #[error("Unknown scenario '{0}'")]
    UnknownScenario(String),
}

impl ValidatorError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for ValidatorError {
    fn from(err: reqwest::Error) -> Self {
        ValidatorError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ValidatorError {
    fn from(err: serde_json::Error) -> Self {
        ValidatorError::LlmParse(err.to_string())
    }
}
