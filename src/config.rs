//! Configuration for the validator.
//!
//! Supports both environment variables and YAML config file.
//! Environment variables take precedence over config file values.

use crate::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::path::PathBuf;

/// Judge model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL for the OpenAI-compatible API (e.g., "http://localhost:11434")
    pub api_base: String,

    /// API key for authentication; local servers usually need none
    #[serde(default)]
    pub api_key: String,

    /// Model name (e.g., "llama3.1:8b")
    pub model: String,

    /// Maximum tokens for response (optional)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for generation (optional)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_temperature() -> f32 {
    0.0
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:11434".to_string(),
            api_key: String::new(),
            model: "llama3.1:8b".to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Retrieval endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// URL that accepts `{"question": ...}` and returns the RAG answer
    pub endpoint: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/query".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Judge model settings
    pub llm: LlmConfig,
    /// RAG endpoint settings
    pub retrieval: RetrievalConfig,
    /// Log settings
    pub logging: LoggingConfig,
}

/// Configuration file structure (YAML format).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    llm: Option<LlmFileSection>,
    retrieval: Option<RetrievalFileSection>,
    logging: Option<LoggingFileSection>,
}

#[derive(Debug, Deserialize)]
struct LlmFileSection {
    api_base: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct RetrievalFileSection {
    endpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoggingFileSection {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl Config {
    /// Load configuration from environment variables and optional config file.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (LLM_API_BASE, LLM_MODEL, RAG_ENDPOINT, ...)
    /// 2. Config file (~/.config/rag-validator/config.yaml)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                config = Self::load_from_file(&config_path)?;
            }
        }

        config.apply_env(|key| env::var(key).ok());

        Ok(config)
    }

    /// Override values from an environment lookup.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(api_base) = var("LLM_API_BASE") {
            self.llm.api_base = api_base;
        }

        if let Some(api_key) = var("LLM_API_KEY") {
            self.llm.api_key = api_key;
        }

        if let Some(model) = var("LLM_MODEL") {
            self.llm.model = model;
        }

        if let Some(max_tokens) = var("LLM_MAX_TOKENS") {
            if let Ok(tokens) = max_tokens.parse() {
                self.llm.max_tokens = tokens;
            }
        }

        if let Some(temperature) = var("LLM_TEMPERATURE") {
            if let Ok(temp) = temperature.parse() {
                self.llm.temperature = temp;
            }
        }

        if let Some(endpoint) = var("RAG_ENDPOINT") {
            self.retrieval.endpoint = endpoint;
        }

        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = var("LOG_FORMAT").as_deref().and_then(LogFormat::parse) {
            self.logging.format = format;
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ValidatorError::io(path, e))?;

        let file_config: ConfigFile = serde_yaml::from_str(&content)
            .map_err(|e| ValidatorError::Config(format!("Failed to parse config file: {}", e)))?;

        let mut config = Config::default();

        if let Some(llm) = file_config.llm {
            if let Some(api_base) = llm.api_base {
                config.llm.api_base = api_base;
            }
            if let Some(api_key) = llm.api_key {
                config.llm.api_key = api_key;
            }
            if let Some(model) = llm.model {
                config.llm.model = model;
            }
            if let Some(max_tokens) = llm.max_tokens {
                config.llm.max_tokens = max_tokens;
            }
            if let Some(temperature) = llm.temperature {
                config.llm.temperature = temperature;
            }
        }

        if let Some(endpoint) = file_config.retrieval.and_then(|r| r.endpoint) {
            config.retrieval.endpoint = endpoint;
        }

        if let Some(logging) = file_config.logging {
            if let Some(level) = logging.level {
                config.logging.level = level;
            }
            if let Some(format) = logging.format {
                config.logging.format = format;
            }
        }

        Ok(config)
    }

    /// Get the default config file path.
    pub fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "rag-validator")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Validate that required configuration is present.
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_base.is_empty() {
            return Err(ValidatorError::Config(
                "LLM API base URL is required. Set LLM_API_BASE environment variable or add to config file.".to_string()
            ));
        }

        if self.llm.model.is_empty() {
            return Err(ValidatorError::Config(
                "LLM model is required. Set LLM_MODEL environment variable or add to config file."
                    .to_string(),
            ));
        }

        if self.retrieval.endpoint.is_empty() {
            return Err(ValidatorError::Config(
                "RAG endpoint is required. Set RAG_ENDPOINT environment variable or add to config file."
                    .to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.api_base, "http://localhost:11434");
        assert!(config.llm.api_key.is_empty());
        assert_eq!(config.llm.model, "llama3.1:8b");
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(config.llm.temperature, 0.0);
        assert_eq!(config.retrieval.endpoint, "http://localhost:8000/query");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_fails_without_required_fields() {
        let mut config = Config::default();
        config.llm.model.clear();
        assert!(matches!(config.validate(), Err(ValidatorError::Config(_))));

        let mut config = Config::default();
        config.retrieval.endpoint.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "llm:\n  model: mistral\n  temperature: 0.2\nretrieval:\n  endpoint: http://rag:9000/ask\nlogging:\n  format: json"
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.llm.model, "mistral");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.llm.api_base, "http://localhost:11434");
        assert_eq!(config.retrieval.endpoint, "http://rag:9000/ask");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file_rejects_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "llm: [not, a, map").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ValidatorError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load_from_file(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, ValidatorError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("LLM_MODEL", "llama3.2"),
            ("LLM_MAX_TOKENS", "not-a-number"),
            ("RAG_ENDPOINT", "http://other/query"),
            ("LOG_FORMAT", "JSON"),
        ]);

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.llm.model, "llama3.2");
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(config.retrieval.endpoint, "http://other/query");
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
