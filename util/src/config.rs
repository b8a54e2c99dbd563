//! Application configuration.
//!
//! `AppConfig` holds every runtime setting of the feedback generator. It is
//! built once at start-up (from `.env` and the process environment) and then
//! passed by reference to whatever needs it, so tests can construct their own
//! values without touching process state.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SUFFIX: &str = ".c";
pub const DEFAULT_OUTPUT_FILE: &str = "LLM_Feedbacks.csv";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors raised while assembling the configuration. All of them are fatal at start-up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Represents the complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Credential for the Gemini API.
    pub gemini_api_key: String,
    /// Model identifier, e.g. `gemini-2.0-flash`.
    pub gemini_model: String,
    /// Base URL of the Generative Language REST API (no trailing slash).
    pub gemini_base_url: String,
    /// Optional thinking budget; omitted from requests when `None`.
    pub gemini_thinking_budget: Option<u32>,
    /// Filename suffix selecting which entries of the folder are submissions.
    pub file_suffix: String,
    /// Where the CSV report is written.
    pub output_file: PathBuf,
    /// `EnvFilter` directive used when `LOG_LEVEL` is not set.
    pub log_level: String,
    /// File name for the rolling log under `logs/`; no file logging when `None`.
    pub log_file: Option<String>,
}

impl AppConfig {
    /// Creates a configuration with the given credential and defaults for everything else.
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_model: DEFAULT_MODEL.into(),
            gemini_base_url: DEFAULT_BASE_URL.into(),
            gemini_thinking_budget: None,
            file_suffix: DEFAULT_SUFFIX.into(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: DEFAULT_LOG_LEVEL.into(),
            log_file: None,
        }
    }

    /// Loads the configuration from `.env` and environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when `GEMINI_API_KEY` is absent or blank,
    /// and [`ConfigError::InvalidVar`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("GEMINI_API_KEY").ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;
        let mut cfg = AppConfig::new(api_key);

        if let Some(model) = var("GEMINI_MODEL") {
            cfg.gemini_model = model;
        }
        if let Some(url) = var("GEMINI_BASE_URL") {
            cfg.gemini_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(budget) = var("GEMINI_THINKING_BUDGET") {
            let parsed = budget
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar {
                    name: "GEMINI_THINKING_BUDGET",
                    value: budget.clone(),
                })?;
            cfg.gemini_thinking_budget = Some(parsed);
        }
        if let Some(suffix) = var("FEEDBACK_FILE_SUFFIX") {
            cfg.file_suffix = suffix;
        }
        if let Some(output) = var("FEEDBACK_OUTPUT") {
            cfg.output_file = PathBuf::from(output);
        }
        if let Some(level) = var("LOG_LEVEL") {
            cfg.log_level = level;
        }
        cfg.log_file = var("LOG_FILE");

        Ok(cfg)
    }

    // --- Builder-style overrides ---

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.gemini_model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_thinking_budget(mut self, budget: Option<u32>) -> Self {
        self.gemini_thinking_budget = budget;
        self
    }

    pub fn with_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }
}
