//! Solver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How command results are printed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration for the solver binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Output format.
    #[serde(default)]
    format: OutputFormat,

    /// Search options.
    #[serde(default)]
    search: SearchConfig,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            format: OutputFormat::default(),
            search: SearchConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(format = %config.format, pruning = config.search.pruning(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the output format when one is given.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Search options with cutoffs disabled when `no_pruning` is set.
    pub fn search_for(&self, no_pruning: bool) -> SearchConfig {
        if no_pruning {
            SearchConfig::exhaustive()
        } else {
            self.search
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
