// ABOUTME: Environment configuration for the history store, logging, and deployment mode
// ABOUTME: Parses environment variables into strongly typed settings with lenient fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! Environment-based configuration
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `ENVIRONMENT` | `development`, `production`, `testing` | `development` |
//! | `FITFLEX_HISTORY_BACKEND` | `file` or `memory` | `file` |
//! | `FITFLEX_DATA_DIR` | directory for the history file | platform data dir + `fitflex` |
//! | `FITFLEX_HISTORY_KEY` | storage key for the history blob | `tvl_history` |

use fitflex_core::constants::storage::{APP_DIR_NAME, FALLBACK_DATA_DIR, HISTORY_KEY};
use fitflex_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Environment variable selecting the history backend
pub const BACKEND_ENV: &str = "FITFLEX_HISTORY_BACKEND";
/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FITFLEX_DATA_DIR";
/// Environment variable overriding the storage key
pub const HISTORY_KEY_ENV: &str = "FITFLEX_HISTORY_KEY";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse a bare level name; anything else, including target directives, is the default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::default(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production install
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the session history is persisted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// JSON file under the data directory
    #[default]
    File,
    /// Process memory only; lost on exit
    Memory,
}

impl FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(AppError::config_invalid(format!(
                "{BACKEND_ENV} must be 'file' or 'memory', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Persistence settings for the workout history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Backend implementation
    pub backend: BackendKind,
    /// Directory holding the history file
    pub data_dir: PathBuf,
    /// Storage key; the file backend appends `.json`
    pub storage_key: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            data_dir: default_data_dir(),
            storage_key: HISTORY_KEY.to_owned(),
        }
    }
}

impl HistoryConfig {
    /// Load history settings from environment
    ///
    /// # Errors
    ///
    /// Returns an error if the backend name is not recognized or the storage
    /// key is blank
    pub fn from_env() -> AppResult<Self> {
        let backend = match env::var(BACKEND_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => BackendKind::default(),
        };
        let data_dir = env::var(DATA_DIR_ENV).map_or_else(|_| default_data_dir(), PathBuf::from);
        let storage_key = env_var_or(HISTORY_KEY_ENV, HISTORY_KEY);
        if storage_key.trim().is_empty() {
            return Err(AppError::config_invalid(format!(
                "{HISTORY_KEY_ENV} must not be empty"
            )));
        }
        Ok(Self {
            backend,
            data_dir,
            storage_key,
        })
    }

    /// In-memory settings for tests and throwaway sessions
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: BackendKind::Memory,
            ..Self::default()
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitflexConfig {
    /// Deployment mode
    pub environment: Environment,
    /// History persistence
    pub history: HistoryConfig,
}

impl FitflexConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable holds an unusable value
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));
        let history = HistoryConfig::from_env()?;

        if environment.is_production() && history.backend == BackendKind::Memory {
            warn!("In-memory history backend selected in production; sessions will not survive restart");
        }

        info!(
            environment = %environment,
            backend = %history.backend,
            data_dir = %history.data_dir.display(),
            "Configuration loaded"
        );

        Ok(Self {
            environment,
            history,
        })
    }
}

/// Platform data directory for the app, or `./data` when there is none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dir| dir.join(APP_DIR_NAME),
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
