//! Typed configuration for the catalog and logging bootstrap.
//!
//! # Responsibility
//! - Carry tunables that hosts may load from JSON/TOML via `serde`.
//! - Reject out-of-range values before they reach the catalog or logger.
//!
//! # Invariants
//! - Missing fields fall back to `Default`.
//! - The library never reads environment variables or files on its own.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Default "more than N articles" cut-off for prolific contributors.
pub const DEFAULT_PROLIFIC_THRESHOLD: usize = 2;
/// Upper bound accepted for `prolific_threshold`.
pub const MAX_PROLIFIC_THRESHOLD: usize = 1000;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ProlificThresholdTooLarge(usize),
    UnsupportedLogLevel(String),
    EmptyLogDir,
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProlificThresholdTooLarge(value) => write!(
                f,
                "prolific_threshold {value} exceeds maximum {MAX_PROLIFIC_THRESHOLD}"
            ),
            Self::UnsupportedLogLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(path) => write!(
                f,
                "log_dir must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Catalog query tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// An author is prolific in a magazine with strictly more articles than this.
    pub prolific_threshold: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            prolific_threshold: DEFAULT_PROLIFIC_THRESHOLD,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prolific_threshold > MAX_PROLIFIC_THRESHOLD {
            return Err(ConfigError::ProlificThresholdTooLarge(
                self.prolific_threshold,
            ));
        }
        Ok(())
    }
}

/// File logging settings consumed by [`init_logging`](crate::init_logging).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: PathBuf::new(),
        }
    }
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Returns the canonical level name.
    pub fn normalized_level(&self) -> Result<&'static str, ConfigError> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok("trace"),
            "debug" => Ok("debug"),
            "info" => Ok("info"),
            "warn" | "warning" => Ok("warn"),
            "error" => Ok("error"),
            other => Err(ConfigError::UnsupportedLogLevel(other.to_string())),
        }
    }

    /// Returns the trimmed, absolute log directory.
    pub fn validated_log_dir(&self) -> Result<PathBuf, ConfigError> {
        let log_dir = match self.log_dir.to_str() {
            Some(raw) => PathBuf::from(raw.trim()),
            None => self.log_dir.clone(),
        };
        if log_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyLogDir);
        }
        if !log_dir.is_absolute() {
            return Err(ConfigError::RelativeLogDir(log_dir));
        }
        Ok(log_dir)
    }
}
