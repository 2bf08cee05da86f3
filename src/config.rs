//! Session settings loaded from TOML.

use crate::games::tictactoe::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// ```toml
/// mode = "single"
/// computer_delay_ms = 500
/// log_file = "tictactoe.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Mode the session starts in.
    #[serde(default)]
    mode: Mode,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// File that receives logs while the terminal UI is running.
    #[serde(default = "default_log_file")]
    #[setters(into)]
    log_file: PathBuf,
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            computer_delay_ms: default_computer_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(mode = %settings.mode, delay_ms = settings.computer_delay_ms, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or returns defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No settings file, using defaults");
            Ok(Self::default())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(*settings.mode(), Mode::SinglePlayer);
        assert_eq!(*settings.computer_delay_ms(), 500);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings = Settings::from_toml("mode = \"two\"\ncomputer_delay_ms = 0\n").unwrap();
        assert_eq!(*settings.mode(), Mode::TwoPlayer);
        assert_eq!(*settings.computer_delay_ms(), 0);
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = Settings::from_toml("mode = \"versus\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_chain() {
        let settings = Settings::default()
            .with_mode(Mode::TwoPlayer)
            .with_log_file("other.log");
        assert_eq!(*settings.mode(), Mode::TwoPlayer);
        assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
    }
}
