// Rust guideline compliant 2026-10-19

//! Configuration management for flashcards sessions.

use crate::transcript::DEFAULT_INPUT_MARKER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "flashcards.toml";

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for a flashcards session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Card file imported when the session starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_from: Option<PathBuf>,

    /// Card file written when the session ends normally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_to: Option<PathBuf>,

    /// Maximum diagnostics level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Diagnostics log file. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Whether console output may be coloured.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Prefix for user-supplied lines in the transcript.
    #[serde(default = "default_input_marker")]
    pub input_marker: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    true
}

fn default_input_marker() -> String {
    DEFAULT_INPUT_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import_from: None,
            export_to: None,
            log_level: default_log_level(),
            log_file: None,
            color: default_color(),
            input_marker: default_input_marker(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `FLASHCARDS_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - An environment variable or the final values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `FLASHCARDS_IMPORT_FROM` - Card file to import at startup
    /// - `FLASHCARDS_EXPORT_TO` - Card file to export at exit
    /// - `FLASHCARDS_LOG_LEVEL` - error/warn/info/debug/trace
    /// - `FLASHCARDS_LOG_FILE` - Diagnostics log file
    /// - `FLASHCARDS_COLOR` - Coloured output (true/false)
    /// - `FLASHCARDS_INPUT_MARKER` - Transcript prefix for input lines
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FLASHCARDS_IMPORT_FROM") {
            self.import_from = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("FLASHCARDS_EXPORT_TO") {
            self.export_to = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("FLASHCARDS_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("FLASHCARDS_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("FLASHCARDS_COLOR") {
            self.color = val.parse().map_err(|_| {
                Error::InvalidConfig("FLASHCARDS_COLOR must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FLASHCARDS_INPUT_MARKER") {
            self.input_marker = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_level` is not one of [`LOG_LEVELS`]
    /// - `input_marker` is empty
    pub fn validate(&self) -> Result<()> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join("/"),
                self.log_level
            )));
        }

        if self.input_marker.is_empty() {
            return Err(Error::InvalidConfig(
                "input_marker cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
