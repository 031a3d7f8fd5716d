//! Front-end configuration.

use super::presentation::{Accent, Theme};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Colour of X, as `#rrggbb`.
    #[serde(default = "default_x_accent")]
    x_accent: String,

    /// Colour of O, as `#rrggbb`.
    #[serde(default = "default_o_accent")]
    o_accent: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_accent() -> String {
    Theme::default().x.to_string()
}

fn default_o_accent() -> String {
    Theme::default().o.to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            x_accent: default_x_accent(),
            o_accent: default_o_accent(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme()?;
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Builds the colour theme.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let parse = |value: &str, name: &str| {
            Accent::from_hex(value).map_err(|e| ConfigError::new(format!("{}: {}", name, e)))
        };
        Ok(Theme {
            x: parse(&self.x_accent, "x_accent")?,
            o: parse(&self.o_accent, "o_accent")?,
            ..Theme::default()
        })
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
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TuiConfig::from_toml("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_override() {
        let config = TuiConfig::from_toml("log_filter = \"debug\"\nx_accent = \"#ff0000\"\n").unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.theme().unwrap().x, Accent { r: 255, g: 0, b: 0 });
        assert_eq!(config.o_accent(), &default_o_accent());
    }

    #[test]
    fn test_bad_colour_rejected() {
        let err = TuiConfig::from_toml("o_accent = \"pink\"").unwrap_err();
        assert!(err.message.contains("o_accent"));

        let err = TuiConfig::from_toml("x_accent = \"#+f+f+f\"").unwrap_err();
        assert!(err.message.contains("x_accent"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_file = \"game.log\"").unwrap();
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }
}
