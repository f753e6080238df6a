use std::fs;
use std::path::{Path, PathBuf};

use jiff::civil::Date;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    ValidationError { message: String },

    #[error("invalid initial date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/datespin/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if no config directory is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("datespin").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. Unlike [`load`], a
    /// missing file is an error here: the caller asked for it by name.
    ///
    /// [`load`]: Config::load
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration against the selectable year ceiling
    /// (the current year + 1, supplied by the caller's clock).
    pub fn validate(&self, max_year: i32) -> Result<(), ConfigError> {
        if self.min_year > max_year {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "min_year {} exceeds the selectable ceiling {}",
                    self.min_year, max_year
                ),
            });
        }
        Ok(())
    }

    /// Parses the configured initial date, if any.
    pub fn initial_date(&self) -> Result<Option<Date>, ConfigError> {
        match &self.initial {
            None => Ok(None),
            Some(value) => value
                .parse::<Date>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidDate {
                    value: value.clone(),
                    source: e,
                }),
        }
    }
}
