//! Configuration management for bodymetrics
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.bodymetrics/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::args::Verbosity;
use crate::errors::{BodyMetricsError, Result};

/// Largest number of decimals accepted for displayed values
pub const MAX_DECIMAL_PLACES: usize = 6;

/// Complete configuration for bodymetrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub decimal_places: usize,
    pub color_output: bool,
    pub show_banner: bool,
}

/// Interactive session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ask "Calculate again?" after each assessment
    pub prompt_retry: bool,
    /// Completed runs kept in memory for /history
    pub max_history: usize,
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub default_verbosity: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            color_output: true,
            show_banner: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt_retry: true,
            max_history: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)
            .map_err(|e| BodyMetricsError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| BodyMetricsError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Standard configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".bodymetrics").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.display.decimal_places > MAX_DECIMAL_PLACES {
            return Err(BodyMetricsError::ConfigError(format!(
                "decimal_places must be at most {}",
                MAX_DECIMAL_PLACES
            )));
        }

        if self.session.max_history == 0 {
            return Err(BodyMetricsError::ConfigError(
                "max_history must be greater than 0".to_string(),
            ));
        }

        if Verbosity::from_name(&self.logging.default_verbosity).is_none() {
            return Err(BodyMetricsError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.logging.default_verbosity
            )));
        }

        Ok(())
    }

    /// Render as TOML for the `config` subcommand
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BodyMetricsError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Verbosity named in the file; falls back to normal
    pub fn default_verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.logging.default_verbosity).unwrap_or(Verbosity::Normal)
    }
}
