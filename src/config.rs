//! Configuration management for the `SurfCast` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::SurfcastError;
use crate::models::{Beach, default_beaches};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Environment variable holding the Stormglass credential
pub const API_KEY_ENV: &str = "STORMGLASS_API_KEY";

/// Root configuration structure for the `SurfCast` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfcastConfig {
    /// Stormglass API configuration
    #[serde(default)]
    pub stormglass: StormglassConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Beaches to score, in reporting order
    #[serde(default = "default_beaches")]
    pub beaches: Vec<Beach>,
}

/// Stormglass API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormglassConfig {
    /// API key sent in the `Authorization` header
    pub api_key: Option<String>,
    /// Point forecast endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Data source whose values are scored (e.g. "noaa", "sg")
    #[serde(default = "default_source")]
    pub source: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.stormglass.io/v2/weather/point".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_source() -> String {
    "noaa".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for StormglassConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            source: default_source(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for SurfcastConfig {
    fn default() -> Self {
        Self {
            stormglass: StormglassConfig::default(),
            logging: LoggingConfig::default(),
            beaches: default_beaches(),
        }
    }
}

impl SurfcastConfig {
    /// Load configuration from the given file, or the default locations when `None`,
    /// with environment variable overrides applied on top
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        match config_path {
            // An explicitly requested file has to exist
            Some(path) => {
                builder = builder.add_source(
                    File::from(path)
                        .required(true)
                        .format(config::FileFormat::Toml),
                );
            }
            None => {
                let config_file = Self::get_config_path()
                    .filter(|path| path.exists())
                    .unwrap_or_else(|| PathBuf::from("config.toml"));
                builder = builder.add_source(
                    File::from(config_file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        // Environment overrides, e.g. SURFCAST_STORMGLASS__TIMEOUT_SECONDS=30
        builder = builder.add_source(
            Environment::with_prefix("SURFCAST")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SurfcastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.stormglass.api_key.is_none() {
            config.stormglass.api_key = std::env::var(API_KEY_ENV).ok();
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("surfcast").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.stormglass.base_url.is_empty() {
            self.stormglass.base_url = default_base_url();
        }
        if self.stormglass.timeout_seconds == 0 {
            self.stormglass.timeout_seconds = default_timeout();
        }
        if self.stormglass.source.is_empty() {
            self.stormglass.source = default_source();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_beaches()?;
        Ok(())
    }

    /// Reject an API key that is present but blank
    fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.stormglass.api_key {
            if api_key.trim().is_empty() {
                return Err(SurfcastError::config(
                    "Stormglass API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.stormglass.timeout_seconds > 300 {
            return Err(
                SurfcastError::config("Stormglass API timeout cannot exceed 300 seconds").into(),
            );
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SurfcastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SurfcastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.stormglass.base_url.starts_with("http://")
            && !self.stormglass.base_url.starts_with("https://")
        {
            return Err(SurfcastError::config(
                "Stormglass base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    fn validate_beaches(&self) -> Result<()> {
        if self.beaches.is_empty() {
            return Err(SurfcastError::config("At least one beach must be configured").into());
        }

        let mut seen = HashSet::new();
        for beach in &self.beaches {
            if beach.name.trim().is_empty() {
                return Err(SurfcastError::config("Beach names cannot be empty").into());
            }
            if !seen.insert(beach.name.as_str()) {
                return Err(SurfcastError::config(format!(
                    "Duplicate beach name '{}'",
                    beach.name
                ))
                .into());
            }
            if !beach.has_valid_coordinates() {
                return Err(SurfcastError::config(format!(
                    "Beach '{}' has out-of-range coordinates ({})",
                    beach.name,
                    beach.format_coordinates()
                ))
                .into());
            }
        }

        Ok(())
    }
}
