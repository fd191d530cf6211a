//! Configuration management for `TripScout` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripScoutError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripScout` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripScoutConfig {
    /// Destination catalog configuration
    pub catalog: CatalogConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default selection settings
    pub defaults: DefaultsConfig,
}

/// Destination catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file; absent means the built-in catalog
    pub path: Option<String>,
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

/// Default selection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Number of destinations to recommend per request
    #[serde(default = "default_result_count")]
    pub result_count: usize,
    /// Surprise tolerance (1-5) used when a profile does not set one
    #[serde(default = "default_surprise_tolerance")]
    pub surprise_tolerance: u8,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_result_count() -> usize {
    8
}

fn default_surprise_tolerance() -> u8 {
    3
}

impl Default for TripScoutConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig { path: None },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            defaults: DefaultsConfig {
                result_count: default_result_count(),
                surprise_tolerance: default_surprise_tolerance(),
            },
        }
    }
}

impl TripScoutConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPSCOUT_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPSCOUT")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripScoutConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripscout").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.result_count == 0 {
            self.defaults.result_count = default_result_count();
        }
        if self.defaults.surprise_tolerance == 0 {
            self.defaults.surprise_tolerance = default_surprise_tolerance();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.defaults.result_count > 50 {
            return Err(TripScoutError::config(
                "Default result count cannot exceed 50",
            )
            .into());
        }

        if !(1..=5).contains(&self.defaults.surprise_tolerance) {
            return Err(TripScoutError::config(
                "Surprise tolerance must be between 1 and 5",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripScoutError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripScoutError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if let Some(path) = &self.catalog.path {
            if path.is_empty() {
                return Err(TripScoutError::config(
                    "Catalog path cannot be empty if provided. Either remove it or provide a valid path.",
                )
                .into());
            }
        }

        Ok(())
    }
}
