//! Error types and handling for `TripScout` application

use thiserror::Error;

/// Main error type for the `TripScout` application
#[derive(Error, Debug)]
pub enum TripScoutError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Destination catalog loading errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripScoutError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripScoutError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripScoutError::Catalog { .. } => {
                "Unable to load the destination catalog. Please check the catalog file."
                    .to_string()
            }
            TripScoutError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripScoutError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripScoutError::General { message } => message.clone(),
        }
    }
}
