//! Error types and handling for the `SurfCast` application

use thiserror::Error;

/// Main error type for the `SurfCast` application
#[derive(Error, Debug)]
pub enum SurfcastError {
    /// Configuration-related errors, including a missing API credential
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Forecast retrieval failed for a single beach
    #[error("Fetch error for {beach}: {message}")]
    Fetch { beach: String, message: String },

    /// No beach could be scored
    #[error("Failed to retrieve any forecasts")]
    NoData,

    /// A recommendation was requested from an empty score map
    #[error("Cannot choose a beach from an empty score map")]
    EmptyInput,
}

impl SurfcastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error for the named beach
    pub fn fetch<B: Into<String>, S: Into<String>>(beach: B, message: S) -> Self {
        Self::Fetch {
            beach: beach.into(),
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SurfcastError::Config { message } => format!("Configuration error: {message}"),
            SurfcastError::Fetch { beach, message } => {
                format!("Error fetching {beach}: {message}")
            }
            SurfcastError::NoData => "Failed to retrieve any forecasts.".to_string(),
            SurfcastError::EmptyInput => {
                "No scores available to choose a beach from.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SurfcastError::config("missing API key");
        assert!(matches!(config_err, SurfcastError::Config { .. }));

        let fetch_err = SurfcastError::fetch("Iguape", "connection refused");
        assert!(matches!(fetch_err, SurfcastError::Fetch { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = SurfcastError::config("bad timeout");
        assert_eq!(config_err.user_message(), "Configuration error: bad timeout");

        let fetch_err = SurfcastError::fetch("Paracuru", "HTTP 500");
        assert_eq!(fetch_err.user_message(), "Error fetching Paracuru: HTTP 500");

        assert_eq!(
            SurfcastError::NoData.user_message(),
            "Failed to retrieve any forecasts."
        );
    }

    #[test]
    fn test_display_includes_beach() {
        let err = SurfcastError::fetch("Taíba", "timed out");
        assert_eq!(err.to_string(), "Fetch error for Taíba: timed out");
    }
}
