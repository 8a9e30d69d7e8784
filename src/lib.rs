//! `SurfCast` - marine forecast scoring and beach recommendation
//!
//! This library fetches hourly wave and wind forecasts for a set of beaches,
//! scores each beach for a given day and recommends the best one.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod survey;
pub mod weather;

// Re-export core types for public API
pub use config::SurfcastConfig;
pub use error::SurfcastError;
pub use models::{Beach, ForecastWindow, HourlySample, ScoreMap};
pub use recommend::choose_best;
pub use report::{OutputFormat, Report};
pub use scoring::compute_score;
pub use survey::{FetchFailure, Survey, SurveyOutcome, run_survey, survey_beaches};
pub use weather::{ForecastProvider, StormglassClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SurfcastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
