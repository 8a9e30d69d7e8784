//! Data models for the SurfCast application
//!
//! This module contains the core domain models organized by concern:
//! - Beach: Named surf spots and their coordinates
//! - Forecast: Hourly marine samples grouped into one-day windows
//! - Score: Per-beach suitability scores

pub mod beach;
pub mod forecast;
pub mod score;

// Re-export all public types for convenient access
pub use beach::{Beach, default_beaches};
pub use forecast::{ForecastWindow, HourlySample};
pub use score::ScoreMap;
