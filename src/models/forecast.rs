//! Hourly marine samples and the one-day window they are scored over

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One hour of marine forecast data
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct HourlySample {
    /// Start of the hour, when the provider reports it
    pub timestamp: Option<DateTime<Utc>>,
    /// Significant wave height in meters
    pub wave_height_m: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed_ms: Option<f64>,
}

impl HourlySample {
    #[must_use]
    pub fn new(wave_height_m: Option<f64>, wind_speed_ms: Option<f64>) -> Self {
        Self {
            timestamp: None,
            wave_height_m,
            wind_speed_ms,
        }
    }
}

/// Hourly samples covering one UTC calendar day at one beach
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ForecastWindow {
    /// Name of the beach this window belongs to
    pub beach: String,
    /// Day the window covers
    pub date: NaiveDate,
    /// Samples in provider order
    pub samples: Vec<HourlySample>,
}

impl ForecastWindow {
    #[must_use]
    pub fn new<S: Into<String>>(beach: S, date: NaiveDate, samples: Vec<HourlySample>) -> Self {
        Self {
            beach: beach.into(),
            date,
            samples,
        }
    }

    /// Wave heights present in the window, skipping hours without one
    pub fn wave_heights(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(|s| s.wave_height_m)
    }

    /// Wind speeds present in the window, skipping hours without one
    pub fn wind_speeds(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(|s| s.wind_speed_ms)
    }
}
