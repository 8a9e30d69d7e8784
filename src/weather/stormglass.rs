//! Stormglass marine weather client
//!
//! Fetches hourly wave height and wind speed for a single point from the
//! Stormglass `weather/point` endpoint. One request per beach and day, no
//! retries.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::{ForecastProvider, day_bounds};
use crate::config::{API_KEY_ENV, StormglassConfig};
use crate::models::{Beach, ForecastWindow, HourlySample};
use crate::{Result, SurfcastError};

/// Parameters requested from Stormglass
pub const PARAM_LIST: [&str; 2] = ["waveHeight", "windSpeed"];

/// Stormglass point-forecast client
pub struct StormglassClient {
    client: Client,
    api_key: String,
    base_url: String,
    source: String,
    timeout: Duration,
}

impl StormglassClient {
    /// Create a new client.
    ///
    /// Fails with a configuration error when no API key is configured.
    pub fn new(config: &StormglassConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SurfcastError::config(format!(
                    "Stormglass API key is not set. Set {API_KEY_ENV} in a .env file or environment variable"
                ))
            })?;

        let timeout = Duration::from_secs(config.timeout_seconds.into());
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("SurfCast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SurfcastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            source: config.source.clone(),
            timeout,
        })
    }

    /// Data source whose values are read from each hour
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn send(&self, beach: &Beach, date: NaiveDate) -> Result<StormglassResponse> {
        let query = query_params(beach, date);
        debug!("Stormglass request: {} {:?}", self.base_url, query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .header(AUTHORIZATION, self.api_key.as_str())
            .send()
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("request timed out after {}s", self.timeout.as_secs())
                } else {
                    format!("request failed: {e}")
                };
                SurfcastError::fetch(&beach.name, message)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    format!("{status}: invalid or missing Stormglass API key")
                }
                StatusCode::PAYMENT_REQUIRED | StatusCode::TOO_MANY_REQUESTS => {
                    format!("{status}: Stormglass request quota exceeded")
                }
                _ => format!("{status}: {body}"),
            };
            return Err(SurfcastError::fetch(&beach.name, message));
        }

        response.json().map_err(|e| {
            SurfcastError::fetch(&beach.name, format!("invalid forecast response: {e}"))
        })
    }
}

impl ForecastProvider for StormglassClient {
    #[instrument(skip(self, beach), fields(beach = %beach.name))]
    fn fetch_window(&self, beach: &Beach, date: NaiveDate) -> Result<ForecastWindow> {
        info!(
            "Fetching forecast for {} ({})",
            beach.name,
            beach.format_coordinates()
        );
        let start_time = Instant::now();

        let response = self.send(beach, date)?;
        let window = response.into_window(beach, date, &self.source);

        let total_duration = start_time.elapsed();
        info!(
            "Retrieved {} hourly samples in {:.3}s",
            window.samples.len(),
            total_duration.as_secs_f64()
        );
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow forecast API response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(window)
    }
}

/// Query string for one beach and one UTC day
#[must_use]
pub fn query_params(beach: &Beach, date: NaiveDate) -> Vec<(&'static str, String)> {
    let (start, end) = day_bounds(date);
    vec![
        ("lat", beach.latitude.to_string()),
        ("lng", beach.longitude.to_string()),
        ("params", PARAM_LIST.join(",")),
        ("start", start.to_string()),
        ("end", end.to_string()),
    ]
}

/// Body of a Stormglass `weather/point` response
#[derive(Debug, Deserialize)]
pub struct StormglassResponse {
    #[serde(default)]
    pub hours: Vec<StormglassHour>,
}

/// One hour of a Stormglass response; values are keyed by data source and may be null
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormglassHour {
    pub time: Option<DateTime<Utc>>,
    pub wave_height: Option<HashMap<String, Option<f64>>>,
    pub wind_speed: Option<HashMap<String, Option<f64>>>,
}

fn source_value(by_source: Option<&HashMap<String, Option<f64>>>, source: &str) -> Option<f64> {
    by_source.and_then(|values| values.get(source).copied().flatten())
}

impl StormglassHour {
    fn to_sample(&self, source: &str) -> HourlySample {
        HourlySample {
            timestamp: self.time,
            wave_height_m: source_value(self.wave_height.as_ref(), source),
            wind_speed_ms: source_value(self.wind_speed.as_ref(), source),
        }
    }
}

impl StormglassResponse {
    /// Keep only values from `source`; hours lacking it contribute nothing for that field
    #[must_use]
    pub fn into_window(self, beach: &Beach, date: NaiveDate, source: &str) -> ForecastWindow {
        let samples = self
            .hours
            .iter()
            .map(|hour| hour.to_sample(source))
            .collect();
        ForecastWindow::new(beach.name.clone(), date, samples)
    }
}
