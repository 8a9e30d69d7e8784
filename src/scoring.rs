//! Beach suitability scoring
//!
//! Each hour's wave height and wind speed is mapped onto a 0-1 desirability
//! value. The two averages are blended 60/40 and scaled to a 0-10 score.

use crate::models::ForecastWindow;

/// Wave height in meters that scores best
pub const IDEAL_WAVE_HEIGHT_M: f64 = 1.0;
/// Wind speed in m/s at which wind desirability reaches zero
pub const MAX_WIND_SPEED_MS: f64 = 12.0;
/// Share of the final score contributed by waves
pub const WAVE_WEIGHT: f64 = 0.6;
/// Share of the final score contributed by wind
pub const WIND_WEIGHT: f64 = 0.4;
/// Upper bound of the score scale
pub const MAX_SCORE: f64 = 10.0;

/// Desirability of a single wave height: 1 at the ideal height, 0 at one meter away or more
#[must_use]
pub fn wave_desirability(height_m: f64) -> f64 {
    (1.0 - (height_m - IDEAL_WAVE_HEIGHT_M).abs()).max(0.0)
}

/// Desirability of a single wind speed: 1 in calm air, 0 at or above 12 m/s.
///
/// Negative speeds are treated as calm.
#[must_use]
pub fn wind_desirability(speed_ms: f64) -> f64 {
    (1.0 - speed_ms / MAX_WIND_SPEED_MS).clamp(0.0, 1.0)
}

/// Score a forecast window on a 0-10 scale, rounded to two decimals.
///
/// Returns 0.0 when the window has no wave samples or no wind samples.
#[must_use]
pub fn compute_score(window: &ForecastWindow) -> f64 {
    let (Some(wave_score), Some(wind_score)) = (
        mean(window.wave_heights().map(wave_desirability)),
        mean(window.wind_speeds().map(wind_desirability)),
    ) else {
        return 0.0;
    };

    let blended = (WAVE_WEIGHT * wave_score + WIND_WEIGHT * wind_score) * MAX_SCORE;
    round_to_hundredths(blended.clamp(0.0, MAX_SCORE))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
