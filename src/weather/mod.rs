use chrono::{NaiveDate, NaiveTime};

use crate::Result;
use crate::models::{Beach, ForecastWindow};

pub mod stormglass;

pub use stormglass::StormglassClient;

/// Source of hourly marine forecasts
pub trait ForecastProvider {
    /// Fetch the hourly samples covering `date` (00:00-24:00 UTC) at `beach`
    fn fetch_window(&self, beach: &Beach, date: NaiveDate) -> Result<ForecastWindow>;
}

/// Unix timestamps of the start of `date` and the start of the following day, both UTC
#[must_use]
pub fn day_bounds(date: NaiveDate) -> (i64, i64) {
    let start = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    let end = date
        .succ_opt()
        .map_or(start + 86_400, |next| next.and_time(NaiveTime::MIN).and_utc().timestamp());
    (start, end)
}
