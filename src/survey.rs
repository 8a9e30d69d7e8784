//! Per-run driver: fetch every beach, score what arrived, pick the best
//!
//! A beach whose forecast cannot be fetched is recorded as a failure and
//! left out of the scores; only a run where nothing was scored fails.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::models::{Beach, ScoreMap};
use crate::recommend::choose_best;
use crate::report::Report;
use crate::scoring::compute_score;
use crate::weather::ForecastProvider;
use crate::{Result, SurfcastError};

/// A beach that could not be scored and why
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub beach: String,
    pub reason: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error fetching {}: {}", self.beach, self.reason)
    }
}

/// Scores and failures collected for one date, before a recommendation is made
#[derive(Debug, Clone)]
pub struct Survey {
    pub date: NaiveDate,
    pub scores: ScoreMap,
    pub failures: Vec<FetchFailure>,
}

impl Survey {
    /// Recommend a beach from the collected scores.
    ///
    /// Fails with [`SurfcastError::NoData`] when no beach was scored.
    pub fn conclude(self) -> Result<SurveyOutcome> {
        if self.scores.is_empty() {
            return Err(SurfcastError::NoData);
        }

        let best = choose_best(&self.scores)?;
        info!(
            "Recommending {} ({} scored, {} failed)",
            best,
            self.scores.len(),
            self.failures.len()
        );

        Ok(SurveyOutcome {
            date: self.date,
            scores: self.scores,
            best,
        })
    }
}

/// Result of surveying all configured beaches for one date
#[derive(Debug, Clone)]
pub struct SurveyOutcome {
    pub date: NaiveDate,
    pub scores: ScoreMap,
    pub best: String,
}

impl SurveyOutcome {
    /// The part of the outcome that gets printed
    #[must_use]
    pub fn report(&self) -> Report {
        Report::new(self.date, self.scores.clone(), self.best.clone())
    }
}

/// Fetch and score every beach for `date`, in order, recording failures instead of stopping
#[instrument(skip(provider, beaches), fields(beach_count = beaches.len()))]
pub fn survey_beaches<P: ForecastProvider + ?Sized>(
    provider: &P,
    beaches: &[Beach],
    date: NaiveDate,
) -> Survey {
    let mut scores = ScoreMap::new();
    let mut failures = Vec::new();

    for beach in beaches {
        match provider.fetch_window(beach, date) {
            Ok(window) => {
                let score = compute_score(&window);
                debug!(
                    "{} scored {:.2} from {} samples",
                    beach.name,
                    score,
                    window.samples.len()
                );
                scores.insert(beach.name.clone(), score);
            }
            Err(e) => {
                let reason = match e {
                    SurfcastError::Fetch { message, .. } => message,
                    other => other.to_string(),
                };
                debug!(beach = %beach.name, "Fetch failed: {}", reason);
                failures.push(FetchFailure {
                    beach: beach.name.clone(),
                    reason,
                });
            }
        }
    }

    Survey {
        date,
        scores,
        failures,
    }
}

/// Score every beach for `date` and recommend one.
///
/// Fails with [`SurfcastError::NoData`] when no beach could be fetched.
pub fn run_survey<P: ForecastProvider + ?Sized>(
    provider: &P,
    beaches: &[Beach],
    date: NaiveDate,
) -> Result<SurveyOutcome> {
    survey_beaches(provider, beaches, date).conclude()
}
