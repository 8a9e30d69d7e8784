use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "surfcast",
    version,
    about = "SurfCast CE - choose your beach. Scores marine forecasts and recommends where to surf."
)]
pub struct Args {
    /// Forecast date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
    /// Raw JSON output
    #[arg(long)]
    pub json: bool,
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Requested date, falling back to the local current date
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
