//! Rendering of survey results for the console

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::ScoreMap;

pub mod json;
pub mod text;

pub use json::render_report_json;
pub use text::render_report_text;

/// Everything needed to present one run's recommendation
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub date: NaiveDate,
    pub scores: ScoreMap,
    pub best: String,
}

impl Report {
    #[must_use]
    pub fn new(date: NaiveDate, scores: ScoreMap, best: String) -> Self {
        Self { date, scores, best }
    }
}

/// Output flavour selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_report_text(report)),
        OutputFormat::Json => render_report_json(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        let scores: ScoreMap = [("A", 3.0), ("B", 2.0)].into_iter().collect();
        Report::new(
            NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            scores,
            "A".to_string(),
        )
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let report = sample_report();
        let text = render(&report, OutputFormat::Text).unwrap();
        let json = render(&report, OutputFormat::Json).unwrap();

        assert!(text.contains("Recommendation: A"));
        assert!(json.starts_with('{'));
        assert!(json.contains(r#""best":"A""#));
    }
}
