use crate::report::Report;

/// Single-line JSON document: `{"date": .., "scores": {..}, "best": ..}`
pub fn render_report_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
