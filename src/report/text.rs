use std::fmt;

use crate::report::Report;

const SEPARATOR_WIDTH: usize = 34;
const BEST_MARKER: &str = "🏄 ";
const NO_MARKER: &str = "   ";

/// Plain-text layout of a report, best beach first
struct TextReport<'a>(&'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "SurfCast CE for {}", report.date.format("%d %b %Y"))?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        for (beach, score) in report.scores.ranked() {
            let marker = if beach == report.best {
                BEST_MARKER
            } else {
                NO_MARKER
            };
            writeln!(f, "{marker}{beach:<18}{score:>5.1}")?;
        }

        writeln!(f)?;
        write!(f, "Recommendation: {}", report.best)
    }
}

pub fn render_report_text(report: &Report) -> String {
    TextReport(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreMap;
    use chrono::NaiveDate;

    fn report(entries: &[(&str, f64)], best: &str) -> Report {
        Report::new(
            NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            entries.iter().copied().collect::<ScoreMap>(),
            best.to_string(),
        )
    }

    #[test]
    fn test_contains_recommendation() {
        let text = render_report_text(&report(&[("A", 3.0), ("B", 2.0)], "A"));
        assert!(text.contains("Recommendation: A"));
    }

    #[test]
    fn test_full_layout() {
        let text = render_report_text(&report(&[("B", 2.0), ("A", 3.0)], "A"));
        let expected = [
            "SurfCast CE for 04 Jul 2025",
            "----------------------------------",
            "🏄 A                   3.0",
            "   B                   2.0",
            "",
            "Recommendation: A",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_lines_sorted_by_descending_score() {
        let text = render_report_text(&report(
            &[("Iguape", 4.2), ("Paracuru", 7.76), ("Taíba", 6.0)],
            "Paracuru",
        ));
        let lines: Vec<&str> = text.lines().skip(2).take(3).collect();
        assert!(lines[0].starts_with("🏄 Paracuru"));
        assert!(lines[0].ends_with("7.8"));
        assert!(lines[1].contains("Taíba"));
        assert!(lines[2].contains("Iguape"));
    }
}
