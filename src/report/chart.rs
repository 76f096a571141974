//! Text bar chart of the preference distribution.

use std::fmt::Write;

use super::PreferenceReport;

const TITLE: &str = "Statistics of Student Preferences";
const AXIS: &str = "Preference (1-14 = preference rank, 0 = not in preferences)";

/// Renders the distribution as horizontal bars, one row per position.
///
/// Bars are scaled so the largest count spans `width` characters.
/// Non-zero counts always get at least one character.
pub fn render_chart(report: &PreferenceReport, width: usize) -> String {
    let distribution = report.distribution();
    let max = distribution.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let count_width = max.to_string().len();

    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{AXIS}");
    for (position, count) in distribution {
        let bar = bar_len(count, max, width);
        let _ = writeln!(
            out,
            "{position:>2} | {count:>count_width$} {}",
            "#".repeat(bar)
        );
    }
    out
}

fn bar_len(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * width / max).max(1)
}
