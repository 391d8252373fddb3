//! Plain-text rendering of a forecast report.

use forecast_core::ForecastReport;

/// Render a report as a header line plus one line per day.
pub fn render_report(report: &ForecastReport) -> String {
    let mut out = format!(
        "WEATHER in {} {}\n\n",
        report.location.name, report.location.flag
    );

    for day in &report.days {
        out.push_str(&format!(
            "{:<6} {}  {}° — {}°\n",
            day.label,
            day.icon.glyph(),
            day.min_temp,
            day.max_temp
        ));
    }

    out
}
