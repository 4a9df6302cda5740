use crate::Result;
use crate::traffic::{DailyMetric, DateBounds, RepoKey, SeriesTotals, SummaryRow, date_range_label};
use core::fmt::Write;
use serde_json::json;

/// Write the export summary together with the window it was computed over.
pub fn generate_summary<W: Write>(rows: &[SummaryRow], bounds: DateBounds, writer: &mut W) -> Result<()> {
    let output = json!({
        "date_range": {
            "start": bounds.start,
            "end": bounds.end,
            "label": date_range_label(bounds),
        },
        "repositories": serde_json::to_value(rows)?,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

/// Write the full dense series of one repository, as used for charting.
pub fn generate_series<W: Write>(key: &RepoKey, series: &[DailyMetric], writer: &mut W) -> Result<()> {
    let totals = SeriesTotals::of(series);
    let output = json!({
        "account": key.account,
        "repository": key.repo_name,
        "totals": serde_json::to_value(totals)?,
        "series": serde_json::to_value(series)?,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
