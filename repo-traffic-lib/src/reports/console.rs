use super::common::{Column, write_table};
use crate::Result;
use crate::traffic::{DailyMetric, SeriesTotals, SummaryRow};
use core::fmt::Write;

const SERIES_COLUMNS: [Column; 4] = [
    Column::left("Repository Name"),
    Column::left("Date"),
    Column::right("Views"),
    Column::right("Unique Users"),
];

const SUMMARY_COLUMNS: [Column; 5] = [
    Column::left("GitHub Account"),
    Column::left("Repository"),
    Column::left("Date Range"),
    Column::right("Total Views"),
    Column::right("Total Unique Visitors"),
];

/// Message shown in place of a series table when a repository has no data at all.
pub const NO_DATA_MESSAGE: &str = "No data available for this repository.";

/// Write the per-day table of one repository followed by its totals.
///
/// `rows` are the days that fall inside the requested window and `totals` are summed
/// over exactly those days.
pub fn generate_series<W: Write>(
    repo_name: &str,
    rows: &[DailyMetric],
    totals: SeriesTotals,
    use_colors: bool,
    writer: &mut W,
) -> Result<()> {
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|metric| {
            vec![
                repo_name.to_string(),
                metric.date.format("%Y-%m-%d").to_string(),
                metric.views.to_string(),
                metric.uniques.to_string(),
            ]
        })
        .collect();

    let footer = [
        "Total".to_string(),
        String::new(),
        totals.views.to_string(),
        totals.uniques.to_string(),
    ];

    write_table(&SERIES_COLUMNS, &body, Some(&footer), use_colors, writer)
}

/// Write one line per repository with its totals over the export window.
pub fn generate_summary<W: Write>(rows: &[SummaryRow], use_colors: bool, writer: &mut W) -> Result<()> {
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.account().to_string(),
                row.repo_name().to_string(),
                row.date_range_label.clone(),
                row.total_views.to_string(),
                row.total_uniques.to_string(),
            ]
        })
        .collect();

    write_table(&SUMMARY_COLUMNS, &body, None, use_colors, writer)
}
