use super::{DateBounds, RepoKey, TaggedDailyMetric, filter_iter};
use serde::Serialize;
use std::collections::HashMap;

const LOG_TARGET: &str = "   summary";
const OPEN_START_LABEL: &str = "START";
const OPEN_END_LABEL: &str = "END";

/// Total traffic for one repository over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    #[serde(flatten)]
    pub key: RepoKey,
    pub total_views: u64,
    pub total_uniques: u64,
    pub date_range_label: String,
}

impl SummaryRow {
    #[must_use]
    pub const fn new(key: RepoKey, date_range_label: String) -> Self {
        Self {
            key,
            total_views: 0,
            total_uniques: 0,
            date_range_label,
        }
    }

    #[must_use]
    pub fn account(&self) -> &str {
        &self.key.account
    }

    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.key.repo_name
    }

    const fn add(&mut self, views: u64, uniques: u64) {
        self.total_views = self.total_views.saturating_add(views);
        self.total_uniques = self.total_uniques.saturating_add(uniques);
    }
}

/// Describe the user-chosen bounds, e.g. `2024-01-02 to END`.
#[must_use]
pub fn date_range_label(bounds: DateBounds) -> String {
    let (start, end) = bounds.sides(OPEN_START_LABEL, OPEN_END_LABEL);
    format!("{start} to {end}")
}

/// Sum views and unique visitors per repository within `bounds`.
///
/// A missing bound falls back to the date of the first (start) or last (end) record
/// as given, not to the earliest or latest date. Rows come out in the order each
/// repository is first seen. The label always reflects `bounds` as supplied.
#[must_use]
pub fn summarize(flat: &[TaggedDailyMetric], bounds: DateBounds) -> Vec<SummaryRow> {
    let (Some(first), Some(last)) = (flat.first(), flat.last()) else {
        return Vec::new();
    };

    let effective = DateBounds::new(Some(bounds.start.unwrap_or(first.date)), Some(bounds.end.unwrap_or(last.date)));
    let label = date_range_label(bounds);

    let mut slots: HashMap<(&str, &str), usize> = HashMap::new();
    let mut rows: Vec<SummaryRow> = Vec::new();

    for record in filter_iter(flat, effective) {
        let slot = *slots
            .entry((record.account.as_str(), record.repo_name.as_str()))
            .or_insert_with_key(|&(account, repo_name)| {
                rows.push(SummaryRow::new(RepoKey::new(account, repo_name), label.clone()));
                rows.len() - 1
            });

        if let Some(row) = rows.get_mut(slot) {
            row.add(record.views, record.uniques);
        }
    }

    log::debug!(target: LOG_TARGET, "summarized {} records into {} repositories ({label})", flat.len(), rows.len());

    rows
}
