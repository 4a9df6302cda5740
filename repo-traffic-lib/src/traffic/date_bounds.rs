use super::Dated;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive window of calendar days. A missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateBounds {
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// Both sides as `YYYY-MM-DD`, with `open_start`/`open_end` standing in for a missing side.
    #[must_use]
    pub fn sides(&self, open_start: &str, open_end: &str) -> (String, String) {
        let side = |date: Option<NaiveDate>, open: &str| date.map_or_else(|| open.to_string(), |d| d.format("%Y-%m-%d").to_string());
        (side(self.start, open_start), side(self.end, open_end))
    }
}

/// Rows of `series` that fall inside `bounds`, in their original order.
pub fn filter_iter<T: Dated>(series: &[T], bounds: DateBounds) -> impl Iterator<Item = &T> {
    series.iter().filter(move |row| bounds.contains(row.date()))
}

/// Copy of the rows of `series` that fall inside `bounds`, in their original order.
#[must_use]
pub fn filter<T: Dated + Clone>(series: &[T], bounds: DateBounds) -> Vec<T> {
    filter_iter(series, bounds).cloned().collect()
}
