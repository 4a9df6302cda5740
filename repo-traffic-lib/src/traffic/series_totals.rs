use super::DailyMetric;
use serde::Serialize;

/// Views and unique visitors summed over a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeriesTotals {
    pub views: u64,
    pub uniques: u64,
}

impl SeriesTotals {
    #[must_use]
    pub fn of<'a>(series: impl IntoIterator<Item = &'a DailyMetric>) -> Self {
        series.into_iter().fold(Self::default(), |acc, metric| Self {
            views: acc.views.saturating_add(metric.views),
            uniques: acc.uniques.saturating_add(metric.uniques),
        })
    }
}
