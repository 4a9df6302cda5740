use chrono::NaiveDate;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// Anything that belongs to a single calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// One repository's activity on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub views: u64,
    pub uniques: u64,
}

impl DailyMetric {
    #[must_use]
    pub const fn new(date: NaiveDate, views: u64, uniques: u64) -> Self {
        Self { date, views, uniques }
    }

    /// A day without any recorded activity.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self::new(date, 0, 0)
    }
}

impl Dated for DailyMetric {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Identity of a repository across accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RepoKey {
    pub account: String,
    pub repo_name: String,
}

impl RepoKey {
    #[must_use]
    pub fn new(account: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            repo_name: repo_name.into(),
        }
    }
}

impl Display for RepoKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.account, self.repo_name)
    }
}

/// A daily metric from the flat, cross-repository export source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedDailyMetric {
    pub account: String,
    pub repo_name: String,
    pub date: NaiveDate,
    pub views: u64,
    pub uniques: u64,
}

impl TaggedDailyMetric {
    #[must_use]
    pub fn new(key: RepoKey, metric: DailyMetric) -> Self {
        Self {
            account: key.account,
            repo_name: key.repo_name,
            date: metric.date,
            views: metric.views,
            uniques: metric.uniques,
        }
    }

    #[must_use]
    pub fn key(&self) -> RepoKey {
        RepoKey::new(self.account.as_str(), self.repo_name.as_str())
    }

    #[must_use]
    pub const fn metric(&self) -> DailyMetric {
        DailyMetric::new(self.date, self.views, self.uniques)
    }
}

impl Dated for TaggedDailyMetric {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_empty_metric_has_zero_counters() {
        let metric = DailyMetric::empty(day(3));
        assert_eq!(metric.date, day(3));
        assert_eq!(metric.views, 0);
        assert_eq!(metric.uniques, 0);
    }

    #[test]
    fn test_tagged_metric_round_trips_key_and_metric() {
        let key = RepoKey::new("octo", "widgets");
        let metric = DailyMetric::new(day(2), 7, 3);
        let tagged = TaggedDailyMetric::new(key.clone(), metric);

        assert_eq!(tagged.key(), key);
        assert_eq!(tagged.metric(), metric);
        assert_eq!(tagged.date(), day(2));
    }

    #[test]
    fn test_repo_keys_do_not_collide_on_separators() {
        let a = RepoKey::new("a::b", "c");
        let b = RepoKey::new("a", "b::c");
        assert_ne!(a, b);
    }

    #[test]
    fn test_repo_key_display() {
        assert_eq!(RepoKey::new("octo", "widgets").to_string(), "octo/widgets");
    }

    #[test]
    fn test_daily_metric_serializes_plain_date() {
        let json = serde_json::to_string(&DailyMetric::new(day(1), 5, 2)).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-01","views":5,"uniques":2}"#);
    }
}
