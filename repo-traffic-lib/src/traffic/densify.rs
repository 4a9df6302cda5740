use super::{Clock, DailyMetric, DayRange};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Expand a sparse series into one row per calendar day, ending on `today`.
///
/// The first record as given anchors the range; the input is not sorted first, so a
/// record earlier than the first one only appears if it falls inside the range.
/// Days without a record are zero-filled. If a date occurs twice the later record
/// wins. An anchor after `today` produces an empty series.
#[must_use]
pub fn densify(series: &[DailyMetric], today: NaiveDate) -> Vec<DailyMetric> {
    let Some(anchor) = series.first() else {
        return Vec::new();
    };

    let by_date: HashMap<NaiveDate, &DailyMetric> = series.iter().map(|metric| (metric.date, metric)).collect();

    DayRange::inclusive(anchor.date, today)
        .map(|date| by_date.get(&date).map_or_else(|| DailyMetric::empty(date), |metric| **metric))
        .collect()
}

/// [`densify`] up to the day reported by `clock`.
#[must_use]
pub fn densify_with(series: &[DailyMetric], clock: &impl Clock) -> Vec<DailyMetric> {
    densify(series, clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traffic::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn metric(d: u32, views: u64, uniques: u64) -> DailyMetric {
        DailyMetric::new(date(2024, 1, d), views, uniques)
    }

    #[test]
    fn test_empty_series() {
        assert!(densify(&[], date(2024, 1, 3)).is_empty());
    }

    #[test]
    fn test_fills_trailing_days_until_today() {
        let dense = densify(&[metric(1, 5, 2)], date(2024, 1, 3));
        assert_eq!(dense, vec![metric(1, 5, 2), metric(2, 0, 0), metric(3, 0, 0)]);
    }

    #[test]
    fn test_fills_interior_gaps() {
        let dense = densify(&[metric(1, 4, 1), metric(4, 9, 3)], date(2024, 1, 4));
        assert_eq!(dense, vec![metric(1, 4, 1), metric(2, 0, 0), metric(3, 0, 0), metric(4, 9, 3)]);
    }

    #[test]
    fn test_anchor_is_first_record_not_earliest() {
        // Jan 1 precedes the anchor and is therefore dropped.
        let dense = densify(&[metric(3, 6, 2), metric(1, 8, 4)], date(2024, 1, 4));
        assert_eq!(dense, vec![metric(3, 6, 2), metric(4, 0, 0)]);
    }

    #[test]
    fn test_out_of_order_records_land_on_their_day() {
        let dense = densify(&[metric(1, 1, 1), metric(3, 3, 3), metric(2, 2, 2)], date(2024, 1, 3));
        assert_eq!(dense, vec![metric(1, 1, 1), metric(2, 2, 2), metric(3, 3, 3)]);
    }

    #[test]
    fn test_records_after_today_are_dropped() {
        let dense = densify(&[metric(1, 1, 1), metric(9, 9, 9)], date(2024, 1, 2));
        assert_eq!(dense, vec![metric(1, 1, 1), metric(2, 0, 0)]);
    }

    #[test]
    fn test_future_anchor_yields_empty() {
        assert!(densify(&[metric(9, 1, 1)], date(2024, 1, 2)).is_empty());
    }

    #[test]
    fn test_anchor_on_today_yields_single_row() {
        assert_eq!(densify(&[metric(2, 3, 1)], date(2024, 1, 2)), vec![metric(2, 3, 1)]);
    }

    #[test]
    fn test_duplicate_dates_keep_last_record() {
        let dense = densify(&[metric(1, 1, 1), metric(1, 7, 5)], date(2024, 1, 1));
        assert_eq!(dense, vec![metric(1, 7, 5)]);
    }

    #[test]
    fn test_length_is_inclusive_day_count() {
        let today = date(2024, 3, 1);
        let dense = densify(&[metric(15, 1, 1)], today);
        let expected = usize::try_from((today - date(2024, 1, 15)).num_days() + 1).unwrap();
        assert_eq!(dense.len(), expected);
        assert!(dense.windows(2).all(|pair| pair[0].date.succ_opt() == Some(pair[1].date)));
    }

    #[test]
    fn test_is_idempotent_for_same_today() {
        let today = date(2024, 1, 10);
        let once = densify(&[metric(2, 5, 1), metric(6, 2, 2)], today);
        let twice = densify(&once, today);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_densify_with_uses_clock() {
        let clock = FixedClock::new(date(2024, 1, 3));
        assert_eq!(densify_with(&[metric(1, 5, 2)], &clock).len(), 3);
    }
}
