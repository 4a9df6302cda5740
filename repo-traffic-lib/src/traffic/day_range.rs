use chrono::NaiveDate;
use core::iter::FusedIterator;

/// Consecutive calendar days from `first` to `last`, both inclusive.
///
/// The range is lazy and never mutates a shared date: each step derives the next day
/// from the previous one. Cloning a range restarts it from the clone's position.
/// A range whose first day is after its last day is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRange {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl DayRange {
    #[must_use]
    pub fn inclusive(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            next: (first <= last).then_some(first),
            last,
        }
    }

    /// Number of days not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.next.map_or(0, |next| {
            usize::try_from((self.last - next).num_days() + 1).unwrap_or(0)
        })
    }
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.last { current.succ_opt() } else { None };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayRange {}

impl FusedIterator for DayRange {}
