use super::Dated;
use serde::{Deserialize, Serialize};

/// How the first day of a series and the default export bounds are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AnchorMode {
    /// Trust the order in which the source returned the records
    #[default]
    FirstRecord,

    /// Order the records by date first, so the earliest record anchors the series
    EarliestRecord,
}

impl AnchorMode {
    /// Reorder `records` in place as required by this mode.
    ///
    /// Sorting is stable, so records sharing a date keep their relative order.
    pub fn apply<T: Dated>(self, records: &mut [T]) {
        match self {
            Self::FirstRecord => {}
            Self::EarliestRecord => records.sort_by_key(Dated::date),
        }
    }
}
