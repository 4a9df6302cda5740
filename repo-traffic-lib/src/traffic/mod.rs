//! Daily traffic reconciliation and aggregation
//!
//! This module turns the sparse, gap-containing daily records served by the stats
//! API into the two shapes the rest of the tool consumes: a contiguous per-repository
//! series for tables and charts, and per-repository totals for export.
//!
//! # Implementation Model
//!
//! Everything here is a pure function of its arguments. Nothing is cached between
//! calls and nothing performs I/O.
//!
//! - [`RawRecord`] is the wire shape. It is validated into [`DailyMetric`] or
//!   [`TaggedDailyMetric`]; a missing or malformed date fails the whole batch while
//!   missing counters default to zero.
//! - [`densify`] expands one repository's series into one row per calendar day, from
//!   the date of the first record as given up to "today", zero-filling gaps. "Today"
//!   comes from a [`Clock`] so the result is deterministic under test.
//! - [`filter`] narrows any [`Dated`] series to an inclusive [`DateBounds`] window.
//! - [`summarize`] groups a flat multi-repository series by [`RepoKey`] and sums
//!   views and unique visitors into [`SummaryRow`]s.
//!
//! Both [`densify`] and [`summarize`] trust the input order: the first record anchors
//! the dense series, and the first and last records supply the default export
//! bounds. Callers that want the true minimum and maximum apply
//! [`AnchorMode::EarliestRecord`] before calling in.

mod anchor_mode;
mod clock;
mod daily_metric;
mod date_bounds;
mod day_range;
mod densify;
mod raw_record;
mod series_totals;
mod summary;

pub use anchor_mode::AnchorMode;
pub use clock::{Clock, FixedClock, SystemClock};
pub use daily_metric::{DailyMetric, Dated, RepoKey, TaggedDailyMetric};
pub use date_bounds::{DateBounds, filter, filter_iter};
pub use day_range::DayRange;
pub use densify::{densify, densify_with};
pub use raw_record::{RawRecord, parse_date, parse_metrics, parse_tagged_metrics};
pub use series_totals::SeriesTotals;
pub use summary::{SummaryRow, date_range_label, summarize};
