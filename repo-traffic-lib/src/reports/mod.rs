//! Report generation for repository traffic
//!
//! This module turns dense daily series and export summaries into output for people
//! and for other programs.
//!
//! # Implementation Model
//!
//! Three report generators are provided:
//! - **Console**: Aligned plain-text tables with optional ANSI emphasis. A per-day
//!   table (with a Total row) for one repository, and a one-line-per-repository
//!   summary table for exports.
//! - **CSV**: The export summary with the dashboard's column headers, written with
//!   the `csv` crate so quoting follows RFC 4180.
//! - **JSON**: The export summary, or the full dense series of one repository for
//!   charting.
//!
//! Table layout is centralized in the `common` module so both console reports
//! align columns the same way.

mod common;
mod console;
mod csv;
mod json;

pub use console::{NO_DATA_MESSAGE, generate_series as generate_console_series, generate_summary as generate_console_summary};
pub use csv::{default_file_name as default_csv_file_name, generate as generate_csv};
pub use json::{generate_series as generate_json_series, generate_summary as generate_json_summary};
