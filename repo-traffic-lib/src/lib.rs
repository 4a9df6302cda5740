#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for repo-traffic
//!
//! This library consolidates all functionality for the repo-traffic tool, which shows
//! and exports per-repository traffic statistics (daily views and unique visitors).
//!
//! # Module Organization
//!
//! - [`traffic`]: Time-series densification, range filtering, and aggregation
//! - [`source`]: Retrieval of raw daily records from the stats API or local files
//! - [`reports`]: Console, CSV, and JSON output
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod traffic;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod source;
#[cfg(not(any(debug_assertions, test)))]
mod source;

pub use crate::commands::{Host, run};
