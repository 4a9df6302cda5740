//! Command-line interface and orchestration for repo-traffic
//!
//! This module implements the CLI commands and wires the record sources, the traffic
//! engine, and the report generators together. It handles argument parsing,
//! configuration management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **accounts**: List the accounts known to the stats API
//! - **repos**: List the repositories tracked for one account
//! - **views**: Fetch one repository's records, fill them into a contiguous daily
//!   series up to today, restrict it to the requested window, and print it with totals
//! - **export**: Fetch the records of every repository, sum them per repository over
//!   the requested window, and write the summary as CSV (and optionally JSON)
//! - **init**: Generate a default configuration file
//! - **validate**: Check that the configuration loads and passes validation
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap, initializes logging,
//! and routes to the appropriate command handler. Data commands follow the same pattern:
//!
//! 1. Load configuration and apply command-line overrides
//! 2. Read raw records from the stats API or from a local `--input` file
//! 3. Validate them into typed metrics and apply the configured anchor mode
//! 4. Densify, filter, or summarize with the traffic engine
//! 5. Generate reports
//!
//! Output goes through the [`Host`] trait so tests can capture it.

mod accounts;
mod common;
mod config;
mod export;
mod host;
mod init;
mod repos;
mod run;
mod validate;
mod views;

#[cfg(debug_assertions)]
pub use config::Config;

pub use accounts::list_accounts;
pub use export::{ExportArgs, export_summary};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use repos::{ReposArgs, list_repos};
pub use run::run;
pub use validate::validate_config;
pub use views::{ViewsArgs, show_views};
