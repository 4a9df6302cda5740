//! Retrieval of raw daily traffic records
//!
//! Records come either from the repository stats API ([`StatsClient`]) or from a
//! JSON file holding an array of records in the same shape ([`load_records`]).
//! Both return unvalidated [`RawRecord`](crate::traffic::RawRecord)s; validation
//! belongs to the traffic engine.

mod client;
mod file;

pub use client::StatsClient;
pub use file::load_records;
