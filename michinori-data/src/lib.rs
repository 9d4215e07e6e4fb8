//! Data access for the Michinori travel-duration service.
//!
//! Responsibilities:
//! - Load the location master and distance matrix tables from CSV.
//! - Provide the HTTP directions adapter for the external routing provider.
//! - Keep filesystem access behind capability-style helpers.
//!
//! Boundaries:
//! - Do not encode resolution rules (they live in `michinori-core`).
//! - Keep blocking I/O off async executors; the directions client is async.
//!
//! Invariants:
//! - Loaders never mutate their sources and tolerate malformed rows.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod directions;
pub mod fs;
pub mod tables;

pub use tables::TableError;
