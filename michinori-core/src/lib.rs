//! Core domain types for the Michinori travel-duration service.
//!
//! The pipeline resolves the driving time between two named locations:
//! a precomputed [`DurationCache`] is consulted first, and only on a miss
//! does the [`DurationResolver`] look both identifiers up in the
//! [`CoordinateRegistry`] and call out through a [`DirectionsProvider`].
//! Raw provider durations are normalised by a caller-selected
//! [`RoundingPolicy`].
//!
//! This crate is free of I/O: table loading and the HTTP provider live in
//! `michinori-data`, the HTTP surface in `michinori-server`.

#![forbid(unsafe_code)]

mod cache;
pub mod directions;
mod location;
mod registry;
mod resolver;
mod rounding;

#[doc(hidden)]
pub mod test_support;

pub use cache::{CachedDuration, DurationCache, DurationRecord};
pub use directions::{DirectionsError, DirectionsProvider, RouteSummary};
pub use location::{LocationRecord, LocationRecordError};
pub use registry::CoordinateRegistry;
pub use resolver::{DurationResolver, MinutesValue, ResolveError, ResolvedDuration};
pub use rounding::RoundingPolicy;
