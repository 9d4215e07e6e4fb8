//! Facade crate for the Michinori travel-duration service.
//!
//! This crate re-exports the core domain types together with the table
//! loaders and the HTTP directions provider, so embedders can depend on a
//! single crate instead of the individual workspace members.

#![forbid(unsafe_code)]

pub use michinori_core::{
    CachedDuration, CoordinateRegistry, DirectionsError, DirectionsProvider, DurationCache,
    DurationRecord, DurationResolver, LocationRecord, LocationRecordError, MinutesValue,
    ResolveError, ResolvedDuration, RoundingPolicy, RouteSummary,
};

pub use michinori_data::directions::{
    DEFAULT_USER_AGENT, HttpDirectionsProvider, HttpDirectionsProviderConfig, ProviderBuildError,
};
pub use michinori_data::tables::{self, TableError};
