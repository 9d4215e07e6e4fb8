//! Fetch driving routes between two coordinates.
//!
//! The [`DirectionsProvider`] trait abstracts the external directions
//! service. Callers supply an origin and destination coordinate and receive
//! a [`RouteSummary`] with the raw duration and distance, or a typed
//! [`DirectionsError`] separating upstream status failures from transport
//! failures.
//!
//! The HTTP implementation lives in `michinori-data`; this crate only
//! defines the seam so the resolver stays testable without a network.

mod error;
mod provider;

pub use error::DirectionsError;
pub use provider::{DirectionsProvider, RouteSummary};
