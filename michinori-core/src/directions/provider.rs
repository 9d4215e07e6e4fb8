//! Directions provider trait and its raw result type.

use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;

use super::error::DirectionsError;

/// Raw result of a directions lookup.
///
/// Values come straight from the provider: the duration and distance of the
/// first leg of the first returned route, before any rounding policy is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    /// Driving time of the route.
    pub duration: Duration,
    /// Driving distance of the route in metres.
    pub distance_meters: f64,
}

/// Fetch a driving route between two coordinates.
///
/// Implementations issue a single attempt per call: retry policy, caching
/// and fallback ordering belong to the resolver, not the provider.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Return the driving route summary from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::Status`] when the provider answers with a
    /// non-success status, and a transport-class variant when the request
    /// itself fails.
    async fn fetch_route(
        &self,
        origin: Coord,
        destination: Coord,
    ) -> Result<RouteSummary, DirectionsError>;
}
