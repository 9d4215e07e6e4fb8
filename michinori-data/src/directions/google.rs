//! Google Directions API response types.
//!
//! Only the fields the resolver needs are modelled: the top-level status,
//! and the duration and distance of each route leg. Everything else in the
//! (large) response payload is ignored during deserialisation.
//!
//! See: <https://developers.google.com/maps/documentation/directions/get-directions>

use serde::Deserialize;

/// Top-level Directions API response.
///
/// `status` is `"OK"` on success. Other observed values include
/// `"ZERO_RESULTS"`, `"NOT_FOUND"`, `"OVER_QUERY_LIMIT"` and
/// `"REQUEST_DENIED"`; any non-OK status is surfaced to callers verbatim.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status string from the provider.
    pub status: String,
    /// Optional human-readable detail accompanying a failure status.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Computed routes; empty unless `status` is `"OK"`.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One computed route.
#[derive(Debug, Deserialize)]
pub struct RouteEntry {
    /// Route legs between the requested waypoints.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One leg of a route.
#[derive(Debug, Deserialize)]
pub struct Leg {
    /// Driving time of the leg.
    pub duration: Metric,
    /// Driving distance of the leg.
    pub distance: Metric,
}

/// A value/text pair as returned by the provider; only `value` is used.
#[derive(Debug, Deserialize)]
pub struct Metric {
    /// Numeric value: seconds for durations, metres for distances.
    pub value: f64,
}

impl DirectionsResponse {
    /// Check whether the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}
