//! Duration resolution pipeline: cache, registry, provider, rounding.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::{
    CoordinateRegistry, DirectionsError, DirectionsProvider, DurationCache, RoundingPolicy,
};

/// A minutes value that keeps cached rows verbatim on the wire.
///
/// Provider results are always whole minutes and serialise as JSON
/// integers. Cached rows are trusted as stored, so a fractional value
/// stays fractional instead of being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MinutesValue {
    /// Whole minutes, serialised as a JSON integer.
    Whole(u64),
    /// Fractional minutes carried through from the cache unchanged.
    Exact(f64),
}

impl MinutesValue {
    /// Wrap a stored cache value without altering it.
    ///
    /// Integral values are represented as [`Whole`](Self::Whole) so they
    /// serialise without a decimal point; anything else stays exact.
    #[must_use]
    pub fn from_stored(minutes: f64) -> Self {
        // 2^53 bounds the integers f64 can represent exactly; beyond that
        // (or below zero) the value cannot be a faithful whole count.
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if minutes.fract() == 0.0 && (0.0..MAX_EXACT).contains(&minutes) {
            Self::Whole(minutes as u64)
        } else {
            Self::Exact(minutes)
        }
    }
}

/// Output of the resolution pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDuration {
    /// Identifier of the origin location, as requested.
    pub from_id: String,
    /// Identifier of the destination location, as requested.
    pub to_id: String,
    /// Driving time in minutes; `None` when a cached row had a blank cell.
    pub minutes: Option<MinutesValue>,
    /// Driving distance in kilometres, one decimal place.
    ///
    /// Populated only on the provider path; cached rows carry no distance.
    pub distance_km: Option<f64>,
}

/// Errors from [`DurationResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// One or both identifiers have no coordinate in the registry.
    ///
    /// Terminal for the request: the external provider is never called
    /// with a partially resolved pair.
    #[error("no coordinates found for {from_id:?} -> {to_id:?}")]
    CoordinatesNotFound {
        /// Origin identifier as requested.
        from_id: String,
        /// Destination identifier as requested.
        to_id: String,
    },
    /// The directions provider failed; surfaced unchanged.
    #[error(transparent)]
    Directions(#[from] DirectionsError),
}

/// Resolves travel durations between named locations.
///
/// The resolver owns the fallback order and the numeric policy: an exact
/// cache hit is returned verbatim; otherwise both identifiers must resolve
/// to coordinates before a single provider call is made, whose raw duration
/// is rounded by the caller-selected [`RoundingPolicy`].
///
/// Registry and cache are immutable snapshots, so a resolver shared behind
/// an [`Arc`] serves concurrent requests without locking.
pub struct DurationResolver {
    registry: CoordinateRegistry,
    cache: DurationCache,
    provider: Arc<dyn DirectionsProvider>,
}

impl DurationResolver {
    /// Assemble a resolver from its three collaborators.
    #[must_use]
    pub fn new(
        registry: CoordinateRegistry,
        cache: DurationCache,
        provider: Arc<dyn DirectionsProvider>,
    ) -> Self {
        Self {
            registry,
            cache,
            provider,
        }
    }

    /// Resolve the driving duration from `from_id` to `to_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::CoordinatesNotFound`] when either identifier
    /// is unknown to the registry, and [`ResolveError::Directions`] when the
    /// provider call fails. Cache hits cannot fail.
    pub async fn resolve(
        &self,
        from_id: &str,
        to_id: &str,
        policy: RoundingPolicy,
    ) -> Result<ResolvedDuration, ResolveError> {
        if let Some(hit) = self.cache.lookup(from_id, to_id) {
            return Ok(ResolvedDuration {
                from_id: from_id.to_owned(),
                to_id: to_id.to_owned(),
                minutes: hit.minutes.map(MinutesValue::from_stored),
                distance_km: None,
            });
        }

        let (Some(origin), Some(destination)) =
            (self.registry.lookup(from_id), self.registry.lookup(to_id))
        else {
            return Err(ResolveError::CoordinatesNotFound {
                from_id: from_id.to_owned(),
                to_id: to_id.to_owned(),
            });
        };

        let summary = self.provider.fetch_route(origin, destination).await?;

        Ok(ResolvedDuration {
            from_id: from_id.to_owned(),
            to_id: to_id.to_owned(),
            minutes: Some(MinutesValue::Whole(policy.minutes(summary.duration))),
            distance_km: Some(round_to_one_decimal(summary.distance_meters / 1000.0)),
        })
    }
}

/// Round a kilometre value to one decimal place, halves away from zero.
fn round_to_one_decimal(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
