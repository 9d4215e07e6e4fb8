//! Test doubles for the directions seam.
//!
//! [`StubDirectionsProvider`] returns a pre-configured response without any
//! network access and counts how often it is called, which lets tests
//! assert the resolver's zero-external-calls properties directly.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use geo::Coord;

use crate::{DirectionsError, DirectionsProvider, RouteSummary};

/// Stub [`DirectionsProvider`] for tests.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use michinori_core::RouteSummary;
/// use michinori_core::test_support::StubDirectionsProvider;
///
/// let provider = StubDirectionsProvider::with_summary(RouteSummary {
///     duration: Duration::from_secs(600),
///     distance_meters: 8000.0,
/// });
/// assert_eq!(provider.calls(), 0);
/// ```
#[derive(Debug)]
pub struct StubDirectionsProvider {
    response: StubResponse,
    calls: AtomicUsize,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Summary(RouteSummary),
    Error(DirectionsError),
}

impl StubDirectionsProvider {
    /// Create a provider that succeeds with the given summary.
    #[must_use]
    pub fn with_summary(summary: RouteSummary) -> Self {
        Self {
            response: StubResponse::Summary(summary),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a provider that fails with the given error.
    #[must_use]
    pub fn with_error(error: DirectionsError) -> Self {
        Self {
            response: StubResponse::Error(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `fetch_route` calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for StubDirectionsProvider {
    async fn fetch_route(
        &self,
        _origin: Coord,
        _destination: Coord,
    ) -> Result<RouteSummary, DirectionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            StubResponse::Summary(summary) => Ok(*summary),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
