//! Error taxonomy for directions lookups.

use thiserror::Error;

/// Errors from [`crate::directions::DirectionsProvider::fetch_route`].
///
/// [`Status`](Self::Status) is the upstream-status class: the provider
/// answered, but declined to compute a route. The remaining variants are
/// the transport class: the request never produced a usable answer. The
/// split matters to adapters, which map the two classes to different HTTP
/// status codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The provider responded with a non-success status field.
    ///
    /// Carries the status string verbatim (e.g. `"ZERO_RESULTS"`,
    /// `"REQUEST_DENIED"`) so callers can surface it unchanged.
    #[error("directions service answered with status {status}")]
    Status {
        /// Upstream status string, exactly as returned.
        status: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("directions request to {url} failed: {message}")]
    Network {
        /// Request URL with credentials removed.
        url: String,
        /// Description of the underlying failure.
        message: String,
    },
    /// The request exceeded the configured deadline.
    #[error("directions request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL with credentials removed.
        url: String,
        /// Deadline that was exceeded, in seconds.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("directions request to {url} returned HTTP {status}: {message}")]
    Http {
        /// Request URL with credentials removed.
        url: String,
        /// HTTP status code of the response.
        status: u16,
        /// Description of the underlying failure.
        message: String,
    },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode directions response: {message}")]
    Parse {
        /// Description of the decoding failure.
        message: String,
    },
}

impl DirectionsError {
    /// Whether this is the upstream-status class rather than transport.
    #[must_use]
    pub fn is_upstream_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
