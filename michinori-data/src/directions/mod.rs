//! HTTP directions adapter for the external routing provider.
//!
//! This module provides [`HttpDirectionsProvider`], an implementation of
//! [`michinori_core::DirectionsProvider`] that queries the Google
//! Directions API for a driving route between two coordinates.
//!
//! # Architecture
//!
//! One outbound GET per call, a bounded timeout, no retries: fallback
//! ordering and caching live in the resolver, so the adapter stays a thin
//! translation between the wire format and [`RouteSummary`]. The API key
//! travels only in the request URL and is never included in log output or
//! error values.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use michinori_data::directions::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//!
//! let config = HttpDirectionsProviderConfig::new("secret-key")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("trip-planner/1.0");
//! let provider = HttpDirectionsProvider::with_config(config)?;
//! # Ok::<(), michinori_data::directions::ProviderBuildError>(())
//! ```

mod google;
mod provider;

pub use provider::{
    DEFAULT_USER_AGENT, HttpDirectionsProvider, HttpDirectionsProviderConfig, ProviderBuildError,
};

pub use michinori_core::RouteSummary;
