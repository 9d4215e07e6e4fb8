//! HTTP implementation of the directions provider.

use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;
use michinori_core::{DirectionsError, DirectionsProvider, RouteSummary};
use reqwest::Client;
use thiserror::Error;

use super::google::DirectionsResponse;

/// Default user agent for directions requests.
pub const DEFAULT_USER_AGENT: &str = "michinori-directions/0.1";

/// Default base URL of the Google Maps web service API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error type for [`HttpDirectionsProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Configuration for [`HttpDirectionsProvider`].
#[derive(Debug, Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Base URL for the directions service.
    pub base_url: String,
    /// API key appended to every request.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpDirectionsProviderConfig {
    /// Create a configuration with the given API key and defaults otherwise.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the base URL (e.g. to point at a local test double).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Directions provider backed by the Google Directions API.
///
/// Issues a single driving-mode request per call with a bounded timeout and
/// no retries. URLs carried in errors and logs omit the API key.
#[derive(Debug)]
pub struct HttpDirectionsProvider {
    client: Client,
    config: HttpDirectionsProviderConfig,
}

impl HttpDirectionsProvider {
    /// Create a provider with default configuration for the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// Build the request URL without the API key, safe for logs and errors.
    ///
    /// The provider expects `latitude,longitude` pairs, the reverse of the
    /// `geo::Coord` field order.
    fn endpoint_url(&self, origin: Coord, destination: Coord) -> String {
        format!(
            "{}/directions/json?origin={},{}&destination={},{}&mode=driving",
            self.config.base_url.trim_end_matches('/'),
            origin.y,
            origin.x,
            destination.y,
            destination.x,
        )
    }

    /// Build the full request URL including the API key.
    fn request_url(&self, origin: Coord, destination: Coord) -> String {
        format!(
            "{}&key={}",
            self.endpoint_url(origin, destination),
            self.config.api_key
        )
    }

    /// Convert a reqwest error to a `DirectionsError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return DirectionsError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        DirectionsError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Convert a decoded provider response into a route summary.
    fn convert_response(response: DirectionsResponse) -> Result<RouteSummary, DirectionsError> {
        if !response.is_ok() {
            return Err(DirectionsError::Status {
                status: response.status,
            });
        }

        let leg = response
            .routes
            .first()
            .and_then(|route| route.legs.first())
            .ok_or_else(|| DirectionsError::Parse {
                message: "directions response missing routes or legs".to_owned(),
            })?;

        let seconds = leg.duration.value;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(DirectionsError::Parse {
                message: format!("invalid duration value {seconds}"),
            });
        }

        Ok(RouteSummary {
            duration: Duration::from_secs_f64(seconds),
            distance_meters: leg.distance.value,
        })
    }
}

#[async_trait]
impl DirectionsProvider for HttpDirectionsProvider {
    async fn fetch_route(
        &self,
        origin: Coord,
        destination: Coord,
    ) -> Result<RouteSummary, DirectionsError> {
        let display_url = self.endpoint_url(origin, destination);
        log::debug!("requesting driving directions: {display_url}");

        let response = self
            .client
            .get(self.request_url(origin, destination))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &display_url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &display_url))?;

        let body: DirectionsResponse =
            response
                .json()
                .await
                .map_err(|err| DirectionsError::Parse {
                    message: err.to_string(),
                })?;

        Self::convert_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::google::{Leg, Metric, RouteEntry};
    use rstest::{fixture, rstest};

    #[fixture]
    fn provider() -> HttpDirectionsProvider {
        let config = HttpDirectionsProviderConfig::new("secret-key")
            .with_base_url("https://maps.example.com/maps/api");
        HttpDirectionsProvider::with_config(config).expect("provider should build")
    }

    fn response_with_leg(duration: f64, distance: f64) -> DirectionsResponse {
        DirectionsResponse {
            status: "OK".to_owned(),
            error_message: None,
            routes: vec![RouteEntry {
                legs: vec![Leg {
                    duration: Metric { value: duration },
                    distance: Metric { value: distance },
                }],
            }],
        }
    }

    #[rstest]
    fn endpoint_url_formats_lat_lon_pairs(provider: HttpDirectionsProvider) {
        let url = provider.endpoint_url(
            Coord { x: 135.5262, y: 34.6873 },
            Coord { x: 135.4959, y: 34.7025 },
        );

        assert_eq!(
            url,
            "https://maps.example.com/maps/api/directions/json\
             ?origin=34.6873,135.5262&destination=34.7025,135.4959&mode=driving"
        );
    }

    #[rstest]
    fn endpoint_url_omits_the_api_key(provider: HttpDirectionsProvider) {
        let url = provider.endpoint_url(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
        assert!(!url.contains("secret-key"));
        assert!(!url.contains("key="));
    }

    #[rstest]
    fn request_url_appends_the_api_key(provider: HttpDirectionsProvider) {
        let url = provider.request_url(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
        assert!(url.ends_with("&key=secret-key"));
    }

    #[rstest]
    fn base_url_trailing_slash_is_stripped() {
        let config = HttpDirectionsProviderConfig::new("k")
            .with_base_url("https://maps.example.com/maps/api/");
        let provider = HttpDirectionsProvider::with_config(config).expect("provider should build");

        let url = provider.endpoint_url(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
        assert!(url.starts_with("https://maps.example.com/maps/api/directions/"));
        assert!(!url.contains("api//directions"));
    }

    #[rstest]
    fn convert_response_extracts_the_first_leg() {
        let summary = HttpDirectionsProvider::convert_response(response_with_leg(480.0, 6200.0))
            .expect("should convert");

        assert_eq!(summary.duration, Duration::from_secs(480));
        assert_eq!(summary.distance_meters, 6200.0);
    }

    #[rstest]
    fn convert_response_surfaces_non_ok_status_verbatim() {
        let response = DirectionsResponse {
            status: "ZERO_RESULTS".to_owned(),
            error_message: None,
            routes: Vec::new(),
        };

        let err =
            HttpDirectionsProvider::convert_response(response).expect_err("should fail");

        match err {
            DirectionsError::Status { status } => assert_eq!(status, "ZERO_RESULTS"),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[rstest]
    fn convert_response_rejects_ok_without_routes() {
        let response = DirectionsResponse {
            status: "OK".to_owned(),
            error_message: None,
            routes: Vec::new(),
        };

        let err =
            HttpDirectionsProvider::convert_response(response).expect_err("should fail");

        assert!(matches!(err, DirectionsError::Parse { .. }));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-1.0)]
    fn convert_response_rejects_invalid_durations(#[case] seconds: f64) {
        let err = HttpDirectionsProvider::convert_response(response_with_leg(seconds, 1000.0))
            .expect_err("should fail");

        assert!(matches!(err, DirectionsError::Parse { .. }));
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpDirectionsProviderConfig::new("k")
            .with_base_url("http://localhost:9000")
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
