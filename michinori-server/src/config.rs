//! Server configuration parsed from CLI flags and the environment.

use std::net::SocketAddr;

use camino::Utf8PathBuf;
use clap::Parser;

/// Command-line and environment configuration for the duration service.
///
/// Every flag has an environment fallback so the service deploys with
/// nothing but environment variables; the API key is expected to arrive
/// that way and is hidden from `--help` output.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "michinori-server",
    about = "Travel-duration resolution service for the trip planner"
)]
pub struct ServerArgs {
    /// Socket address to bind the HTTP server to.
    #[arg(long, env = "MICHINORI_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// API key for the external directions provider.
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub google_api_key: String,

    /// Override the base URL of the directions provider.
    ///
    /// Mainly useful for pointing the service at a test double.
    #[arg(long, env = "MICHINORI_DIRECTIONS_BASE_URL")]
    pub directions_base_url: Option<String>,

    /// Timeout for directions requests, in seconds.
    #[arg(long, env = "MICHINORI_DIRECTIONS_TIMEOUT_SECS", default_value_t = 10)]
    pub directions_timeout_secs: u64,

    /// Path to the tourist-spot master table.
    #[arg(long, env = "MICHINORI_SPOT_MASTER", default_value = "spot-id-master.csv")]
    pub spot_master: Utf8PathBuf,

    /// Path to the station master table.
    ///
    /// Optional: when absent the registry is built from the spot master
    /// alone.
    #[arg(long, env = "MICHINORI_STATION_MASTER")]
    pub station_master: Option<Utf8PathBuf>,

    /// Path to the precomputed distance matrix table.
    #[arg(long, env = "MICHINORI_DISTANCE_MATRIX", default_value = "distance_matrix.csv")]
    pub distance_matrix: Utf8PathBuf,

    /// Path to the tourist-spot table served for download.
    #[arg(long, env = "MICHINORI_TOURIST_SPOTS", default_value = "tourist-spots.csv")]
    pub tourist_spots: Utf8PathBuf,
}
