//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`. Everything in it
//! is an immutable snapshot built once at startup, so workers share it
//! without locking.

use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use michinori_core::{CoordinateRegistry, DurationCache, DurationResolver};
use michinori_data::directions::{
    HttpDirectionsProvider, HttpDirectionsProviderConfig, ProviderBuildError,
};
use michinori_data::tables::{
    TableError, load_duration_records, load_spot_locations, load_station_locations,
};
use thiserror::Error;

use crate::config::ServerArgs;

/// Paths of the raw tables served for download.
#[derive(Debug, Clone)]
pub struct TableFiles {
    /// Tourist-spot master table.
    pub spot_master: Utf8PathBuf,
    /// Precomputed distance matrix table.
    pub distance_matrix: Utf8PathBuf,
    /// Tourist-spot listing table.
    pub tourist_spots: Utf8PathBuf,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The resolution pipeline shared across workers.
    pub resolver: Arc<DurationResolver>,
    /// Table files exposed by the download endpoints.
    pub tables: TableFiles,
}

/// Errors raised while assembling the application state.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A startup table failed to load.
    #[error(transparent)]
    Table(#[from] TableError),
    /// The directions provider could not be constructed.
    #[error(transparent)]
    Provider(#[from] ProviderBuildError),
}

impl AppState {
    /// Load the tables and build the resolver from server configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError`] when a table cannot be read or the HTTP
    /// client fails to build. Malformed table rows are skipped by the
    /// loaders and do not fail startup.
    pub fn from_args(args: &ServerArgs) -> Result<Self, BootstrapError> {
        let spots = load_spot_locations(&args.spot_master)?;
        let stations = match &args.station_master {
            Some(path) => load_station_locations(path)?,
            None => Vec::new(),
        };
        let registry = CoordinateRegistry::from_sources(spots, stations);

        let cache = DurationCache::from_records(load_duration_records(&args.distance_matrix)?);
        log::info!(
            "loaded {} locations and {} precomputed pairs",
            registry.len(),
            cache.len()
        );

        let mut config = HttpDirectionsProviderConfig::new(args.google_api_key.clone())
            .with_timeout(Duration::from_secs(args.directions_timeout_secs));
        if let Some(base_url) = &args.directions_base_url {
            config = config.with_base_url(base_url.clone());
        }
        let provider = HttpDirectionsProvider::with_config(config)?;

        Ok(Self {
            resolver: Arc::new(DurationResolver::new(registry, cache, Arc::new(provider))),
            tables: TableFiles {
                spot_master: args.spot_master.clone(),
                distance_matrix: args.distance_matrix.clone(),
                tourist_spots: args.tourist_spots.clone(),
            },
        })
    }
}
