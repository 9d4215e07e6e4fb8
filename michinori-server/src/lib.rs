//! HTTP surface for the Michinori travel-duration service.
//!
//! The server is a thin adapter: handlers validate the request shape, pick
//! a rounding policy, call the shared [`michinori_core::DurationResolver`]
//! and translate the outcome into the JSON envelopes of the wire contract.

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod state;

use actix_web::{HttpRequest, error::JsonPayloadError, web};

use api::ApiError;
use state::AppState;

/// Register application data and routes on an actix service config.
///
/// Returned as a closure so callers (the binary and the handler tests) can
/// pass it straight to `App::configure`.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(api::duration::get_duration)
            .service(api::duration::get_duration_api)
            .service(api::duration::realtime_distance)
            .service(api::tables::spot_master_csv)
            .service(api::tables::distance_matrix_csv)
            .service(api::tables::tourist_spots_csv);
    }
}

/// Convert body extraction failures into the structured error envelope.
///
/// Required fields missing from a JSON body land here, keeping the
/// missing-parameter contract out of the resolver entirely.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("invalid request body: {err}")).into()
}
