//! Duration resolution endpoints.
//!
//! ```text
//! GET  /get_duration       Query-parameter lookup, five-minute ceiling
//! POST /get_duration_api   JSON body lookup, nearest-minute rounding
//! POST /realtime_distance  JSON body lookup with distance, five-minute ceiling
//! ```
//!
//! The three endpoints share one resolver; they differ only in the rounding
//! policy they select and in how a missing coordinate maps to a status code
//! (404 on the query endpoint, 400 on the JSON ones; the planner frontend
//! already depends on that split).

use actix_web::{get, post, web};
use michinori_core::{DirectionsError, MinutesValue, ResolveError, ResolvedDuration, RoundingPolicy};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult, ErrorCode};
use crate::state::AppState;

/// Query parameters of `GET /get_duration`.
///
/// Both fields are optional so that absence maps to the structured
/// `MissingParameter` payload rather than a framework-generated rejection.
#[derive(Debug, Deserialize)]
pub struct DurationQuery {
    /// Origin identifier.
    pub from_id: Option<String>,
    /// Destination identifier.
    pub to_id: Option<String>,
}

/// JSON body of the POST endpoints; both fields are required.
#[derive(Debug, Deserialize)]
pub struct DurationRequest {
    /// Origin identifier.
    pub from_id: String,
    /// Destination identifier.
    pub to_id: String,
}

/// Minutes-only response payload.
#[derive(Debug, Serialize)]
pub struct DurationResponse {
    /// Origin identifier, echoed back.
    pub from_id: String,
    /// Destination identifier, echoed back.
    pub to_id: String,
    /// Driving minutes; `null` when the cached row has a blank cell.
    pub minutes: Option<MinutesValue>,
}

impl From<ResolvedDuration> for DurationResponse {
    fn from(resolved: ResolvedDuration) -> Self {
        Self {
            from_id: resolved.from_id,
            to_id: resolved.to_id,
            minutes: resolved.minutes,
        }
    }
}

/// Detailed response payload of `POST /realtime_distance`.
#[derive(Debug, Serialize)]
pub struct RealtimeDistanceResponse {
    /// Origin identifier, echoed back.
    pub from_id: String,
    /// Destination identifier, echoed back.
    pub to_id: String,
    /// Driving minutes; `null` when the cached row has a blank cell.
    pub driving_minutes: Option<MinutesValue>,
    /// Driving distance in kilometres; absent on cache hits.
    pub distance_km: Option<f64>,
}

impl From<ResolvedDuration> for RealtimeDistanceResponse {
    fn from(resolved: ResolvedDuration) -> Self {
        Self {
            from_id: resolved.from_id,
            to_id: resolved.to_id,
            driving_minutes: resolved.minutes,
            distance_km: resolved.distance_km,
        }
    }
}

/// Map a resolver failure onto the endpoint's error envelope.
///
/// `coordinates_code` differs per endpoint; the remaining mapping is
/// shared: upstream status failures are client errors carrying the status
/// string, transport failures are server errors.
fn map_resolve_error(err: ResolveError, coordinates_code: ErrorCode) -> ApiError {
    match err {
        ResolveError::CoordinatesNotFound { .. } => {
            ApiError::with_code(coordinates_code, err.to_string())
        }
        ResolveError::Directions(source @ DirectionsError::Status { .. }) => {
            ApiError::bad_request(source.to_string())
        }
        ResolveError::Directions(source) => {
            log::error!("directions request failed: {source}");
            ApiError::internal(source.to_string())
        }
    }
}

/// Resolve a duration from query parameters, rounding up to five minutes.
#[get("/get_duration")]
pub async fn get_duration(
    state: web::Data<AppState>,
    query: web::Query<DurationQuery>,
) -> ApiResult<web::Json<DurationResponse>> {
    let DurationQuery { from_id, to_id } = query.into_inner();
    let (Some(from_id), Some(to_id)) = (from_id, to_id) else {
        return Err(ApiError::bad_request(
            "parameters from_id and to_id are required",
        ));
    };

    let resolved = state
        .resolver
        .resolve(&from_id, &to_id, RoundingPolicy::FiveMinuteCeiling)
        .await
        .map_err(|err| map_resolve_error(err, ErrorCode::NotFound))?;

    Ok(web::Json(resolved.into()))
}

/// Resolve a duration from a JSON body, rounding to the nearest minute.
#[post("/get_duration_api")]
pub async fn get_duration_api(
    state: web::Data<AppState>,
    payload: web::Json<DurationRequest>,
) -> ApiResult<web::Json<DurationResponse>> {
    let DurationRequest { from_id, to_id } = payload.into_inner();

    let resolved = state
        .resolver
        .resolve(&from_id, &to_id, RoundingPolicy::NearestMinute)
        .await
        .map_err(|err| map_resolve_error(err, ErrorCode::InvalidRequest))?;

    Ok(web::Json(resolved.into()))
}

/// Resolve a duration and distance from a JSON body, rounding up to five
/// minutes.
#[post("/realtime_distance")]
pub async fn realtime_distance(
    state: web::Data<AppState>,
    payload: web::Json<DurationRequest>,
) -> ApiResult<web::Json<RealtimeDistanceResponse>> {
    let DurationRequest { from_id, to_id } = payload.into_inner();

    let resolved = state
        .resolver
        .resolve(&from_id, &to_id, RoundingPolicy::FiveMinuteCeiling)
        .await
        .map_err(|err| map_resolve_error(err, ErrorCode::InvalidRequest))?;

    Ok(web::Json(resolved.into()))
}
