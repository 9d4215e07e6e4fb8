//! Raw table download endpoints.
//!
//! These serve the backing CSV files byte-for-byte (including any BOM) so
//! the planner frontend and offline tooling can fetch the same data the
//! service resolved against. No parsing, no logic.

use actix_web::{HttpResponse, get, web};
use camino::Utf8PathBuf;
use michinori_data::fs;

use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Serve the tourist-spot master table.
#[get("/spot_master_csv")]
pub async fn spot_master_csv(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    serve_table(state.tables.spot_master.clone()).await
}

/// Serve the precomputed distance matrix table.
#[get("/distance_matrix_csv")]
pub async fn distance_matrix_csv(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    serve_table(state.tables.distance_matrix.clone()).await
}

/// Serve the tourist-spot listing table.
#[get("/tourist_spots_csv")]
pub async fn tourist_spots_csv(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    serve_table(state.tables.tourist_spots.clone()).await
}

/// Read a table off the blocking pool and return it as CSV.
async fn serve_table(path: Utf8PathBuf) -> ApiResult<HttpResponse> {
    let display_path = path.clone();
    let bytes = web::block(move || fs::read_file_bytes(&path))
        .await
        .map_err(|err| {
            log::error!("table read task failed: {err}");
            ApiError::internal("failed to read table")
        })?
        .map_err(|err| {
            log::error!("failed to read table {display_path}: {err}");
            ApiError::internal(format!("failed to read table {display_path}"))
        })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .body(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configure_app;
    use crate::state::TableFiles;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use michinori_core::test_support::StubDirectionsProvider;
    use michinori_core::{
        CoordinateRegistry, DirectionsError, DurationCache, DurationResolver,
    };
    use std::io::Write;
    use std::sync::Arc;

    fn state_serving(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> AppState {
        let path = Utf8PathBuf::from_path_buf(dir.path().join(name))
            .expect("temp path should be UTF-8");
        let mut file = std::fs::File::create(&path).expect("create table file");
        file.write_all(content).expect("write table file");

        let provider = Arc::new(StubDirectionsProvider::with_error(
            DirectionsError::Status {
                status: "UNUSED".to_owned(),
            },
        ));
        AppState {
            resolver: Arc::new(DurationResolver::new(
                CoordinateRegistry::default(),
                DurationCache::default(),
                provider,
            )),
            tables: TableFiles {
                spot_master: path.clone(),
                distance_matrix: path.clone(),
                tourist_spots: path,
            },
        }
    }

    #[actix_web::test]
    async fn tables_are_served_byte_for_byte() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let content = "\u{feff}施設ID,緯度,経度\nS001,34.7,135.5\n";
        let state = state_serving(&dir, "spot-id-master.csv", content.as_bytes());

        let app = test::init_service(App::new().configure(configure_app(state))).await;
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/spot_master_csv").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/csv"));
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), content.as_bytes(), "BOM and bytes preserved");
    }

    #[actix_web::test]
    async fn missing_table_is_a_server_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut state = state_serving(&dir, "present.csv", b"x\n");
        state.tables.distance_matrix = Utf8PathBuf::from("/nonexistent/matrix.csv");

        let app = test::init_service(App::new().configure(configure_app(state))).await;
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/distance_matrix_csv")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
