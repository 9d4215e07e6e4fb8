//! HTTP error payloads and status mapping.
//!
//! Keep the domain free of transport concerns: resolver errors are
//! translated into the structured `{code, message}` envelope here and in
//! the handlers, never inside `michinori-core`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed, or the upstream provider declined it.
    InvalidRequest,
    /// The requested identifiers cannot be resolved to coordinates.
    NotFound,
    /// The external provider could not be reached or understood.
    InternalError,
}

/// Standard error envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Construct an error with an explicit code.
    #[must_use]
    pub fn with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A client error in the request itself.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::InvalidRequest, message)
    }

    /// The requested resource does not exist.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::NotFound, message)
    }

    /// A failure on our side or in the upstream transport.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::InternalError, message)
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::bad_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(ApiError::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(ApiError::internal("broken"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_status_classes(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[rstest]
    fn envelope_serialises_code_and_message() {
        let value = serde_json::to_value(ApiError::not_found("coordinates not found"))
            .expect("error should serialise");
        assert_eq!(
            value,
            serde_json::json!({"code": "not_found", "message": "coordinates not found"})
        );
    }
}
