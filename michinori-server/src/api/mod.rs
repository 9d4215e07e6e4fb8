//! HTTP handlers exposing the resolution pipeline and the raw tables.

pub mod duration;
pub mod error;
pub mod tables;

pub use error::{ApiError, ApiResult, ErrorCode};
