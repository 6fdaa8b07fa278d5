use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResult;

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";
pub const REQUIRED_FIELDS_DETAIL: &str = "Name, email, and message are required.";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_DETAIL)
}

pub fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiResult::failure(detail))).into_response()
}
