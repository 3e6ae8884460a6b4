//! Failure envelopes shared by every endpoint

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::core::GatewayError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Request-level failures keep a 200 status; the envelope carries the error.
pub fn failure(err: &GatewayError) -> Response {
    (StatusCode::OK, Json(ErrorResponse::new(err.to_string()))).into_response()
}

pub fn rejected(rejection: JsonRejection) -> Response {
    (rejection.status(), Json(ErrorResponse::new(rejection.body_text()))).into_response()
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Route not found"))).into_response()
}
