use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{ErrorCd, ResultEnvelope};

/// Failures surfaced at the HTTP boundary. Always rendered as the
/// `{result_cd, result_desc}` envelope, never as a bare status or trace.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub result_cd: i32,
    pub result_desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    fn from_code(error: ErrorCd, detail: Option<String>) -> Self {
        let ResultEnvelope {
            result_cd,
            result_desc,
        } = error.envelope();
        Self {
            result_cd,
            result_desc,
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => {
                tracing::warn!(detail = %detail, "Request validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse::from_code(ErrorCd::InvalidRequest, Some(detail))),
                )
                    .into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Unhandled failure");
                (
                    StatusCode::OK,
                    Json(ErrorResponse::from_code(ErrorCd::CommonException, None)),
                )
                    .into_response()
            }
        }
    }
}

/// Panic hook for `CatchPanicLayer`: a panicking handler answers COMMON_EXCEPTION.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    ApiError::Internal(message).into_response()
}
