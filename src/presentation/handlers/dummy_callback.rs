use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::{CallbackRequest, CallbackResponse, ErrorCd};
use crate::infrastructure::observability::{log_completed, log_request};
use crate::presentation::extract::ValidatedJson;

const API: &str = "dummy-callback";

/// Test receiver for outbound callbacks: logs the payload and acknowledges it.
pub async fn dummy_callback_handler(
    ValidatedJson(request): ValidatedJson<CallbackRequest>,
) -> impl IntoResponse {
    log_request(API, &request);
    let response = CallbackResponse {
        result_cd: ErrorCd::Success.code(),
        result_desc: ErrorCd::Success.description().to_string(),
        doc_uid: request.result.doc_uid.clone(),
    };
    log_completed(API, &request, response.result_cd);
    (StatusCode::OK, Json(response))
}
