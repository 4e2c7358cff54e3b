use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::domain::{RegisterDocRequest, RegisterDocResponse};
use crate::infrastructure::observability::{log_completed, log_request};
use crate::presentation::extract::ValidatedJson;
use crate::presentation::state::AppState;

const API: &str = "doc-register";

#[tracing::instrument(skip(state, request))]
pub async fn register_handler<B, N>(
    State(state): State<AppState<B, N>>,
    ValidatedJson(request): ValidatedJson<RegisterDocRequest>,
) -> impl IntoResponse
where
    B: RagBackend + 'static,
    N: CallbackNotifier + 'static,
{
    log_request(API, &request);
    let response_meta = request.meta.response_meta();

    if let Err(error) = state.document_service.validate_registration(&request) {
        tracing::error!(
            rag_sys_info = request.meta.rag_sys_info.as_deref().unwrap_or("N/A"),
            session_id = request.meta.session_id.as_deref().unwrap_or("N/A"),
            error = %error,
            "Document registration rejected"
        );
        log_completed(API, &request, error.code());
        return (
            StatusCode::OK,
            Json(RegisterDocResponse {
                result_cd: error.code(),
                result_desc: error.description().to_string(),
                meta: response_meta,
            }),
        );
    }

    let extract_requests = state.document_service.build_extract_requests(&request);
    let response = state
        .extract_dispatcher
        .dispatch(&request, &extract_requests, response_meta)
        .await;

    log_completed(API, &request, response.result_cd);
    (StatusCode::OK, Json(response))
}
