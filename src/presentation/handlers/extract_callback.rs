use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::domain::ExtractCallbackRequest;
use crate::infrastructure::observability::{log_completed, log_request};
use crate::presentation::extract::ValidatedJson;
use crate::presentation::state::AppState;

const API: &str = "extract-callback";

#[tracing::instrument(skip(state, request), fields(doc_uid = %request.result.doc_uid))]
pub async fn extract_callback_handler<B, N>(
    State(state): State<AppState<B, N>>,
    ValidatedJson(request): ValidatedJson<ExtractCallbackRequest>,
) -> impl IntoResponse
where
    B: RagBackend + 'static,
    N: CallbackNotifier + 'static,
{
    log_request(API, &request);
    let response = state.extraction_pipeline.on_extract_callback(&request).await;
    log_completed(API, &request, response.result_cd);
    (StatusCode::OK, Json(response))
}
