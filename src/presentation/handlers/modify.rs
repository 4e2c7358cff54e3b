use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::domain::ModifyDocRequest;
use crate::infrastructure::observability::{log_completed, log_request};
use crate::presentation::extract::ValidatedJson;
use crate::presentation::state::AppState;

const API: &str = "doc-modify";

#[tracing::instrument(skip(state, request))]
pub async fn modify_handler<B, N>(
    State(state): State<AppState<B, N>>,
    ValidatedJson(request): ValidatedJson<ModifyDocRequest>,
) -> impl IntoResponse
where
    B: RagBackend + 'static,
    N: CallbackNotifier + 'static,
{
    log_request(API, &request);
    let response = state.document_service.modify(&request).await;
    log_completed(API, &request, response.result_cd);
    (StatusCode::OK, Json(response))
}
