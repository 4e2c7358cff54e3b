use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::domain::ChatRequest;
use crate::infrastructure::observability::{log_completed, log_request};
use crate::presentation::extract::ValidatedJson;
use crate::presentation::state::AppState;

const API: &str = "chat";

/// Answers a chat turn. The chat model's own result code (200, 210, ...) is relayed.
#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<B, N>(
    State(state): State<AppState<B, N>>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> impl IntoResponse
where
    B: RagBackend + 'static,
    N: CallbackNotifier + 'static,
{
    log_request(API, &request);
    let response = state.chat_service.process(&request).await;
    log_completed(API, &request, response.result_cd);
    (StatusCode::OK, Json(response))
}
