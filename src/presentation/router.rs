use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::error::handle_panic;
use crate::presentation::handlers::{
    chat_handler, delete_handler, dummy_callback_handler, extract_callback_handler,
    health_handler, indexing_callback_handler, modify_handler, register_handler, search_handler,
};
use crate::presentation::state::AppState;

pub const API_PREFIX: &str = "/v1";

pub fn create_router<B, N>(state: AppState<B, N>) -> Router
where
    B: RagBackend + 'static,
    N: CallbackNotifier + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let external = Router::new()
        .route("/doc-register", post(register_handler::<B, N>))
        .route("/doc-modify", post(modify_handler::<B, N>))
        .route("/doc-delete", post(delete_handler::<B, N>))
        .route("/search-doc", post(search_handler::<B, N>))
        .route("/chat", post(chat_handler::<B, N>));

    let internal = Router::new()
        .route("/extract-callback", post(extract_callback_handler::<B, N>))
        .route(
            "/indexing-callback",
            post(indexing_callback_handler::<B, N>),
        )
        .route("/dummy-callback", post(dummy_callback_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest(API_PREFIX, external.merge(internal))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
