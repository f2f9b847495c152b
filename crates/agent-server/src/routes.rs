//! Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{chat_handler, health_check, list_models};
use crate::state::AppState;

/// API routes; static files and middleware are layered on in `main`
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/models", get(list_models))
        .route("/chat", post(chat_handler))
        .with_state(state)
}
