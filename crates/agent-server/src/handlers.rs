//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use agent_core::{
    ChatReply, ChatRequest, is_supported,
    models::ModelList,
    reasoning::AgentBuilder,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider_connected: bool,
    pub tools: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider_connected = state.provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider_connected,
        tools: state.tools.names().into_iter().map(String::from).collect(),
    })
}

/// Published model allow-list
pub async fn list_models() -> Json<ModelList> {
    Json(ModelList::default())
}

/// Run one chat turn
///
/// Unsupported models get a 200 with an `error` body and never reach the
/// provider. Agent failures are not retried and surface as a 500.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ErrorResponse>)> {
    if !is_supported(&payload.model_name) {
        tracing::info!(model = %payload.model_name, "Rejected unsupported model");
        return Ok(Json(ChatReply::unsupported_model()));
    }

    let agent = AgentBuilder::new()
        .provider(state.provider.clone())
        .tools(state.tools.clone())
        .model(payload.model_name.as_str())
        .system_prompt(payload.system_prompt.as_str())
        .build()
        .map_err(|e| {
            tracing::error!("Agent construction failed: {}", e);
            agent_error(&e)
        })?;

    let result = agent.invoke(&payload.messages).await.map_err(|e| {
        tracing::error!(
            model = %payload.model_name,
            retryable = e.is_retryable(),
            "Agent error: {}",
            e
        );
        agent_error(&e)
    })?;

    tracing::info!(
        model = %payload.model_name,
        messages = result.messages.len(),
        "Chat turn complete"
    );

    Ok(Json(ChatReply::Completed(result)))
}

fn agent_error(e: &agent_core::AgentError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.user_message(),
            code: "AGENT_ERROR".into(),
        }),
    )
}
