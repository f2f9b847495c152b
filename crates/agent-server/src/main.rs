//! agent-chat Gateway
//!
//! Axum server that runs one agent turn per `POST /chat` against a hosted
//! Groq model with Tavily web search, and serves the WASM chat console.

mod config;
mod handlers;
mod routes;
mod state;

use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::GatewayConfig;
use crate::routes::api_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment wins. Loaded first so RUST_LOG applies.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env()?;
    let state = AppState::from_config(&config)?;

    match state.provider.list_models().await {
        Ok(models) => {
            tracing::info!("✓ Connected to Groq");
            for model in models.iter().filter(|m| agent_core::is_supported(&m.id)) {
                tracing::debug!(model = %model.id, context = ?model.context_length, "Groq serves");
            }
        }
        Err(e) => {
            tracing::warn!("⚠ Groq not reachable - chat requests will fail: {}", e);
            tracing::warn!("  Check GROQ_API_KEY and network access");
        }
    }

    tracing::info!("Registered {} tools:", state.tools.len());
    for name in state.tools.names() {
        tracing::info!("  • {}", name);
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api_router(state)
        // Compiled console (trunk build output)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 agent-chat gateway running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  GET  /api/models  - Supported models");
    tracing::info!("  POST /chat        - Run a chat turn");
    tracing::info!("  GET  /*           - Chat console ({})", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
