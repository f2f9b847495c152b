//! API Client

use agent_core::{ChatOutcome, ChatRequest, models::ModelList};

/// Absolute URL on the page origin (the gateway serves this console)
fn endpoint(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://127.0.0.1:8000".into());
    format!("{origin}{path}")
}

/// Fetch the gateway's model allow-list
pub async fn fetch_models() -> Result<Vec<String>, String> {
    let response = reqwest::get(endpoint("/api/models"))
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("status {}", response.status()));
    }

    let list: ModelList = response.json().await.map_err(|e| e.to_string())?;
    Ok(list.models)
}

/// Post one chat turn and interpret the gateway's answer
pub async fn run_chat_turn(request: &ChatRequest) -> ChatOutcome {
    let client = reqwest::Client::new();

    let response = match client.post(endpoint("/chat")).json(request).send().await {
        Ok(response) => response,
        Err(e) => return ChatOutcome::Transport(e.to_string()),
    };

    let status = response.status().as_u16();
    if status != 200 {
        return ChatOutcome::HttpStatus(status);
    }

    match response.json::<serde_json::Value>().await {
        Ok(body) => ChatOutcome::from_response(status, &body),
        Err(e) => ChatOutcome::Transport(e.to_string()),
    }
}
