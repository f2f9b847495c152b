//! Application State

use std::sync::Arc;

use agent_core::{LlmProvider, Result, ToolRegistry};
use agent_runtime::{GroqProvider, TavilySearchTool};

use crate::config::GatewayConfig;

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    /// Hosted LLM provider (Groq)
    pub provider: Arc<dyn LlmProvider>,

    /// Fixed tool set offered to every agent
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>, tools: ToolRegistry) -> Self {
        Self {
            provider,
            tools: Arc::new(tools),
        }
    }

    /// Wire up the Groq provider and the Tavily search tool
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let provider = Arc::new(GroqProvider::new(config.groq.clone())?);

        let mut tools = ToolRegistry::new();
        tools.register(TavilySearchTool::new(config.tavily.clone())?);

        Ok(Self::new(provider, tools))
    }
}
