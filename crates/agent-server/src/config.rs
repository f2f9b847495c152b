//! Gateway Configuration
//!
//! Built once in `main` and threaded into the application state. Nothing
//! else in the server reads the process environment.

use std::path::PathBuf;

use agent_core::{AgentError, Result};
use agent_runtime::{GroqConfig, TavilyConfig, groq, tavily};

/// Web search results handed to the agent per query
pub const SEARCH_MAX_RESULTS: usize = 3;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub groq: GroqConfig,
    pub tavily: TavilyConfig,
    pub bind_addr: String,

    /// Directory holding the compiled console
    pub static_dir: PathBuf,
}

impl GatewayConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AgentError::Config(format!("{key} is not set")))
        };
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let groq = GroqConfig::new(required("GROQ_API_KEY")?)
            .with_base_url(optional("GROQ_BASE_URL", groq::DEFAULT_BASE_URL));
        let tavily = TavilyConfig::new(required("TAVILY_API_KEY")?, SEARCH_MAX_RESULTS)
            .with_base_url(optional("TAVILY_BASE_URL", tavily::DEFAULT_BASE_URL));

        Ok(Self {
            groq,
            tavily,
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
            static_dir: PathBuf::from(optional("STATIC_DIR", DEFAULT_STATIC_DIR)),
        })
    }
}
