//! # agent-runtime
//!
//! Hosted integrations for the agent-chat gateway.
//!
//! ## Integrations
//!
//! - **Groq**: `LlmProvider` over the OpenAI-compatible chat completions API
//! - **Tavily**: web search `Tool`, capped at a fixed number of results
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::{GroqConfig, GroqProvider, TavilyConfig, TavilySearchTool};
//!
//! let provider = GroqProvider::new(GroqConfig::new(groq_key))?;
//! let mut tools = ToolRegistry::new();
//! tools.register(TavilySearchTool::new(TavilyConfig::new(tavily_key, 3))?);
//! ```

pub mod groq;
pub mod tavily;

pub use groq::{GroqConfig, GroqProvider};
pub use tavily::{TavilyConfig, TavilySearchTool};

// Re-export core types for convenience
pub use agent_core::{Agent, AgentError, LlmProvider, Message, Result, Role, Tool, ToolRegistry};
