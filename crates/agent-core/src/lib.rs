//! # agent-core
//!
//! Core agent logic shared by the chat gateway and the chat console.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐  ChatRequest   ┌──────────────────────────────────────────┐
//! │ Chat Console  │ ─────────────► │ Chat Gateway                             │
//! │ (ChatOutcome) │ ◄───────────── │  allow-list ─► Agent                     │
//! └───────────────┘   ChatReply    │   ┌─────────────┐  ┌──────────────────┐  │
//!                                  │   │  Reasoning  │──│ ToolRegistry     │  │
//!                                  │   │    Loop     │──│ LlmProvider      │  │
//!                                  │   └─────────────┘  └──────────────────┘  │
//!                                  └──────────────────────────────────────────┘
//! ```
//!
//! Modules used by the browser console (`models`, `transcript`, `outcome`)
//! avoid any runtime-specific dependency so this crate also builds for wasm32.

pub mod error;
pub mod message;
pub mod models;
pub mod outcome;
pub mod provider;
pub mod reasoning;
pub mod tool;
pub mod transcript;

pub use error::{AgentError, Result};
pub use message::{Message, Role};
pub use models::{SUPPORTED_MODELS, is_supported};
pub use outcome::ChatOutcome;
pub use provider::LlmProvider;
pub use reasoning::{Agent, AgentBuilder};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
pub use transcript::{ChatReply, ChatRequest, ChatResult};
