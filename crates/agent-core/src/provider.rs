//! LLM Provider Strategy Pattern
//!
//! Defines a common interface for hosted LLM providers so the agent works with
//! any backend without code changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_core::provider::{GenerationOptions, LlmProvider};
//!
//! let provider = GroqProvider::new(config)?;
//! let completion = provider.complete(&messages, &options).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;
use crate::models::DEFAULT_MODEL;

/// Configuration for LLM generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "llama-3.3-70b-versatile")
    pub model: String,

    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Top-p nucleus sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    #[serde(default)]
    pub stop_sequences: Vec<String>,
}

const fn default_temperature() -> f32 { 0.7 }
const fn default_max_tokens() -> u32 { 2048 }
const fn default_top_p() -> f32 { 0.9 }

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            stop_sequences: Vec::new(),
        }
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    pub content: String,

    /// Model that generated this response
    pub model: String,

    pub usage: Option<TokenUsage>,

    /// Whether the response was truncated
    pub truncated: bool,

    pub finish_reason: Option<FinishReason>,
}

impl Completion {
    /// Plain completion that stopped normally
    pub fn text(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            usage: None,
            truncated: false,
            finish_reason: Some(FinishReason::Stop),
        }
    }
}

/// Token usage statistics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Reason for completion finishing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolUse,
    ContentFilter,
    Error,
}

/// Information about a model
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub context_length: Option<u32>,
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new LLM backends.
/// The agent works exclusively through this interface.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Check if the provider is reachable and the credentials are accepted
    async fn health_check(&self) -> Result<bool>;

    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion>;

    /// List models the provider serves
    async fn list_models(&self) -> Result<Vec<ModelInfo>>;
}

/// Canned provider for tests in this and downstream crates
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{Completion, GenerationOptions, LlmProvider, ModelInfo};
    use crate::error::{AgentError, Result};
    use crate::message::Message;

    /// A single recorded `complete` call
    #[derive(Clone, Debug)]
    pub struct RecordedCall {
        pub messages: Vec<Message>,
        pub options: GenerationOptions,
    }

    /// Replays queued completions in order and records every call
    #[derive(Default)]
    pub struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl ScriptedProvider {
        pub fn new<I, S>(replies: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Provider whose first call fails with `error`
        pub fn failing(error: AgentError) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from([Err(error)])),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().map(|c| c.len()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            messages: &[Message],
            options: &GenerationOptions,
        ) -> Result<Completion> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(RecordedCall {
                    messages: messages.to_vec(),
                    options: options.clone(),
                });
            }

            let next = self
                .replies
                .lock()
                .map_err(|_| AgentError::Other("scripted provider poisoned".into()))?
                .pop_front()
                .ok_or_else(|| AgentError::Provider("no scripted reply left".into()))?;

            next.map(|content| Completion::text(content, options.model.clone()))
        }

        async fn list_models(&self) -> Result<Vec<ModelInfo>> {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert!((opts.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(opts.max_tokens, 2048);
        assert_eq!(opts.model, "llama-3.3-70b-versatile");
    }

    #[tokio::test]
    async fn test_scripted_provider_replays_in_order() {
        let provider = mock::ScriptedProvider::new(["one", "two"]);
        let opts = GenerationOptions::default();

        let first = provider.complete(&[Message::user("a")], &opts).await.unwrap();
        let second = provider.complete(&[Message::user("b")], &opts).await.unwrap();

        assert_eq!(first.content, "one");
        assert_eq!(second.content, "two");
        assert_eq!(provider.call_count(), 2);
        assert!(provider.complete(&[], &opts).await.is_err());
    }
}
