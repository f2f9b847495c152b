//! Chat Transcript Contract
//!
//! Typed request/response shapes that cross the gateway boundary. The console
//! posts a [`ChatRequest`] and the gateway answers with a [`ChatReply`].

use serde::{Deserialize, Serialize};

use crate::message::{Conversation, Role};

/// Error text returned for a model outside the allow-list
pub const UNSUPPORTED_MODEL: &str = "Unsupported model name";

/// Body of `POST /chat`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model_name: String,
    pub system_prompt: String,
    pub messages: Vec<String>,
}

/// Author tag of a transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Human,
    Ai,
    Tool,
}

impl MessageType {
    /// System messages are internal to the agent and have no transcript tag
    pub const fn from_role(role: Role) -> Option<Self> {
        match role {
            Role::User => Some(Self::Human),
            Role::Assistant => Some(Self::Ai),
            Role::Tool => Some(Self::Tool),
            Role::System => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub content: String,
}

impl TranscriptMessage {
    pub fn new(kind: MessageType, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// Result of one agent turn, in conversation order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    pub messages: Vec<TranscriptMessage>,
}

impl ChatResult {
    /// Normalize an agent conversation, dropping system messages
    pub fn from_conversation(conversation: &Conversation) -> Self {
        let messages = conversation
            .messages()
            .iter()
            .filter_map(|m| {
                MessageType::from_role(m.role).map(|kind| TranscriptMessage::new(kind, m.content.clone()))
            })
            .collect();
        Self { messages }
    }

    /// Content of the last AI-authored entry
    pub fn final_ai_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.kind == MessageType::Ai)
            .map(|m| m.content.as_str())
    }
}

/// Envelope returned with HTTP 200 from `POST /chat`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    Rejected { error: String },
    Completed(ChatResult),
}

impl ChatReply {
    pub fn unsupported_model() -> Self {
        Self::Rejected {
            error: UNSUPPORTED_MODEL.into(),
        }
    }
}
