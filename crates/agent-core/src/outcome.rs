//! Console Outcomes
//!
//! Maps a gateway response to what the chat console displays. Kept free of
//! browser types so it is testable natively.

use serde_json::Value;

/// Shown when the console submits with an empty message box
pub const EMPTY_INPUT_WARNING: &str = "Please enter a message before clicking 'Submit'.";

/// Shown when the transcript has no AI entry
pub const NO_AI_RESPONSE: &str = "No AI response found in the agent output.";

/// How the console should style an outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Result of one console submit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Content of the last AI message
    Answer(String),
    /// Transcript contained no AI message
    NoAnswer,
    /// Gateway answered 200 with an `error` key
    GatewayError(String),
    /// Gateway answered with a non-200 status
    HttpStatus(u16),
    /// Request never completed or body was not JSON
    Transport(String),
    /// Nothing to send; no request was made
    EmptyInput,
}

impl ChatOutcome {
    /// Validate console input before any network call
    pub fn check_input(input: &str) -> Option<Self> {
        input.trim().is_empty().then_some(Self::EmptyInput)
    }

    /// Interpret a gateway response
    pub fn from_response(status: u16, body: &Value) -> Self {
        if status != 200 {
            return Self::HttpStatus(status);
        }

        if let Some(error) = body.get("error") {
            let text = error
                .as_str()
                .map_or_else(|| error.to_string(), ToString::to_string);
            return Self::GatewayError(text);
        }

        let last_ai = body
            .get("messages")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter(|m| m.get("type").and_then(Value::as_str) == Some("ai"))
            .last();

        match last_ai {
            Some(message) => Self::Answer(
                message
                    .get("content")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            ),
            None => Self::NoAnswer,
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::Answer(_) => Severity::Success,
            Self::NoAnswer | Self::EmptyInput => Severity::Warning,
            Self::GatewayError(_) | Self::HttpStatus(_) | Self::Transport(_) => Severity::Error,
        }
    }

    /// Text the console renders
    pub fn display_text(&self) -> String {
        match self {
            Self::Answer(content) => format!("Final Response: {content}"),
            Self::NoAnswer => NO_AI_RESPONSE.into(),
            Self::GatewayError(error) => error.clone(),
            Self::HttpStatus(status) => format!("Request failed with status code {status}."),
            Self::Transport(error) => format!("An error occurred: {error}"),
            Self::EmptyInput => EMPTY_INPUT_WARNING.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_is_last_ai_message() {
        let body = json!({
            "messages": [
                {"type": "human", "content": "What is 2+2?"},
                {"type": "ai", "content": "4"}
            ]
        });
        let outcome = ChatOutcome::from_response(200, &body);
        assert_eq!(outcome, ChatOutcome::Answer("4".into()));
        assert_eq!(outcome.display_text(), "Final Response: 4");
        assert_eq!(outcome.severity(), Severity::Success);
    }

    #[test]
    fn test_later_ai_entries_override_earlier() {
        let body = json!({
            "messages": [
                {"type": "ai", "content": "first"},
                {"type": "tool", "content": "[]"},
                {"type": "ai", "content": "second"},
                {"type": "human", "content": "trailing"}
            ]
        });
        assert_eq!(
            ChatOutcome::from_response(200, &body),
            ChatOutcome::Answer("second".into())
        );
    }

    #[test]
    fn test_no_ai_message() {
        let body = json!({"messages": [{"type": "human", "content": "hi"}]});
        let outcome = ChatOutcome::from_response(200, &body);
        assert_eq!(outcome, ChatOutcome::NoAnswer);
        assert!(!outcome.display_text().is_empty());

        assert_eq!(ChatOutcome::from_response(200, &json!({})), ChatOutcome::NoAnswer);
    }

    #[test]
    fn test_gateway_error_key() {
        let body = json!({"error": "Unsupported model name"});
        let outcome = ChatOutcome::from_response(200, &body);
        assert_eq!(outcome.display_text(), "Unsupported model name");
        assert_eq!(outcome.severity(), Severity::Error);
    }

    #[test]
    fn test_non_200_reports_status() {
        let body = json!({"error": "ignored", "code": "AGENT_ERROR"});
        let outcome = ChatOutcome::from_response(500, &body);
        assert_eq!(outcome, ChatOutcome::HttpStatus(500));
        assert_eq!(outcome.display_text(), "Request failed with status code 500.");
    }

    #[test]
    fn test_missing_content_is_empty_answer() {
        let body = json!({"messages": [{"type": "ai"}]});
        assert_eq!(ChatOutcome::from_response(200, &body), ChatOutcome::Answer(String::new()));
    }

    #[test]
    fn test_check_input() {
        assert_eq!(ChatOutcome::check_input(""), Some(ChatOutcome::EmptyInput));
        assert_eq!(ChatOutcome::check_input("  \n\t"), Some(ChatOutcome::EmptyInput));
        assert_eq!(ChatOutcome::check_input("hi"), None);
        assert_eq!(ChatOutcome::EmptyInput.severity(), Severity::Warning);
    }
}
