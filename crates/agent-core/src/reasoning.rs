//! Reasoning Loop
//!
//! Implements the ReAct (Reason + Act) pattern for agent behavior.
//! The agent observes, thinks, acts (via tools), and responds.

use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::message::{Conversation, Message};
use crate::provider::{GenerationOptions, LlmProvider};
use crate::tool::{ToolCall, ToolRegistry, ToolResult};
use crate::transcript::ChatResult;

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Persona / instructions supplied by the caller
    pub system_prompt: String,

    /// Maximum reasoning iterations before giving up
    pub max_iterations: usize,

    pub generation: GenerationOptions,

    /// Whether to append tool descriptions to system prompt
    pub inject_tool_descriptions: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_iterations: 10,
            generation: GenerationOptions::default(),
            inject_tool_descriptions: true,
        }
    }
}

/// Persona used when no system prompt is configured on the builder
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Be concise and accurate.";

/// The main Agent struct
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    tools: Arc<ToolRegistry>,
    config: AgentConfig,
}

impl Agent {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        tools: Arc<ToolRegistry>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    /// Caller's prompt, verbatim, followed by the tool section
    fn build_system_prompt(&self) -> String {
        let mut prompt = self.config.system_prompt.clone();

        if self.config.inject_tool_descriptions && !self.tools.is_empty() {
            if !prompt.is_empty() {
                prompt.push_str("\n\n");
            }
            prompt.push_str(&self.tools.generate_prompt_section());
        }

        prompt
    }

    /// Run one turn with `messages` as the initial state
    ///
    /// Each string becomes a user message. Returns the whole transcript,
    /// including intermediate tool calls, with the final answer last.
    pub async fn invoke(&self, messages: &[String]) -> Result<ChatResult> {
        let mut conversation = Conversation::with_system_prompt(self.build_system_prompt());
        for text in messages {
            conversation.push(Message::user(text.as_str()));
        }

        tracing::debug!(
            model = %self.config.generation.model,
            inputs = messages.len(),
            "Invoking agent"
        );

        self.run(&mut conversation).await?;
        Ok(ChatResult::from_conversation(&conversation))
    }

    /// Reasoning loop; stops when the model answers without a tool call
    async fn run(&self, conversation: &mut Conversation) -> Result<()> {
        for iteration in 1..=self.config.max_iterations {
            let completion = self
                .provider
                .complete(conversation.messages(), &self.config.generation)
                .await?;

            tracing::debug!(
                iteration,
                finish_reason = ?completion.finish_reason,
                total_tokens = completion.usage.as_ref().map(|u| u.total_tokens),
                "Completion received"
            );
            if completion.truncated {
                tracing::warn!(model = %completion.model, "Completion truncated at max_tokens");
            }

            let content = completion.content;
            let tool_call = Self::parse_tool_call(&content);
            conversation.push(Message::assistant(content).with_model(completion.model));

            let Some(tool_call) = tool_call else {
                return Ok(());
            };

            tracing::debug!(tool = %tool_call.name, "Executing tool");

            let result = self.execute_tool(&tool_call).await;
            conversation.push(Message::tool(
                Self::format_tool_result(&result),
                result.name.clone(),
                tool_call.id.clone(),
            ));
        }

        Err(AgentError::MaxIterations(self.config.max_iterations))
    }

    /// Parse a tool call from LLM response
    fn parse_tool_call(content: &str) -> Option<ToolCall> {
        const TOOL_START: &str = "```tool";
        const TOOL_END: &str = "```";

        if let Some(start_idx) = content.find(TOOL_START) {
            let after_marker = &content[start_idx + TOOL_START.len()..];
            if let Some(end_idx) = after_marker.find(TOOL_END) {
                let json_str = after_marker[..end_idx].trim();

                if let Ok(mut call) = serde_json::from_str::<ToolCall>(json_str) {
                    if call.id.is_none() {
                        call.id = Some(uuid::Uuid::new_v4().to_string());
                    }
                    return Some(call);
                }
            }
        }

        Self::parse_inline_tool_call(content)
    }

    /// Try to parse inline JSON tool call
    fn parse_inline_tool_call(content: &str) -> Option<ToolCall> {
        if !content.contains(r#""tool""#) {
            return None;
        }

        let start = content.find('{')?;
        let end = content.rfind('}')?;

        if end <= start {
            return None;
        }

        let mut call = serde_json::from_str::<ToolCall>(&content[start..=end]).ok()?;
        call.id.get_or_insert_with(|| uuid::Uuid::new_v4().to_string());
        Some(call)
    }

    /// Execute a tool call; failures are reported back to the model
    async fn execute_tool(&self, call: &ToolCall) -> ToolResult {
        match self.tools.execute(call).await {
            Ok(mut result) => {
                result.id.clone_from(&call.id);
                result
            }
            Err(e) => {
                tracing::warn!(tool = %call.name, error = %e, "Tool call failed");
                ToolResult {
                    name: call.name.clone(),
                    id: call.id.clone(),
                    success: false,
                    output: format!("Error: {e}"),
                    data: None,
                }
            }
        }
    }

    fn format_tool_result(result: &ToolResult) -> String {
        if result.success {
            format!("[Tool '{}' returned]\n{}", result.name, result.output)
        } else {
            format!("[Tool '{}' failed]\n{}", result.name, result.output)
        }
    }
}

/// Builder for Agent configuration
pub struct AgentBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    tools: Arc<ToolRegistry>,
    config: AgentConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            tools: Arc::new(ToolRegistry::new()),
            config: AgentConfig::default(),
        }
    }

    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Share an already-built registry
    #[must_use]
    pub fn tools(mut self, tools: Arc<ToolRegistry>) -> Self {
        self.tools = tools;
        self
    }

    #[must_use]
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.generation.model = model.into();
        self
    }

    #[must_use]
    pub const fn max_iterations(mut self, max: usize) -> Self {
        self.config.max_iterations = max;
        self
    }

    pub fn build(self) -> Result<Agent> {
        let provider = self
            .provider
            .ok_or_else(|| AgentError::Config("Provider is required".into()))?;

        Ok(Agent::new(provider, self.tools, self.config))
    }
}
