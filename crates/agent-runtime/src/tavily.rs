//! Tavily Web Search Tool
//!
//! Exposes Tavily's search API to the agent as `tavily_search_results_json`.

use agent_core::{
    error::{AgentError, Result},
    tool::{ParameterSchema, Tool, ToolCall, ToolResult, ToolSchema},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";
pub const TOOL_NAME: &str = "tavily_search_results_json";

/// Tavily tool configuration
#[derive(Clone, Debug)]
pub struct TavilyConfig {
    pub api_key: String,
    pub base_url: String,

    /// Upper bound on results handed back to the agent
    pub max_results: usize,
}

impl TavilyConfig {
    pub fn new(api_key: impl Into<String>, max_results: usize) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            max_results,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<WireResult>,
}

#[derive(Deserialize)]
struct WireResult {
    url: String,
    #[serde(default)]
    content: String,
}

/// A single search hit as shown to the model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub content: String,
}

pub struct TavilySearchTool {
    client: Client,
    config: TavilyConfig,
}

impl TavilySearchTool {
    pub fn new(config: TavilyConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AgentError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Run a search, returning at most `max_results` hits
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let request = SearchRequest {
            api_key: &self.config.api_key,
            query,
            max_results: self.config.max_results,
        };

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::ToolExecution(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::ToolExecution(format!("Tavily returned {status}: {body}")));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Parse(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .take(self.config.max_results)
            .map(|r| SearchHit {
                url: r.url,
                content: r.content,
            })
            .collect())
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: TOOL_NAME.into(),
            description: "A search engine optimized for comprehensive, accurate, and trusted results. \
                Useful for answering questions about current events. Input should be a search query."
                .into(),
            parameters: vec![ParameterSchema {
                name: "query".into(),
                param_type: "string".into(),
                description: "Search query to look up".into(),
                required: true,
            }],
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let query = call
            .arguments
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentError::ToolValidation("query must be a string".into()))?;

        tracing::debug!(query, "Tavily search");

        match self.search(query).await {
            Ok(hits) => {
                let data = serde_json::to_value(&hits)?;
                Ok(ToolResult::success(TOOL_NAME, data.to_string()).with_data(data))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tavily search failed");
                Ok(ToolResult::failure(TOOL_NAME, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool(server: &MockServer) -> TavilySearchTool {
        TavilySearchTool::new(TavilyConfig::new("tvly-test", 3).with_base_url(server.uri())).unwrap()
    }

    fn call(arguments: serde_json::Value) -> ToolCall {
        serde_json::from_value(json!({"tool": TOOL_NAME, "arguments": arguments})).unwrap()
    }

    #[tokio::test]
    async fn test_search_caps_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({"api_key": "tvly-test", "query": "rust", "max_results": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"url": "https://a.example", "content": "a", "score": 0.9},
                    {"url": "https://b.example", "content": "b", "score": 0.8},
                    {"url": "https://c.example", "content": "c", "score": 0.7},
                    {"url": "https://d.example", "content": "d", "score": 0.6}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool(&server).execute(&call(json!({"query": "rust"}))).await.unwrap();

        assert!(result.success);
        let hits: Vec<SearchHit> = serde_json::from_value(result.data.unwrap()).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].url, "https://a.example");
    }

    #[tokio::test]
    async fn test_http_failure_is_failed_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = tool(&server).execute(&call(json!({"query": "rust"}))).await.unwrap();
        assert!(!result.success);
        assert!(result.output.contains("401"));
    }

    #[tokio::test]
    async fn test_non_string_query_rejected() {
        let server = MockServer::start().await;
        let err = tool(&server).execute(&call(json!({"query": 7}))).await.unwrap_err();
        assert!(matches!(err, AgentError::ToolValidation(_)));
    }

    #[test]
    fn test_schema() {
        let tool = TavilySearchTool::new(TavilyConfig::new("k", 3)).unwrap();
        let schema = tool.schema();
        assert_eq!(schema.name, TOOL_NAME);
        assert!(schema.parameters[0].required);
        assert_eq!(tool.config.max_results, 3);
    }
}
