//! Chat client for the generation model.
//!
//! One synchronous round trip per call against the Ollama chat API. No
//! retries, no timeouts, no streaming.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StylistError};

/// Default Ollama endpoint when `OLLAMA_HOST` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// A role-tagged chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`user`, `assistant`, `system`).
    pub role: String,

    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Client for the Ollama chat API.
#[derive(Debug)]
pub struct ChatClient {
    /// API base URL.
    base_url: String,

    /// HTTP client.
    client: reqwest::Client,

    /// Model identifier.
    model: String,
}

impl ChatClient {
    /// Create a new chat client. The base URL comes from the `OLLAMA_HOST`
    /// environment variable when set.
    pub fn new() -> Self {
        Self {
            base_url: std::env::var("OLLAMA_HOST")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
            model: crate::config::DEFAULT_CHAT_MODEL.to_string(),
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send messages to the chat model and return the generated text
    /// verbatim.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String> {
        debug!("Sending {} messages to model: {}", messages.len(), self.model);

        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
        });

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StylistError::ChatApi(format!("API error: {error_text}")));
        }

        let result: OllamaChatResponse = response.json().await?;

        let content = result
            .message
            .map(|m| m.content)
            .ok_or_else(|| {
                StylistError::InvalidChatResponse("no message in response".to_string())
            })?;

        Ok(content)
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Ollama chat API response format.
#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Option<OllamaChatMessage>,
}

#[derive(Debug, Deserialize)]
struct OllamaChatMessage {
    content: String,
}
