//! Embedding providers.
//!
//! The only concrete provider talks to a local Ollama server, but the
//! trait keeps the engine testable with deterministic in-process providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Embedding;
use crate::error::{EmbeddingError, Result};

/// Default Ollama endpoint when `OLLAMA_HOST` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default embedding model.
const DEFAULT_MODEL: &str = "all-minilm";

/// Request for generating an embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Text to embed.
    pub text: String,

    /// Model to use; `None` selects the provider default.
    pub model: Option<String>,
}

impl EmbeddingRequest {
    /// Create a new embedding request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
        }
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from embedding generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The generated embedding.
    pub embedding: Embedding,

    /// Model used to generate the embedding.
    pub model: String,

    /// Dimension of the embedding.
    pub dimension: usize,
}

/// Trait for embedding providers.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Get the default model for this provider.
    fn default_model(&self) -> &str;

    /// Get the default embedding dimension.
    fn default_dimension(&self) -> usize;

    /// Generate an embedding for the given text.
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse>;

    /// Generate embeddings for multiple texts, one call per text.
    async fn embed_batch(&self, requests: Vec<EmbeddingRequest>) -> Result<Vec<EmbeddingResponse>> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(self.embed(request).await?);
        }
        Ok(results)
    }
}

/// Ollama embedding provider.
pub struct OllamaProvider {
    /// API base URL.
    base_url: String,

    /// HTTP client.
    client: reqwest::Client,

    /// Default model.
    default_model: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider. The base URL comes from the
    /// `OLLAMA_HOST` environment variable when set.
    pub fn new() -> Self {
        Self {
            base_url: std::env::var("OLLAMA_HOST")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn default_dimension(&self) -> usize {
        crate::DEFAULT_DIMENSION
    }

    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
        let model = request.model.unwrap_or_else(|| self.default_model.clone());

        debug!("Generating embedding with model: {model}");

        let body = serde_json::json!({
            "model": model,
            "prompt": request.text,
        });

        let response = self
            .client
            .post(format!("{}/api/embeddings", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ApiRequest(format!(
                "API error: {error_text}"
            )));
        }

        let result: OllamaEmbeddingResponse = response.json().await?;

        if result.embedding.is_empty() {
            return Err(EmbeddingError::InvalidResponse(
                "empty embedding in response".to_string(),
            ));
        }

        let dimension = result.embedding.len();
        info!("Generated embedding with {dimension} dimensions");

        Ok(EmbeddingResponse {
            embedding: result.embedding,
            model,
            dimension,
        })
    }
}

/// Ollama API response format.
#[derive(Debug, Deserialize)]
struct OllamaEmbeddingResponse {
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_embedding_request_builder() {
        let request = EmbeddingRequest::new("blue jeans").with_model("all-minilm");

        assert_eq!(request.text, "blue jeans");
        assert_eq!(request.model, Some("all-minilm".to_string()));
    }

    #[tokio::test]
    async fn test_ollama_embed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .and(body_partial_json(serde_json::json!({
                "model": "all-minilm",
                "prompt": "blue jeans",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "embedding": [0.1, 0.2, 0.3],
            })))
            .mount(&server)
            .await;

        let provider = OllamaProvider::new().with_base_url(server.uri());
        let response = provider
            .embed(EmbeddingRequest::new("blue jeans"))
            .await
            .unwrap();

        assert_eq!(response.embedding, vec![0.1, 0.2, 0.3]);
        assert_eq!(response.dimension, 3);
        assert_eq!(response.model, "all-minilm");
    }

    #[tokio::test]
    async fn test_ollama_embed_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model not found"))
            .mount(&server)
            .await;

        let provider = OllamaProvider::new().with_base_url(server.uri());
        let err = provider
            .embed(EmbeddingRequest::new("anything"))
            .await
            .unwrap_err();

        assert!(matches!(err, EmbeddingError::ApiRequest(ref m) if m.contains("model not found")));
    }

    #[tokio::test]
    async fn test_ollama_embed_empty_vector() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "embedding": [],
            })))
            .mount(&server)
            .await;

        let provider = OllamaProvider::new().with_base_url(server.uri());
        let err = provider
            .embed(EmbeddingRequest::new("anything"))
            .await
            .unwrap_err();

        assert!(matches!(err, EmbeddingError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_embed_batch_is_sequential_per_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "embedding": [1.0],
            })))
            .expect(3)
            .mount(&server)
            .await;

        let provider = OllamaProvider::new().with_base_url(server.uri());
        let requests = vec![
            EmbeddingRequest::new("a"),
            EmbeddingRequest::new("b"),
            EmbeddingRequest::new("c"),
        ];

        let responses = provider.embed_batch(requests).await.unwrap();
        assert_eq!(responses.len(), 3);
    }
}
