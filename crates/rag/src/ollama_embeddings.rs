//! Ollama Embeddings
//!
//! Uses Ollama's embedding API (`POST {endpoint}/api/embed`) for dense vectors.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use voice_bible_config::constants::{embedding, endpoints};
use voice_bible_core::EmbeddingModel;

use crate::RagError;

/// Ollama embedding configuration
#[derive(Debug, Clone)]
pub struct OllamaEmbeddingConfig {
    /// Ollama API endpoint
    pub endpoint: String,
    /// Model name
    pub model: String,
    /// Embedding dimension
    pub embedding_dim: usize,
}

impl Default for OllamaEmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: endpoints::OLLAMA_DEFAULT.to_string(),
            model: embedding::DEFAULT_MODEL.to_string(),
            embedding_dim: embedding::DEFAULT_DIM,
        }
    }
}

/// Request to Ollama embedding API
#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

/// Response from Ollama embedding API
#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Ollama embedder
pub struct OllamaEmbedder {
    client: Client,
    config: OllamaEmbeddingConfig,
}

impl OllamaEmbedder {
    /// Create a new Ollama embedder
    pub fn new(config: OllamaEmbeddingConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self) -> String {
        format!("{}/api/embed", self.config.endpoint.trim_end_matches('/'))
    }

    /// Embed a single text
    pub async fn embed_text(&self, text: &str) -> Result<Vec<f32>, RagError> {
        let request = EmbedRequest {
            model: &self.config.model,
            input: text,
        };

        let response = self
            .client
            .post(self.url())
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Connection(format!("Ollama request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(RagError::Embedding(format!(
                "Ollama embedding failed: {} - {}",
                status, text
            )));
        }

        let embed_response: EmbedResponse = response
            .json()
            .await
            .map_err(|e| RagError::Embedding(format!("Failed to parse Ollama response: {}", e)))?;

        let embedding = embed_response
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| RagError::Embedding("No embedding returned".to_string()))?;

        if embedding.len() != self.config.embedding_dim {
            tracing::warn!(
                model = %self.config.model,
                expected = self.config.embedding_dim,
                actual = embedding.len(),
                "Embedding dimension differs from configuration"
            );
        }

        Ok(embedding)
    }
}

#[async_trait]
impl EmbeddingModel for OllamaEmbedder {
    async fn embed(&self, text: &str) -> voice_bible_core::Result<Vec<f32>> {
        Ok(self.embed_text(text).await?)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
