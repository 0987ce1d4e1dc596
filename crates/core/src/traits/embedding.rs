//! Embedding model trait

use async_trait::async_trait;

use crate::Result;

/// Text embedding backend
///
/// Implementations:
/// - `OllamaEmbedder` - HTTP embedding API
/// - `SimpleEmbedder` - hashed bag-of-words, no model required
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Prepare the model (download, warm-up). Called once before first use.
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}
