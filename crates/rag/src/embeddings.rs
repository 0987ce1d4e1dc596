//! Offline text embeddings
//!
//! A hashed bag-of-words embedder that needs no model files or network. Texts
//! sharing words land close together, which is enough for tests and for
//! running without an embedding service.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;
use voice_bible_config::constants::embedding::DEFAULT_DIM;
use voice_bible_core::{EmbeddingModel, Result};

/// Embedding configuration
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Embedding dimension
    pub embedding_dim: usize,
    /// Normalize embeddings to unit length
    pub normalize: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_DIM,
            normalize: true,
        }
    }
}

/// Hash-based embedder for tests and offline use
pub struct SimpleEmbedder {
    config: EmbeddingConfig,
}

impl SimpleEmbedder {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self { config }
    }

    /// Generate a hashed bag-of-words embedding
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let dim = self.config.embedding_dim.max(1);
        let mut embedding = vec![0.0f32; dim];

        for word in text.unicode_words() {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let idx = (hasher.finish() % dim as u64) as usize;
            embedding[idx] += 1.0;
        }

        if self.config.normalize {
            let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm > 0.0 {
                for v in &mut embedding {
                    *v /= norm;
                }
            }
        }

        embedding
    }
}

impl Default for SimpleEmbedder {
    fn default() -> Self {
        Self::new(EmbeddingConfig::default())
    }
}

#[async_trait]
impl EmbeddingModel for SimpleEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.embed_text(text))
    }

    fn model_name(&self) -> &str {
        "hashed-bow"
    }
}
