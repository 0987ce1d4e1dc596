//! Retrieval for scripture lookup
//!
//! Features:
//! - Semantic search over a curated set of popular verses
//! - Embedding adapters: Ollama HTTP API and an offline hashed embedder
//! - Embedding cache, filled once per model
//! - In-memory verse store loaded from translation JSON files
//! - Keyword search over verse text

pub mod curated;
pub mod embeddings;
pub mod ollama_embeddings;
pub mod semantic;
pub mod verse_store;

pub use curated::{CuratedVerse, POPULAR_VERSES};
pub use embeddings::{EmbeddingConfig, SimpleEmbedder};
pub use ollama_embeddings::{OllamaEmbedder, OllamaEmbeddingConfig};
pub use semantic::{cosine_similarity, SemanticMatch, SemanticSearch, SemanticSearchConfig};
pub use verse_store::{InMemoryVerseStore, TranslationMetadata};

use std::sync::Arc;

use thiserror::Error;
use voice_bible_config::{EmbeddingProvider, EmbeddingServiceConfig};
use voice_bible_core::EmbeddingModel;

/// RAG errors
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RagError> for voice_bible_core::Error {
    fn from(err: RagError) -> Self {
        match err {
            RagError::Embedding(msg) | RagError::Connection(msg) => {
                voice_bible_core::Error::Embedding(msg)
            },
            RagError::OutOfRange(msg) => voice_bible_core::Error::OutOfRange(msg),
            RagError::Io(e) => voice_bible_core::Error::Io(e),
            other => voice_bible_core::Error::VerseStore(other.to_string()),
        }
    }
}

impl From<voice_bible_core::Error> for RagError {
    fn from(err: voice_bible_core::Error) -> Self {
        match err {
            voice_bible_core::Error::OutOfRange(msg) => RagError::OutOfRange(msg),
            voice_bible_core::Error::Io(e) => RagError::Io(e),
            other => RagError::Embedding(other.to_string()),
        }
    }
}

/// Build the embedding model named by the service configuration
pub fn embedding_model_from_config(config: &EmbeddingServiceConfig) -> Arc<dyn EmbeddingModel> {
    match config.provider {
        EmbeddingProvider::Ollama => Arc::new(OllamaEmbedder::new(OllamaEmbeddingConfig {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            embedding_dim: config.dim,
        })),
        EmbeddingProvider::Simple => Arc::new(SimpleEmbedder::new(EmbeddingConfig {
            embedding_dim: config.dim,
            ..EmbeddingConfig::default()
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err: voice_bible_core::Error = RagError::OutOfRange("John has only 21 chapters.".into()).into();
        assert!(matches!(err, voice_bible_core::Error::OutOfRange(_)));

        let err: voice_bible_core::Error = RagError::Connection("refused".into()).into();
        assert!(matches!(err, voice_bible_core::Error::Embedding(_)));
    }

    #[test]
    fn test_model_from_config() {
        let config = EmbeddingServiceConfig {
            provider: EmbeddingProvider::Simple,
            dim: 64,
            ..EmbeddingServiceConfig::default()
        };
        let model = embedding_model_from_config(&config);
        assert_eq!(model.model_name(), "hashed-bow");

        let model = embedding_model_from_config(&EmbeddingServiceConfig::default());
        assert_eq!(model.model_name(), voice_bible_config::constants::embedding::DEFAULT_MODEL);
    }
}
