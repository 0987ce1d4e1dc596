//! Semantic search over the curated verse subset
//!
//! Corpus embeddings are computed once per search service, either by an
//! explicit [`SemanticSearch::init`] or lazily by the first search, and kept
//! in memory. Queries are embedded on every call.

use std::cmp::Ordering;
use std::sync::Arc;

use futures::future::try_join_all;
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::Mutex;
use voice_bible_config::constants::semantic::{SIMILARITY_THRESHOLD, TOP_K};
use voice_bible_config::ResolverConfig;
use voice_bible_core::{EmbeddingModel, VerseReference};

use crate::curated::{CuratedVerse, POPULAR_VERSES};
use crate::RagError;

/// Ranking parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticSearchConfig {
    /// Results must score strictly above this
    pub threshold: f32,
    /// Results kept after ranking
    pub top_k: usize,
}

impl Default for SemanticSearchConfig {
    fn default() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
            top_k: TOP_K,
        }
    }
}

impl From<&ResolverConfig> for SemanticSearchConfig {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            threshold: config.semantic_threshold,
            top_k: config.semantic_top_k,
        }
    }
}

/// A curated verse scored against a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticMatch {
    /// Written reference, e.g. "Psalm 23:1"
    pub reference: String,
    pub text: String,
    /// Cosine similarity
    pub score: f32,
}

impl SemanticMatch {
    pub fn verse_reference(&self) -> Option<VerseReference> {
        voice_bible_text_processing::parse_reference(&self.reference)
    }

    /// "87% match"
    pub fn label(&self) -> String {
        format!("{}% match", (self.score * 100.0).round() as i32)
    }
}

/// Embedding-backed search over a fixed verse corpus
pub struct SemanticSearch {
    model: Arc<dyn EmbeddingModel>,
    corpus: Vec<CuratedVerse>,
    config: SemanticSearchConfig,
    index: RwLock<Option<Arc<Vec<Vec<f32>>>>>,
    init_lock: Mutex<()>,
}

impl SemanticSearch {
    /// Search over the built-in popular verses
    pub fn new(model: Arc<dyn EmbeddingModel>, config: SemanticSearchConfig) -> Self {
        Self::with_corpus(model, POPULAR_VERSES.to_vec(), config)
    }

    pub fn with_corpus(
        model: Arc<dyn EmbeddingModel>,
        corpus: Vec<CuratedVerse>,
        config: SemanticSearchConfig,
    ) -> Self {
        Self {
            model,
            corpus,
            config,
            index: RwLock::new(None),
            init_lock: Mutex::new(()),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.index.read().is_some()
    }

    pub fn config(&self) -> &SemanticSearchConfig {
        &self.config
    }

    /// Initialize the model and embed the corpus. Safe to call repeatedly;
    /// only the first successful call does any work.
    pub async fn init(&self) -> Result<(), RagError> {
        self.ensure_index().await.map(|_| ())
    }

    async fn ensure_index(&self) -> Result<Arc<Vec<Vec<f32>>>, RagError> {
        let cached = self.index.read().clone();
        if let Some(index) = cached {
            return Ok(index);
        }

        let _guard = self.init_lock.lock().await;
        let cached = self.index.read().clone();
        if let Some(index) = cached {
            return Ok(index);
        }

        self.model.init().await?;
        let embeddings = try_join_all(self.corpus.iter().map(|verse| self.model.embed(verse.text)))
            .await?;

        if embeddings.iter().any(|e| e.is_empty()) {
            return Err(RagError::Index("model returned an empty embedding".to_string()));
        }

        let index = Arc::new(embeddings);
        *self.index.write() = Some(index.clone());
        tracing::info!(
            model = self.model.model_name(),
            verses = self.corpus.len(),
            "Semantic index ready"
        );
        Ok(index)
    }

    /// Rank corpus verses against `query`.
    ///
    /// Sorted by score descending, truncated to `top_k`, then filtered to
    /// scores strictly above the threshold. An empty result is not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<SemanticMatch>, RagError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let index = self.ensure_index().await?;
        let query_embedding = self.model.embed(query).await?;

        let mut scored: Vec<(usize, f32)> = index
            .iter()
            .enumerate()
            .map(|(i, embedding)| (i, cosine_similarity(&query_embedding, embedding)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let results: Vec<SemanticMatch> = scored
            .into_iter()
            .take(self.config.top_k)
            .filter(|(_, score)| *score > self.config.threshold)
            .map(|(i, score)| SemanticMatch {
                reference: self.corpus[i].reference.to_string(),
                text: self.corpus[i].text.to_string(),
                score,
            })
            .collect();

        tracing::debug!(
            query = %query,
            results = results.len(),
            best = results.first().map(|r| r.score),
            "Semantic search complete"
        );
        Ok(results)
    }
}

/// Cosine similarity; 0.0 for mismatched lengths or zero vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::SimpleEmbedder;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    struct CountingEmbedder {
        inner: SimpleEmbedder,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EmbeddingModel for CountingEmbedder {
        async fn embed(&self, text: &str) -> voice_bible_core::Result<Vec<f32>> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(self.inner.embed_text(text))
        }

        fn model_name(&self) -> &str {
            "counting"
        }
    }

    struct FailingEmbedder;

    #[async_trait]
    impl EmbeddingModel for FailingEmbedder {
        async fn embed(&self, _text: &str) -> voice_bible_core::Result<Vec<f32>> {
            Err(voice_bible_core::Error::Embedding("model offline".to_string()))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn search_service() -> SemanticSearch {
        SemanticSearch::new(Arc::new(SimpleEmbedder::default()), SemanticSearchConfig::default())
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[tokio::test]
    async fn test_search_finds_best_verse() {
        let search = search_service();
        let results = search.search("jesus wept").await.unwrap();

        assert!(!results.is_empty());
        assert_eq!(results[0].reference, "John 11:35");
        assert!(results[0].score > 0.9);
        assert_eq!(results[0].verse_reference(), Some(VerseReference::new("John", 11, 35)));
    }

    #[tokio::test]
    async fn test_results_sorted_and_bounded() {
        let search = search_service();
        let results = search.search("the lord is my shepherd i shall not want").await.unwrap();

        assert!(results.len() <= 3);
        assert_eq!(results[0].reference, "Psalm 23:1");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for result in &results {
            assert!(result.score > 0.25);
        }
    }

    #[tokio::test]
    async fn test_threshold_filters_everything() {
        let search = SemanticSearch::new(
            Arc::new(SimpleEmbedder::default()),
            SemanticSearchConfig {
                threshold: 0.999,
                top_k: 3,
            },
        );
        let results = search.search("quantum chromodynamics lecture").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_corpus_embedded_once() {
        let embedder = Arc::new(CountingEmbedder {
            inner: SimpleEmbedder::default(),
            calls: AtomicUsize::new(0),
        });
        let search = SemanticSearch::new(embedder.clone(), SemanticSearchConfig::default());

        assert!(!search.is_ready());
        search.init().await.unwrap();
        assert!(search.is_ready());
        assert_eq!(embedder.calls.load(AtomicOrdering::SeqCst), 13);

        search.search("grace").await.unwrap();
        search.search("faith").await.unwrap();
        search.init().await.unwrap();
        // 13 corpus embeddings plus one per query
        assert_eq!(embedder.calls.load(AtomicOrdering::SeqCst), 15);
    }

    #[tokio::test]
    async fn test_empty_query() {
        let search = search_service();
        assert!(search.search("   ").await.unwrap().is_empty());
        assert!(!search.is_ready());
    }

    #[tokio::test]
    async fn test_model_failure_is_error() {
        let search = SemanticSearch::new(Arc::new(FailingEmbedder), SemanticSearchConfig::default());
        assert!(search.search("anything").await.is_err());
        assert!(!search.is_ready());
    }

    #[test]
    fn test_label() {
        let m = SemanticMatch {
            reference: "John 3:16".to_string(),
            text: String::new(),
            score: 0.874,
        };
        assert_eq!(m.label(), "87% match");
    }
}
