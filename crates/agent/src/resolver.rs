//! Resolution orchestrator
//!
//! Turns one utterance into a [`Resolution`] by trying each stage in turn:
//!
//! ```text
//! famous phrase → structured reference → topic → question answering
//!     → keyword search → semantic search → no match
//! ```
//!
//! The first stage that succeeds wins and no stage is retried. Stages run
//! one after another, never concurrently. A collaborator error is logged and
//! counts as that stage failing.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use voice_bible_config::{ResolverConfig, Settings};
use voice_bible_core::{
    QuestionAnswerer, SmartParseResult, TopicVerse, VerseMatch, VerseReference, VerseStore,
    VerseText,
};
use voice_bible_rag::{
    embedding_model_from_config, InMemoryVerseStore, SemanticMatch, SemanticSearch,
    SemanticSearchConfig,
};
use voice_bible_text_processing::{
    extract_references, is_complex_query, parse_reference, ParserConfig, PhraseMatcher,
    SmartParser, TopicIndex,
};

use crate::AgentError;

/// Which stage produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionStage {
    FamousPhraseHit,
    StructuredReference,
    TopicHit,
    AnswerHit,
    KeywordHit,
    SemanticHit,
    NoMatch,
}

impl ResolutionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStage::FamousPhraseHit => "FAMOUS_PHRASE_HIT",
            ResolutionStage::StructuredReference => "STRUCTURED_REFERENCE",
            ResolutionStage::TopicHit => "TOPIC_HIT",
            ResolutionStage::AnswerHit => "ANSWER_HIT",
            ResolutionStage::KeywordHit => "KEYWORD_HIT",
            ResolutionStage::SemanticHit => "SEMANTIC_HIT",
            ResolutionStage::NoMatch => "NO_MATCH",
        }
    }
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one utterance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    FamousPhraseHit {
        reference: VerseReference,
        phrase: &'static str,
        confidence: f32,
    },
    StructuredReference(SmartParseResult),
    TopicHit {
        topic: String,
        /// "Love: 6 verses"
        label: String,
        /// Lead verse of the topic
        reference: VerseReference,
        verses: Vec<TopicVerse>,
    },
    AnswerHit {
        answer: String,
        /// First parsed reference
        reference: VerseReference,
        references: Vec<VerseReference>,
    },
    KeywordHit {
        query: String,
        matches: Vec<VerseMatch>,
    },
    SemanticHit {
        reference: VerseReference,
        /// "87% match"
        label: String,
        score: f32,
        matches: Vec<SemanticMatch>,
    },
    NoMatch,
}

impl Resolution {
    pub fn stage(&self) -> ResolutionStage {
        match self {
            Resolution::FamousPhraseHit { .. } => ResolutionStage::FamousPhraseHit,
            Resolution::StructuredReference(_) => ResolutionStage::StructuredReference,
            Resolution::TopicHit { .. } => ResolutionStage::TopicHit,
            Resolution::AnswerHit { .. } => ResolutionStage::AnswerHit,
            Resolution::KeywordHit { .. } => ResolutionStage::KeywordHit,
            Resolution::SemanticHit { .. } => ResolutionStage::SemanticHit,
            Resolution::NoMatch => ResolutionStage::NoMatch,
        }
    }

    /// Reference to display, if the stage produced one
    pub fn reference(&self) -> Option<&VerseReference> {
        match self {
            Resolution::FamousPhraseHit { reference, .. }
            | Resolution::TopicHit { reference, .. }
            | Resolution::AnswerHit { reference, .. }
            | Resolution::SemanticHit { reference, .. } => Some(reference),
            Resolution::StructuredReference(result) => Some(&result.reference),
            Resolution::KeywordHit { matches, .. } => matches.first().map(|m| &m.reference),
            Resolution::NoMatch => None,
        }
    }

    /// Stage confidence. Topic, answer and keyword hits carry none.
    pub fn confidence(&self) -> Option<f32> {
        match self {
            Resolution::FamousPhraseHit { confidence, .. } => Some(*confidence),
            Resolution::StructuredReference(result) => Some(result.confidence),
            Resolution::SemanticHit { score, .. } => Some(*score),
            _ => None,
        }
    }

    /// Translation named in the utterance, for structured references
    pub fn translation_id(&self) -> Option<&str> {
        match self {
            Resolution::StructuredReference(result) => result.translation_id.as_deref(),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Resolution::NoMatch)
    }
}

/// Staged resolver with injected collaborators.
///
/// Parsing stages always run. Question answering, keyword and semantic
/// stages run only when their collaborator is configured.
pub struct Resolver {
    config: ResolverConfig,
    phrases: PhraseMatcher,
    parser: SmartParser,
    topics: TopicIndex,
    store: Option<Arc<dyn VerseStore>>,
    semantic: Option<Arc<SemanticSearch>>,
    answerer: Option<Arc<dyn QuestionAnswerer>>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            phrases: PhraseMatcher::new(config.phrase_overlap_ratio),
            parser: SmartParser::new(ParserConfig::from(&config)),
            topics: TopicIndex::builtin(),
            store: None,
            semantic: None,
            answerer: None,
            config,
        }
    }

    /// Build from loaded settings: verse store for the default translation,
    /// optional topic file, and semantic search when embeddings are enabled.
    pub fn from_settings(settings: &Settings) -> Result<Self, AgentError> {
        let mut resolver = Self::new(settings.resolver.clone());

        if let Some(path) = &settings.bible.topics_file {
            resolver = resolver.with_topics(TopicIndex::load(path)?);
        }

        let store = InMemoryVerseStore::load_translation(
            &settings.bible.data_dir,
            &settings.bible.default_translation,
        )?;
        resolver = resolver.with_verse_store(Arc::new(store));

        if settings.embedding.enabled {
            let model = embedding_model_from_config(&settings.embedding);
            let search = SemanticSearch::new(model, SemanticSearchConfig::from(&settings.resolver));
            resolver = resolver.with_semantic_search(Arc::new(search));
        }

        tracing::info!(
            translation = %settings.bible.default_translation,
            topics = resolver.topics.len(),
            semantic = resolver.semantic.is_some(),
            "Resolver ready"
        );
        Ok(resolver)
    }

    pub fn with_topics(mut self, topics: TopicIndex) -> Self {
        self.topics = topics;
        self
    }

    pub fn with_verse_store(mut self, store: Arc<dyn VerseStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_semantic_search(mut self, semantic: Arc<SemanticSearch>) -> Self {
        self.semantic = Some(semantic);
        self
    }

    pub fn with_question_answerer(mut self, answerer: Arc<dyn QuestionAnswerer>) -> Self {
        self.answerer = Some(answerer);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn topics(&self) -> &TopicIndex {
        &self.topics
    }

    /// Warm up the model-backed collaborators ahead of the first utterance
    pub async fn init(&self) -> Result<(), AgentError> {
        if let Some(semantic) = &self.semantic {
            semantic.init().await?;
        }
        if let Some(answerer) = &self.answerer {
            answerer.init().await?;
        }
        Ok(())
    }

    /// Run every stage in order until one succeeds
    pub async fn resolve(&self, utterance: &str) -> Resolution {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Resolution::NoMatch;
        }

        let resolution = match self.resolve_direct(utterance) {
            Some(resolution) => resolution,
            None => self.resolve_fallback(utterance).await,
        };

        if let (Some(answerer), Some(reference)) = (&self.answerer, resolution.reference()) {
            answerer.set_context(&[reference.to_string()]);
        }

        tracing::info!(
            utterance = %utterance,
            stage = %resolution.stage(),
            reference = ?resolution.reference().map(|r| r.to_string()),
            "Utterance resolved"
        );
        resolution
    }

    /// Famous-phrase and structured-reference stages only.
    ///
    /// Synchronous and side-effect free.
    pub fn resolve_direct(&self, utterance: &str) -> Option<Resolution> {
        if let Some(hit) = self.phrases.find(utterance) {
            tracing::debug!(phrase = hit.phrase.phrase, kind = ?hit.kind, "Famous phrase matched");
            return Some(Resolution::FamousPhraseHit {
                reference: hit.reference(),
                phrase: hit.phrase.phrase,
                confidence: self.config.famous_phrase_confidence,
            });
        }

        self.parser
            .parse(utterance)
            .map(Resolution::StructuredReference)
    }

    async fn resolve_fallback(&self, utterance: &str) -> Resolution {
        if let Some(resolution) = self.resolve_topic(utterance) {
            return resolution;
        }
        if let Some(resolution) = self.resolve_answer(utterance).await {
            return resolution;
        }
        if let Some(resolution) = self.resolve_keyword(utterance).await {
            return resolution;
        }
        if let Some(resolution) = self.resolve_semantic(utterance).await {
            return resolution;
        }
        Resolution::NoMatch
    }

    fn resolve_topic(&self, utterance: &str) -> Option<Resolution> {
        let hit = self.topics.lookup(utterance)?;
        let Some(lead) = hit.entry.lead_verse() else {
            tracing::debug!(topic = %hit.entry.topic, "Topic has no verses");
            return None;
        };

        Some(Resolution::TopicHit {
            topic: hit.entry.topic.clone(),
            label: hit.label(),
            reference: lead.to_reference(),
            verses: hit.entry.verses.clone(),
        })
    }

    async fn resolve_answer(&self, utterance: &str) -> Option<Resolution> {
        let answerer = self.answerer.as_ref()?;
        if !self.config.question_answering_enabled || !is_complex_query(utterance) {
            return None;
        }

        let answer = match answerer.ask(utterance).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Question answering failed, falling through");
                return None;
            },
        };

        let written = if answer.references.is_empty() {
            extract_references(&answer.answer)
        } else {
            answer.references
        };

        let mut references: Vec<VerseReference> = Vec::new();
        for reference in written.iter().filter_map(|r| parse_reference(r)) {
            if !references.contains(&reference) {
                references.push(reference);
            }
        }

        let Some(reference) = references.first().cloned() else {
            tracing::debug!(written = written.len(), "Answer carried no usable reference");
            return None;
        };

        Some(Resolution::AnswerHit {
            answer: answer.answer,
            reference,
            references,
        })
    }

    async fn resolve_keyword(&self, utterance: &str) -> Option<Resolution> {
        let store = self.store.as_ref()?;
        match store.search_text(utterance, self.config.keyword_limit).await {
            Ok(matches) if !matches.is_empty() => Some(Resolution::KeywordHit {
                query: utterance.to_string(),
                matches,
            }),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Keyword search failed, falling through");
                None
            },
        }
    }

    async fn resolve_semantic(&self, utterance: &str) -> Option<Resolution> {
        let semantic = self.semantic.as_ref()?;
        let matches = match semantic.search(utterance).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "Semantic search failed, falling through");
                return None;
            },
        };

        let best = matches.first()?;
        let reference = best.verse_reference()?;
        let label = best.label();
        let score = best.score;

        Some(Resolution::SemanticHit {
            reference,
            label,
            score,
            matches,
        })
    }

    /// Load a resolved chapter from the verse store.
    ///
    /// References are not bounds-checked while parsing, so an out-of-range
    /// chapter shows up here as a store error.
    pub async fn fetch_chapter(&self, reference: &VerseReference) -> Result<Vec<VerseText>, AgentError> {
        let store = self
            .store
            .as_ref()
            .ok_or(AgentError::NotConfigured("verse store"))?;
        Ok(store.get_chapter(&reference.book, reference.chapter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parsing_stages_without_collaborators() {
        let resolver = Resolver::default();

        let resolution = resolver.resolve("the lord is my shepherd").await;
        assert_eq!(resolution.stage(), ResolutionStage::FamousPhraseHit);
        assert_eq!(resolution.confidence(), Some(0.95));

        let resolution = resolver.resolve("Genesis").await;
        assert_eq!(resolution.stage(), ResolutionStage::StructuredReference);
        assert_eq!(resolution.reference(), Some(&VerseReference::new("Genesis", 1, 1)));

        let resolution = resolver.resolve("verses about hope").await;
        assert_eq!(resolution.stage(), ResolutionStage::TopicHit);
        assert_eq!(resolution.confidence(), None);
    }

    #[tokio::test]
    async fn test_no_match() {
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve("um so like okay").await, Resolution::NoMatch);
        assert_eq!(resolver.resolve("   ").await, Resolution::NoMatch);
        assert!(!Resolution::NoMatch.is_match());
    }

    #[test]
    fn test_resolve_direct_skips_fallbacks() {
        let resolver = Resolver::default();
        assert!(resolver.resolve_direct("verses about love").is_none());

        let resolution = resolver.resolve_direct("John 3:16 kjv").unwrap();
        assert_eq!(resolution.translation_id(), Some("kjv"));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(ResolutionStage::KeywordHit.to_string(), "KEYWORD_HIT");
        assert_eq!(
            serde_json::to_string(&ResolutionStage::SemanticHit).unwrap(),
            "\"SEMANTIC_HIT\""
        );

        let json = serde_json::to_value(Resolution::NoMatch).unwrap();
        assert_eq!(json["stage"], "NO_MATCH");
    }

    #[test]
    fn test_configured_phrase_confidence() {
        let resolver = Resolver::new(ResolverConfig {
            famous_phrase_confidence: 0.8,
            ..ResolverConfig::default()
        });
        let resolution = resolver.resolve_direct("for god so loved the world").unwrap();
        assert_eq!(resolution.confidence(), Some(0.8));
        assert_eq!(resolution.reference(), Some(&VerseReference::new("John", 3, 16)));
    }

    #[tokio::test]
    async fn test_fetch_chapter_without_store() {
        let resolver = Resolver::default();
        let err = resolver
            .fetch_chapter(&VerseReference::new("John", 3, 16))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::NotConfigured(_)));
    }
}
