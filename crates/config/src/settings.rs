//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{bible, confidence, embedding, endpoints, intent, matching, search, semantic};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Relaxed validation, warnings only
    #[default]
    Development,
    Staging,
    /// All validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Resolution thresholds and confidences
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Intent classification
    #[serde(default)]
    pub intent: IntentConfig,

    /// Embedding service for semantic search
    #[serde(default)]
    pub embedding: EmbeddingServiceConfig,

    /// Bible text and topic data
    #[serde(default)]
    pub bible: BibleDataConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_resolver()?;
        self.validate_intent()?;
        self.validate_embedding()?;
        self.validate_bible_data()?;
        Ok(())
    }

    fn validate_resolver(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;

        let unit_fields = [
            ("resolver.phrase_overlap_ratio", resolver.phrase_overlap_ratio),
            ("resolver.semantic_threshold", resolver.semantic_threshold),
            ("resolver.famous_phrase_confidence", resolver.famous_phrase_confidence),
            ("resolver.book_only_confidence", resolver.book_only_confidence),
            ("resolver.detailed_confidence", resolver.detailed_confidence),
            ("resolver.translation_bonus", resolver.translation_bonus),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Must be between 0.0 and 1.0, got {}", value),
                });
            }
        }

        if resolver.phrase_overlap_ratio == 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.phrase_overlap_ratio".to_string(),
                message: "Must be greater than 0.0".to_string(),
            });
        }

        if resolver.book_only_confidence > resolver.detailed_confidence {
            return Err(ConfigError::InvalidValue {
                field: "resolver.book_only_confidence".to_string(),
                message: format!(
                    "Must not exceed detailed_confidence ({})",
                    resolver.detailed_confidence
                ),
            });
        }

        if resolver.semantic_top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.semantic_top_k".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if resolver.keyword_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.keyword_limit".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    fn validate_intent(&self) -> Result<(), ConfigError> {
        let intent = &self.intent;

        if intent.short_command_word_limit > intent.narrative_word_limit {
            return Err(ConfigError::InvalidValue {
                field: "intent.short_command_word_limit".to_string(),
                message: format!(
                    "Must not exceed narrative_word_limit ({})",
                    intent.narrative_word_limit
                ),
            });
        }

        if let Some(blank) = intent.custom_wake_words.iter().position(|w| w.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("intent.custom_wake_words[{}]", blank),
                message: "Wake words cannot be blank".to_string(),
            });
        }

        Ok(())
    }

    fn validate_embedding(&self) -> Result<(), ConfigError> {
        let embedding = &self.embedding;
        if !embedding.enabled {
            return Ok(());
        }

        if embedding.dim == 0 {
            return Err(ConfigError::InvalidValue {
                field: "embedding.dim".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if embedding.provider == EmbeddingProvider::Ollama
            && !(embedding.endpoint.starts_with("http://")
                || embedding.endpoint.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "embedding.endpoint".to_string(),
                message: format!("Expected an http(s) URL, got '{}'", embedding.endpoint),
            });
        }

        Ok(())
    }

    fn validate_bible_data(&self) -> Result<(), ConfigError> {
        let data_dir = Path::new(&self.bible.data_dir);
        if !data_dir.exists() {
            if self.environment.is_strict() {
                return Err(ConfigError::FileNotFound(self.bible.data_dir.clone()));
            }
            tracing::warn!(
                path = %data_dir.display(),
                "Bible data directory does not exist; keyword search will be unavailable"
            );
        }

        if let Some(topics_file) = &self.bible.topics_file {
            if !Path::new(topics_file).exists() {
                return Err(ConfigError::FileNotFound(topics_file.clone()));
            }
        }

        Ok(())
    }
}

/// Resolution thresholds and confidence values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Share of a famous phrase's words needed for a fuzzy hit
    #[serde(default = "default_phrase_overlap_ratio")]
    pub phrase_overlap_ratio: f32,

    #[serde(default = "default_famous_phrase_confidence")]
    pub famous_phrase_confidence: f32,

    /// Structured parse that only resolved a book
    #[serde(default = "default_book_only_confidence")]
    pub book_only_confidence: f32,

    /// Structured parse with chapter or verse beyond 1
    #[serde(default = "default_detailed_confidence")]
    pub detailed_confidence: f32,

    #[serde(default = "default_translation_bonus")]
    pub translation_bonus: f32,

    /// Cosine similarity a semantic hit must exceed
    #[serde(default = "default_semantic_threshold")]
    pub semantic_threshold: f32,

    #[serde(default = "default_semantic_top_k")]
    pub semantic_top_k: usize,

    /// Maximum keyword search hits
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,

    /// Consult the question-answering service for complex queries
    #[serde(default = "default_true")]
    pub question_answering_enabled: bool,
}

fn default_phrase_overlap_ratio() -> f32 {
    matching::PHRASE_OVERLAP_RATIO
}
fn default_famous_phrase_confidence() -> f32 {
    confidence::FAMOUS_PHRASE
}
fn default_book_only_confidence() -> f32 {
    confidence::BOOK_ONLY
}
fn default_detailed_confidence() -> f32 {
    confidence::DETAILED
}
fn default_translation_bonus() -> f32 {
    confidence::TRANSLATION_BONUS
}
fn default_semantic_threshold() -> f32 {
    semantic::SIMILARITY_THRESHOLD
}
fn default_semantic_top_k() -> usize {
    semantic::TOP_K
}
fn default_keyword_limit() -> usize {
    search::KEYWORD_LIMIT
}
fn default_true() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            phrase_overlap_ratio: default_phrase_overlap_ratio(),
            famous_phrase_confidence: default_famous_phrase_confidence(),
            book_only_confidence: default_book_only_confidence(),
            detailed_confidence: default_detailed_confidence(),
            translation_bonus: default_translation_bonus(),
            semantic_threshold: default_semantic_threshold(),
            semantic_top_k: default_semantic_top_k(),
            keyword_limit: default_keyword_limit(),
            question_answering_enabled: true,
        }
    }
}

/// Intent classification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentConfig {
    /// Merged with the built-in wake words at classification time
    #[serde(default)]
    pub custom_wake_words: Vec<String>,

    #[serde(default = "default_narrative_word_limit")]
    pub narrative_word_limit: usize,

    #[serde(default = "default_short_command_word_limit")]
    pub short_command_word_limit: usize,
}

fn default_narrative_word_limit() -> usize {
    intent::NARRATIVE_WORD_LIMIT
}
fn default_short_command_word_limit() -> usize {
    intent::SHORT_COMMAND_WORD_LIMIT
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            custom_wake_words: Vec::new(),
            narrative_word_limit: default_narrative_word_limit(),
            short_command_word_limit: default_short_command_word_limit(),
        }
    }
}

/// Embedding backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    /// Ollama embedding API
    #[default]
    Ollama,
    /// Hashed bag-of-words, no model needed
    Simple,
}

/// Embedding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingServiceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub provider: EmbeddingProvider,

    #[serde(default = "default_embedding_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_embedding_model")]
    pub model: String,

    #[serde(default = "default_embedding_dim")]
    pub dim: usize,
}

fn default_embedding_endpoint() -> String {
    endpoints::OLLAMA_DEFAULT.to_string()
}
fn default_embedding_model() -> String {
    embedding::DEFAULT_MODEL.to_string()
}
fn default_embedding_dim() -> usize {
    embedding::DEFAULT_DIM
}

impl Default for EmbeddingServiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: EmbeddingProvider::default(),
            endpoint: default_embedding_endpoint(),
            model: default_embedding_model(),
            dim: default_embedding_dim(),
        }
    }
}

/// Where Bible text and topic data come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BibleDataConfig {
    /// Directory holding `{translation}.json` files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_translation")]
    pub default_translation: String,

    /// Optional YAML topic index replacing the built-in one
    #[serde(default)]
    pub topics_file: Option<String>,
}

fn default_data_dir() -> String {
    bible::DEFAULT_DATA_DIR.to_string()
}
fn default_translation() -> String {
    bible::DEFAULT_TRANSLATION.to_string()
}

impl Default for BibleDataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_translation: default_translation(),
            topics_file: None,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (VOICE_BIBLE__ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Same as [`load_settings`] with an explicit config directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let env_path = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("VOICE_BIBLE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        translation = %settings.bible.default_translation,
        "Settings loaded"
    );

    Ok(settings)
}
