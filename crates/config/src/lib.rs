//! Configuration management for voice-driven scripture lookup
//!
//! Supports loading configuration from:
//! - YAML/TOML files (config/default.*, config/{env}.*)
//! - Environment variables (VOICE_BIBLE__ prefix)
//!
//! Tuning values used by the parser and resolver live in [`constants`] and
//! are the defaults of [`ResolverConfig`].

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, BibleDataConfig, EmbeddingProvider, EmbeddingServiceConfig,
    IntentConfig, ObservabilityConfig, ResolverConfig, RuntimeEnvironment, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
