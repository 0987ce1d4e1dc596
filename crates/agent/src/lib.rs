//! Spoken scripture request handling
//!
//! Features:
//! - Staged resolution: famous phrase, structured reference, topic,
//!   question answering, keyword search, semantic search
//! - Transcript routing through the intent classifier
//! - Tracing subscriber setup from configuration

pub mod command;
pub mod resolver;
pub mod telemetry;

pub use command::{CommandOutcome, CommandRouter};
pub use resolver::{Resolution, ResolutionStage, Resolver};
pub use telemetry::init_tracing;

use thiserror::Error;
use voice_bible_config::ConfigError;
use voice_bible_rag::RagError;
use voice_bible_text_processing::TextProcessingError;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] voice_bible_core::Error),

    #[error("Retrieval error: {0}")]
    Rag(#[from] RagError),

    #[error("Topic data error: {0}")]
    Topics(#[from] TextProcessingError),

    #[error("Not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl AgentError {
    /// True when a reference named a chapter or verse the text does not have
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            AgentError::Collaborator(voice_bible_core::Error::OutOfRange(_))
                | AgentError::Rag(RagError::OutOfRange(_))
        )
    }
}
