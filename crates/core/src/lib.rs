//! Core traits and types for voice-driven scripture lookup
//!
//! This crate provides foundational types used across all other crates:
//! - Verse references, verse text and search matches
//! - Topic index entries
//! - Parse results produced by the reference parser
//! - Transcript updates coming from a speech-to-text engine
//! - Collaborator traits (verse store, embedding model, question answering)
//! - Error types

pub mod error;
pub mod reference;
pub mod topic;
pub mod traits;
pub mod transcript;

pub use error::{Error, Result};
pub use reference::{SmartParseResult, VerseMatch, VerseReference, VerseText};
pub use topic::{TopicEntry, TopicVerse};
pub use transcript::TranscriptUpdate;

pub use traits::{Answer, EmbeddingModel, QuestionAnswerer, VerseStore};
