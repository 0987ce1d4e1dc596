//! Error types shared across crates

use thiserror::Error;

/// Errors raised by collaborators (verse store, embedding model, question answering).
///
/// Parsing never produces one of these: malformed input yields `None` or a
/// default instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Verse store error: {0}")]
    VerseStore(String),

    #[error("Reference out of range: {0}")]
    OutOfRange(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Question answering error: {0}")]
    QuestionAnswering(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
