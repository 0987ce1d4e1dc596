//! Text processing errors
//!
//! Only loading user-supplied data can fail. Parsing an utterance never
//! returns an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Topic index error: {0}")]
    TopicIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TextProcessingError> for voice_bible_core::Error {
    fn from(err: TextProcessingError) -> Self {
        match err {
            TextProcessingError::Io(e) => voice_bible_core::Error::Io(e),
            other => voice_bible_core::Error::Config(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
