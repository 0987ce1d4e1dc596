//! Reference parsing for spoken and typed scripture requests
//!
//! This crate turns noisy utterances into structured references:
//! - **Lexicon**: books, famous phrases, translations and topics
//! - **Normalization**: spoken numbers, ordinals, filler removal
//! - **Extraction**: translation names, books, chapter and verse
//! - **Recognition**: famous phrases, topic queries, free-text references
//! - **Classification**: wake-word intent and complex-query detection
//!
//! Parsing is synchronous and pure. Malformed input yields `None` or
//! a default, never an error.
//!
//! # Example
//!
//! ```
//! use voice_bible_text_processing::{smart_parse, match_famous_phrase};
//!
//! let result = smart_parse("Romans eight twenty eight").unwrap();
//! assert_eq!(result.reference.to_string(), "Romans 8:28");
//!
//! let reference = match_famous_phrase("the lord is my shepherd").unwrap();
//! assert_eq!(reference.to_string(), "Psalms 23:1");
//! ```

pub mod books;
pub mod chapter_verse;
pub mod cleaner;
pub mod complex_query;
pub mod intent;
pub mod lexicon;
pub mod numbers;
pub mod parser;
pub mod phrases;
pub mod references;
pub mod topics;
pub mod translation;

mod error;

pub use error::{Result, TextProcessingError};

pub use books::{find_book, BookMatch};
pub use chapter_verse::{extract_chapter_verse, ChapterVerse};
pub use cleaner::{clean, tokenize};
pub use complex_query::is_complex_query;
pub use intent::{classify_intent, IntentClassifier, IntentKind, IntentResult, DEFAULT_WAKE_WORDS};
pub use numbers::word_to_number;
pub use parser::{parse_reference, smart_parse, ParserConfig, SmartParser};
pub use phrases::{match_famous_phrase, PhraseMatch, PhraseMatchKind, PhraseMatcher};
pub use references::extract_references;
pub use topics::{extract_topic_keyword, is_topic_query, TopicHit, TopicIndex};
pub use translation::{extract_translation, TranslationMatch};
