//! Verse references and related values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single verse, identified by canonical book name, chapter and verse.
///
/// Chapter and verse are 1-based and default to 1 when the input did not
/// mention them. Bounds are not checked here; that is the verse store's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseReference {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseReference {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.max(1),
            verse: verse.max(1),
        }
    }

    /// Reference to the first verse of a book
    pub fn book_start(book: impl Into<String>) -> Self {
        Self::new(book, 1, 1)
    }

    /// True when more than a bare book name was resolved
    pub fn is_specific(&self) -> bool {
        self.chapter > 1 || self.verse > 1
    }
}

impl fmt::Display for VerseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Verse text as returned by a verse store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseText {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    /// Set on the requested verse when context verses surround it
    #[serde(default)]
    pub is_target: bool,
}

impl VerseText {
    pub fn reference(&self) -> VerseReference {
        VerseReference::new(self.book.clone(), self.chapter, self.verse)
    }
}

/// A keyword search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseMatch {
    pub reference: VerseReference,
    pub text: String,
}

/// Result of parsing an utterance into a structured reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartParseResult {
    pub reference: VerseReference,
    /// Translation named in the utterance, e.g. `kjv`
    pub translation_id: Option<String>,
    /// Heuristic certainty in [0, 1]
    pub confidence: f32,
    /// Tokens left after translation removal and cleaning, space-joined
    pub cleaned_input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_display() {
        let reference = VerseReference::new("John", 3, 16);
        assert_eq!(reference.to_string(), "John 3:16");

        let reference = VerseReference::new("1 Corinthians", 13, 4);
        assert_eq!(reference.to_string(), "1 Corinthians 13:4");
    }

    #[test]
    fn test_reference_defaults_to_one() {
        let reference = VerseReference::new("Genesis", 0, 0);
        assert_eq!(reference.chapter, 1);
        assert_eq!(reference.verse, 1);
        assert!(!reference.is_specific());

        assert_eq!(VerseReference::book_start("Ruth").to_string(), "Ruth 1:1");
    }

    #[test]
    fn test_is_specific() {
        assert!(VerseReference::new("Psalms", 23, 1).is_specific());
        assert!(VerseReference::new("Jude", 1, 3).is_specific());
    }

    #[test]
    fn test_parse_result_serializes() {
        let result = SmartParseResult {
            reference: VerseReference::new("John", 3, 16),
            translation_id: Some("kjv".to_string()),
            confidence: 0.95,
            cleaned_input: "john 3:16".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"translation_id\":\"kjv\""));
        let back: SmartParseResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
