//! Smart reference parser
//!
//! Chains translation extraction, cleaning, book matching and chapter/verse
//! extraction into one structured result with a confidence score.
//!
//! # Example
//!
//! ```
//! use voice_bible_text_processing::parser::SmartParser;
//!
//! let parser = SmartParser::default();
//! let result = parser.parse("hey bible, show me first john three sixteen").unwrap();
//!
//! assert_eq!(result.reference.to_string(), "1 John 3:16");
//! assert!(result.confidence >= 0.9);
//! ```

use voice_bible_config::constants::confidence;
use voice_bible_config::ResolverConfig;
use voice_bible_core::{SmartParseResult, VerseReference};

use crate::books::find_book;
use crate::chapter_verse::extract_chapter_verse;
use crate::cleaner::{clean, tokenize};
use crate::translation::extract_translation;

/// Confidence model for structured parses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserConfig {
    /// Only a book was resolved
    pub book_only_confidence: f32,
    /// Chapter or verse beyond 1 was resolved
    pub detailed_confidence: f32,
    /// Added when a translation was named
    pub translation_bonus: f32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            book_only_confidence: confidence::BOOK_ONLY,
            detailed_confidence: confidence::DETAILED,
            translation_bonus: confidence::TRANSLATION_BONUS,
        }
    }
}

impl From<&ResolverConfig> for ParserConfig {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            book_only_confidence: config.book_only_confidence,
            detailed_confidence: config.detailed_confidence,
            translation_bonus: config.translation_bonus,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmartParser {
    config: ParserConfig,
}

impl SmartParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an utterance into a reference.
    ///
    /// `None` when the input is empty, is all filler, or names no book.
    pub fn parse(&self, input: &str) -> Option<SmartParseResult> {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return None;
        }

        let translation = extract_translation(&tokens);
        let cleaned = clean(&translation.remaining);
        if cleaned.is_empty() {
            tracing::debug!(input = %input, "Nothing left after cleaning");
            return None;
        }

        let book = find_book(&cleaned)?;
        let position = extract_chapter_verse(&book.remaining);
        let reference = VerseReference::new(book.book, position.chapter, position.verse);

        let mut confidence = if reference.is_specific() {
            self.config.detailed_confidence
        } else {
            self.config.book_only_confidence
        };
        if translation.translation_id.is_some() {
            confidence = (confidence + self.config.translation_bonus).min(1.0);
        }

        tracing::debug!(
            reference = %reference,
            translation = ?translation.translation_id,
            confidence,
            "Parsed structured reference"
        );

        Some(SmartParseResult {
            reference,
            translation_id: translation.translation_id,
            confidence,
            cleaned_input: cleaned.join(" "),
        })
    }
}

/// Parse with the default confidence model
pub fn smart_parse(input: &str) -> Option<SmartParseResult> {
    SmartParser::default().parse(input)
}

/// Parse a written reference such as "Psalm 23:1" or "Matthew 14:25-33".
///
/// Range ends are dropped; the reference points at the first verse.
pub fn parse_reference(text: &str) -> Option<VerseReference> {
    let cleaned = clean(&tokenize(text));
    let book = find_book(&cleaned)?;
    let position = extract_chapter_verse(&book.remaining);
    Some(VerseReference::new(book.book, position.chapter, position.verse))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(result: &SmartParseResult) -> String {
        result.reference.to_string()
    }

    #[test]
    fn test_colon_references() {
        for (input, expected) in [
            ("John 3:16", "John 3:16"),
            ("Gen 1:1", "Genesis 1:1"),
            ("1 Cor 13:4", "1 Corinthians 13:4"),
            ("Song of Solomon 2:4", "Song of Solomon 2:4"),
            ("Rev 22:20", "Revelation 22:20"),
            ("psalm 23.1", "Psalms 23:1"),
            ("John 3,16", "John 3:16"),
            ("John 3, 16", "John 3:16"),
        ] {
            let result = smart_parse(input).unwrap();
            assert_eq!(reference(&result), expected, "input {}", input);
            assert!(result.confidence >= 0.9);
        }
    }

    #[test]
    fn test_spoken_reference() {
        let result = smart_parse("Romans eight twenty eight").unwrap();
        assert_eq!(result.reference, VerseReference::new("Romans", 8, 28));

        let result = smart_parse("first john three sixteen").unwrap();
        assert_eq!(result.reference, VerseReference::new("1 John", 3, 16));
        assert_eq!(result.cleaned_input, "first john three sixteen");
    }

    #[test]
    fn test_bare_book() {
        let result = smart_parse("Genesis").unwrap();
        assert_eq!(result.reference, VerseReference::new("Genesis", 1, 1));
        assert!((result.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_translation_bonus() {
        let result = smart_parse("John 3:16 in the king james version").unwrap();
        assert_eq!(result.reference, VerseReference::new("John", 3, 16));
        assert_eq!(result.translation_id.as_deref(), Some("kjv"));
        assert!((result.confidence - 0.95).abs() < 1e-6);
        assert_eq!(result.cleaned_input, "john 3:16");
    }

    #[test]
    fn test_confidence_capped() {
        let parser = SmartParser::new(ParserConfig {
            book_only_confidence: 0.7,
            detailed_confidence: 0.98,
            translation_bonus: 0.05,
        });
        let result = parser.parse("john 3 16 asv").unwrap();
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_filler_wrapped() {
        let result = smart_parse("hey bible can you please open up psalm twenty-three").unwrap();
        assert_eq!(result.reference, VerseReference::new("Psalms", 23, 1));
    }

    #[test]
    fn test_reparse_cleaned_input_is_stable() {
        for input in [
            "hey bible show me first john 3 16",
            "John 3:16 in the king james version",
            "Romans eight twenty eight",
            "open chapter five of matthew verse three",
        ] {
            let first = smart_parse(input).unwrap();
            let second = smart_parse(&first.cleaned_input).unwrap();
            assert_eq!(first.reference, second.reference, "input {}", input);
        }
    }

    #[test]
    fn test_unparseable() {
        assert!(smart_parse("").is_none());
        assert!(smart_parse("   ").is_none());
        assert!(smart_parse("um so like okay").is_none());
        assert!(smart_parse("what a lovely morning").is_none());
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(
            parse_reference("Matthew 14:25-33"),
            Some(VerseReference::new("Matthew", 14, 25))
        );
        assert_eq!(
            parse_reference("1 Corinthians 13:4-7"),
            Some(VerseReference::new("1 Corinthians", 13, 4))
        );
        assert_eq!(parse_reference("Psalm 23"), Some(VerseReference::new("Psalms", 23, 1)));
        assert_eq!(parse_reference("nothing here"), None);
    }
}
