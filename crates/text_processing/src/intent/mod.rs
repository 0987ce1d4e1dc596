//! Intent classification for live transcripts
//!
//! Decides whether a finalized transcript is addressed to the app (a command),
//! is ordinary speech that should be ignored (narrative), or toggles the
//! projection display (media). A wake word, a verse reference or a book name
//! is required before anything counts as a command.
//!
//! # Example
//!
//! ```
//! use voice_bible_text_processing::intent::{IntentClassifier, IntentKind};
//!
//! let classifier = IntentClassifier::default();
//! let result = classifier.classify("turn with me to John 3:16", &[]);
//!
//! assert_eq!(result.intent, IntentKind::Command);
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use voice_bible_config::constants::intent::{NARRATIVE_WORD_LIMIT, SHORT_COMMAND_WORD_LIMIT};
use voice_bible_config::IntentConfig;

use crate::cleaner::is_filler;
use crate::lexicon::BOOKS;

/// Built-in wake words; user-configured ones are merged in per call
pub const DEFAULT_WAKE_WORDS: &[&str] = &[
    "voicebible",
    "voice bible",
    "bible app",
    "scripture app",
    "hey bible",
    "okay bible",
    "bible",
    "wake up",
    "media",
];

const COMMAND_TRIGGERS: &[&str] = &[
    "open", "go to", "search", "find", "show me", "display", "read", "pull up",
];

const MEDIA_TRIGGERS: &[&str] = &["media", "project", "presentation", "screen", "display mode"];

const SCRIPTURE_PREFIXES: &[&str] = &[
    "bible says",
    "scripture says",
    "book of",
    "letter to",
    "gospel of",
];

/// Book names and abbreviations, longest first. Two-letter abbreviations and
/// ones that double as filler words ("so", "am") are left out.
static BOOK_ALTERNATION: Lazy<String> = Lazy::new(|| {
    let mut identifiers: Vec<String> = BOOKS
        .iter()
        .flat_map(|book| book.identifiers())
        .filter(|id| id.chars().count() > 2 && !is_filler(id))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    identifiers.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    identifiers
        .iter()
        .map(|id| regex::escape(id))
        .collect::<Vec<_>>()
        .join("|")
});

static VERSE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b\s+\d+(?:[:.,]\s*\d+)?", *BOOK_ALTERNATION)).unwrap()
});

static BOOK_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b({})\b", *BOOK_ALTERNATION)).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    /// Addressed to the app
    Command,
    /// Ordinary speech, not acted on
    Narrative,
    /// Projection display toggle
    Media,
    /// Nothing to classify
    Uncertain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentResult {
    pub intent: IntentKind,
    pub confidence: f32,
    pub reason: Option<&'static str>,
}

impl IntentResult {
    fn new(intent: IntentKind, confidence: f32, reason: &'static str) -> Self {
        Self {
            intent,
            confidence,
            reason: Some(reason),
        }
    }

    pub fn is_command(&self) -> bool {
        self.intent == IntentKind::Command
    }
}

/// Rule-based transcript classifier
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    narrative_word_limit: usize,
    short_command_word_limit: usize,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self {
            narrative_word_limit: NARRATIVE_WORD_LIMIT,
            short_command_word_limit: SHORT_COMMAND_WORD_LIMIT,
        }
    }
}

impl From<&IntentConfig> for IntentClassifier {
    fn from(config: &IntentConfig) -> Self {
        Self {
            narrative_word_limit: config.narrative_word_limit,
            short_command_word_limit: config.short_command_word_limit,
        }
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a transcript.
    ///
    /// `custom_wake_words` extend [`DEFAULT_WAKE_WORDS`] for this call only.
    /// Rules are checked in order and the first that applies wins.
    pub fn classify(&self, text: &str, custom_wake_words: &[String]) -> IntentResult {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return IntentResult {
                intent: IntentKind::Uncertain,
                confidence: 0.0,
                reason: None,
            };
        }

        let has_wake_word = DEFAULT_WAKE_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(
                custom_wake_words
                    .iter()
                    .map(|w| w.trim().to_lowercase())
                    .filter(|w| !w.is_empty()),
            )
            .any(|wake| normalized.contains(&wake));

        let has_verse_reference = VERSE_REFERENCE.is_match(&normalized);
        let has_book_reference = BOOK_REFERENCE.is_match(&normalized);

        if MEDIA_TRIGGERS.iter().any(|t| normalized.contains(t)) {
            return IntentResult::new(IntentKind::Media, 0.95, "Media trigger detected");
        }

        if !has_wake_word && !has_verse_reference && !has_book_reference {
            return IntentResult::new(
                IntentKind::Narrative,
                0.95,
                "No wake word or bible reference",
            );
        }

        if has_verse_reference {
            return IntentResult::new(
                IntentKind::Command,
                1.0,
                "Detected explicit verse reference",
            );
        }

        if has_book_reference {
            return IntentResult::new(IntentKind::Command, 0.9, "Detected book reference");
        }

        // Only wake-word utterances reach this point
        if COMMAND_TRIGGERS.iter().any(|t| normalized.contains(t)) {
            return IntentResult::new(IntentKind::Command, 0.9, "Wake word + command trigger");
        }

        if SCRIPTURE_PREFIXES.iter().any(|p| normalized.contains(p)) {
            return IntentResult::new(IntentKind::Command, 0.85, "Wake word + scripture context");
        }

        let word_count = normalized.split_whitespace().count();
        if word_count > self.narrative_word_limit {
            return IntentResult::new(IntentKind::Narrative, 0.8, "Too long / narrative flow");
        }

        if word_count < self.short_command_word_limit {
            return IntentResult::new(IntentKind::Command, 0.7, "Wake word + short phrase");
        }

        IntentResult::new(IntentKind::Narrative, 0.6, "Default fallback")
    }
}

/// Classify with the default word limits
pub fn classify_intent(text: &str, custom_wake_words: &[String]) -> IntentResult {
    IntentClassifier::default().classify(text, custom_wake_words)
}
