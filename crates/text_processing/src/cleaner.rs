//! Tokenization and filler-word removal
//!
//! Spoken requests arrive wrapped in politeness, pronouns, command verbs and
//! wake words ("hey bible, can you please open up john three sixteen").
//! The cleaner drops those while keeping numbers, ordinals, structural words
//! and anything that could be part of a book name.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::numbers::{is_ordinal, word_to_number};

/// "3 : 16" and "3: 16" become "3:16", "3, 16" becomes "3,16"
static SPACED_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\s*([:.,])\s*(\d)").unwrap());

/// Words that locate a number within a book
pub static STRUCTURAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["chapter", "chapters", "verse", "verses", "vs", "v"]
        .into_iter()
        .collect()
});

/// Noise around a reference. Must not contain any word of a canonical book
/// name; abbreviations listed here ("is", "so", "am") are deliberately given up.
pub static FILLER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Hesitations and discourse markers
        "um", "umm", "uh", "uhh", "er", "erm", "hmm", "like", "so", "okay", "ok", "well",
        "alright", "yeah", "yes", "now", "just", "actually", "basically", "right",
        // Politeness
        "please", "thanks", "thank", "kindly",
        // Pronouns and determiners
        "i", "me", "my", "we", "us", "our", "you", "your", "it", "that", "this", "the", "a",
        "an", "let's", "lets", "let", "i'd", "i'm",
        // Auxiliaries and modals
        "is", "am", "are", "was", "be", "can", "could", "would", "will", "do", "does", "want",
        "wanna", "need",
        // Command verbs
        "show", "open", "find", "go", "goto", "read", "pull", "up", "display", "bring", "turn",
        "take", "give", "get", "look", "search", "see", "jump", "navigate", "skip", "put",
        // Prepositions and conjunctions
        "to", "in", "at", "for", "from", "and", "with", "about", "into",
        // Wake words and app names
        "hey", "hi", "hello", "bible", "voicebible", "voice", "app", "scripture", "wake",
        // Reference framing
        "book", "gospel", "letter", "epistle", "passage", "reading",
    ]
    .into_iter()
    .collect()
});

/// Lowercase and split an utterance into tokens.
///
/// Keeps `3:16`, `3.16`, `3,16`, `1st` and hyphenated number words intact; strips
/// punctuation around each token.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let joined = SPACED_SEPARATOR.replace_all(&lowered, "$1$2$3");
    joined
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// True for "chapter", "verse" and their short forms
pub fn is_structural(token: &str) -> bool {
    STRUCTURAL_WORDS.contains(token)
}

pub fn is_filler(token: &str) -> bool {
    FILLER_WORDS.contains(token)
}

/// Remove filler tokens, preserving order and duplicates.
///
/// Numbers, number words, ordinals and structural words always survive.
/// An empty result means the utterance has nothing to parse.
pub fn clean<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .filter(|t| {
            is_structural(t) || is_ordinal(t) || word_to_number(t).is_some() || !is_filler(t)
        })
        .collect()
}
