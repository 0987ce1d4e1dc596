//! Famous-phrase matching
//!
//! Recognizes well-known quotations ("the lord is my shepherd") before any
//! structural parsing, since they rarely name a book.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use voice_bible_config::constants::matching::PHRASE_OVERLAP_RATIO;
use voice_bible_core::VerseReference;

use crate::cleaner::tokenize;
use crate::lexicon::{FamousPhrase, FAMOUS_PHRASES};

/// Words too common to carry a fuzzy phrase match on their own
static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "in", "is", "my", "of", "a", "i", "and", "be", "to", "for", "all", "do", "not",
        "you", "have", "been", "by", "who", "me", "are", "so", "am", "can",
    ]
    .into_iter()
    .collect()
});

/// How a phrase was recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseMatchKind {
    /// Phrase appears verbatim in the input
    Exact,
    /// Enough of the phrase's words appear in the input
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    pub phrase: &'static FamousPhrase,
    pub kind: PhraseMatchKind,
}

impl PhraseMatch {
    pub fn reference(&self) -> VerseReference {
        self.phrase.reference()
    }
}

/// Famous-phrase matcher over the built-in table
#[derive(Debug, Clone, Copy)]
pub struct PhraseMatcher {
    overlap_ratio: f32,
}

impl Default for PhraseMatcher {
    fn default() -> Self {
        Self::new(PHRASE_OVERLAP_RATIO)
    }
}

impl PhraseMatcher {
    pub fn new(overlap_ratio: f32) -> Self {
        Self { overlap_ratio }
    }

    /// Find the first phrase the input matches.
    ///
    /// Every phrase is checked for verbatim containment before any fuzzy
    /// overlap is tried. Table order decides between several matches.
    pub fn find(&self, input: &str) -> Option<PhraseMatch> {
        let normalized = tokenize(input).join(" ");
        if normalized.is_empty() {
            return None;
        }

        if let Some(phrase) = FAMOUS_PHRASES.iter().find(|p| normalized.contains(p.phrase)) {
            return Some(PhraseMatch {
                phrase,
                kind: PhraseMatchKind::Exact,
            });
        }

        let input_words: HashSet<&str> = normalized.split_whitespace().collect();
        FAMOUS_PHRASES
            .iter()
            .find(|p| self.overlaps(&input_words, p))
            .map(|phrase| PhraseMatch {
                phrase,
                kind: PhraseMatchKind::Overlap,
            })
    }

    pub fn match_reference(&self, input: &str) -> Option<VerseReference> {
        self.find(input).map(|m| m.reference())
    }

    fn overlaps(&self, input_words: &HashSet<&str>, phrase: &FamousPhrase) -> bool {
        let phrase_words: Vec<&str> = phrase.words().collect();
        let phrase_set: HashSet<&str> = phrase_words.iter().copied().collect();

        let matched: Vec<&str> = input_words
            .iter()
            .copied()
            .filter(|w| phrase_set.contains(w))
            .collect();

        if matched.is_empty() || !matched.iter().any(|w| !FUNCTION_WORDS.contains(w)) {
            return false;
        }

        matched.len() as f32 / phrase_words.len() as f32 >= self.overlap_ratio
    }
}

/// Match against the built-in table with the default overlap ratio
pub fn match_famous_phrase(input: &str) -> Option<VerseReference> {
    PhraseMatcher::default().match_reference(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_phrases() {
        assert_eq!(
            match_famous_phrase("the lord is my shepherd"),
            Some(VerseReference::new("Psalms", 23, 1))
        );
        assert_eq!(
            match_famous_phrase("For God so loved the world!"),
            Some(VerseReference::new("John", 3, 16))
        );
        assert_eq!(
            match_famous_phrase("open   the lord is my light please"),
            Some(VerseReference::new("Psalms", 27, 1))
        );
    }

    #[test]
    fn test_exact_checked_before_overlap() {
        // "the lord is my shepherd" overlaps 4 of 5 words, but the exact
        // phrase further down the table wins
        let hit = PhraseMatcher::default().find("the lord is my light").unwrap();
        assert_eq!(hit.kind, PhraseMatchKind::Exact);
        assert_eq!(hit.reference(), VerseReference::new("Psalms", 27, 1));
    }

    #[test]
    fn test_fuzzy_overlap() {
        let hit = PhraseMatcher::default().find("lord is my shepherd").unwrap();
        assert_eq!(hit.kind, PhraseMatchKind::Overlap);
        assert_eq!(hit.reference(), VerseReference::new("Psalms", 23, 1));

        assert_eq!(
            match_famous_phrase("god so loved the world"),
            Some(VerseReference::new("John", 3, 16))
        );
    }

    #[test]
    fn test_function_words_alone_do_not_match() {
        // "in the" covers 2/3 of "in the beginning"
        assert_eq!(match_famous_phrase("john 3:16 in the king james version"), None);
        assert_eq!(match_famous_phrase("i am the light"), None);
        // The same gate costs recall: 3/4 of "i am the way" but every shared word is a function word
        assert_eq!(match_famous_phrase("i am the light of the world"), None);
    }

    #[test]
    fn test_below_ratio() {
        // 1 of 5 words
        assert_eq!(match_famous_phrase("shepherd"), None);
        assert_eq!(match_famous_phrase("romans eight twenty eight"), None);
    }

    #[test]
    fn test_custom_ratio() {
        let strict = PhraseMatcher::new(1.0);
        assert!(strict.find("lord is my shepherd").is_none());
        assert!(strict.find("the lord is my shepherd").is_some());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(match_famous_phrase(""), None);
        assert_eq!(match_famous_phrase("  ?! "), None);
    }
}
