//! Topic index entries

use serde::{Deserialize, Serialize};

use crate::VerseReference;

/// A verse listed under a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicVerse {
    /// Display reference, may carry a range ("1 Corinthians 13:4-7")
    pub reference: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub snippet: String,
}

impl TopicVerse {
    pub fn to_reference(&self) -> VerseReference {
        VerseReference::new(self.book.clone(), self.chapter, self.verse)
    }
}

/// A curated theme with alias keywords and a ranked verse list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic: String,
    pub aliases: Vec<String>,
    pub verses: Vec<TopicVerse>,
}

impl TopicEntry {
    /// True if `text` equals one of the aliases (case-insensitive, trimmed)
    pub fn has_alias(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        self.aliases.iter().any(|alias| alias.to_lowercase() == text)
    }

    /// First verse of the list, used as the displayed reference
    pub fn lead_verse(&self) -> Option<&TopicVerse> {
        self.verses.first()
    }
}
