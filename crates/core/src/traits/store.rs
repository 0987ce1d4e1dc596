//! Verse store trait

use async_trait::async_trait;

use crate::{Result, VerseMatch, VerseText};

/// Indexed Bible text, keyed by book → chapter → ordered verses.
///
/// Out-of-range chapters surface as [`crate::Error::OutOfRange`], which callers
/// can tell apart from a parse failure.
#[async_trait]
pub trait VerseStore: Send + Sync {
    /// All verses of a chapter, in order
    async fn get_chapter(&self, book: &str, chapter: u32) -> Result<Vec<VerseText>>;

    /// Case-insensitive substring search over verse text, at most `limit` hits
    async fn search_text(&self, query: &str, limit: usize) -> Result<Vec<VerseMatch>>;

    /// Translation this store serves, e.g. `kjv`
    fn translation_id(&self) -> &str;
}
