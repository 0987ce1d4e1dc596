//! In-memory verse store
//!
//! Loads one translation file and indexes it by normalized book name, then
//! chapter, then verse order. Translation files look like
//! `{"metadata": {...}, "verses": [{"book_name", "book", "chapter", "verse", "text"}]}`
//! and live at `{data_dir}/{translation_id}.json`.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use voice_bible_core::{VerseMatch, VerseStore, VerseText};
use voice_bible_text_processing::lexicon::lookup_translation;

use crate::RagError;

/// Translation file metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub shortname: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub copyright_statement: String,
}

/// The numeric `book` field is ignored; books are keyed by name.
#[derive(Debug, Deserialize)]
struct RawVerse {
    book_name: String,
    chapter: u32,
    verse: u32,
    text: String,
}

#[derive(Debug, Deserialize)]
struct TranslationFile {
    #[serde(default)]
    metadata: TranslationMetadata,
    verses: Vec<RawVerse>,
}

#[derive(Debug)]
struct BookIndex {
    name: String,
    chapters: BTreeMap<u32, Vec<VerseText>>,
}

/// Lowercase, drop whitespace, and write ordinals as digits:
/// "First John" and "1st John" both become "1john".
pub fn normalize_key(name: &str) -> String {
    let compact: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    compact
        .replace("first", "1")
        .replace("second", "2")
        .replace("third", "3")
        .replace("1st", "1")
        .replace("2nd", "2")
        .replace("3rd", "3")
}

/// One translation held fully in memory
#[derive(Debug)]
pub struct InMemoryVerseStore {
    translation_id: String,
    metadata: TranslationMetadata,
    /// File order, which is canonical order
    books: Vec<BookIndex>,
    keys: HashMap<String, usize>,
}

impl InMemoryVerseStore {
    /// Build a store from verses in canonical order
    pub fn from_verses(
        translation_id: impl Into<String>,
        metadata: TranslationMetadata,
        verses: impl IntoIterator<Item = VerseText>,
    ) -> Self {
        let mut store = Self {
            translation_id: translation_id.into(),
            metadata,
            books: Vec::new(),
            keys: HashMap::new(),
        };

        for verse in verses {
            let key = normalize_key(&verse.book);
            let idx = match store.keys.get(&key) {
                Some(idx) => *idx,
                None => {
                    store.books.push(BookIndex {
                        name: verse.book.clone(),
                        chapters: BTreeMap::new(),
                    });
                    store.keys.insert(key, store.books.len() - 1);
                    store.books.len() - 1
                },
            };
            store.books[idx]
                .chapters
                .entry(verse.chapter)
                .or_default()
                .push(verse);
        }

        store
    }

    /// Parse a translation JSON document
    pub fn from_json_str(translation_id: impl Into<String>, json: &str) -> Result<Self, RagError> {
        let file: TranslationFile = serde_json::from_str(json)
            .map_err(|e| RagError::Parse(format!("Translation JSON parse error: {}", e)))?;

        let verses = file.verses.into_iter().map(|v| VerseText {
            book: v.book_name,
            chapter: v.chapter,
            verse: v.verse,
            text: v.text,
            is_target: false,
        });
        Ok(Self::from_verses(translation_id, file.metadata, verses))
    }

    pub fn load(translation_id: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, RagError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| RagError::Index(format!("Failed to read {}: {}", path.display(), e)))?;
        let store = Self::from_json_str(translation_id, &json)?;

        tracing::info!(
            translation = %store.translation_id,
            file = %path.display(),
            books = store.books.len(),
            verses = store.verse_count(),
            "Loaded translation"
        );
        Ok(store)
    }

    /// Load `{data_dir}/{id}.json` for a known translation id
    pub fn load_translation(data_dir: impl AsRef<Path>, id: &str) -> Result<Self, RagError> {
        let translation = lookup_translation(id)
            .ok_or_else(|| RagError::NotFound(format!("Unknown translation: {}", id)))?;
        let path = data_dir.as_ref().join(format!("{}.json", translation.id));
        Self::load(translation.id, path)
    }

    pub fn metadata(&self) -> &TranslationMetadata {
        &self.metadata
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.values())
            .map(|c| c.len())
            .sum()
    }

    /// Exact normalized key first, then the first book whose key contains
    /// or is contained in the requested one ("psalm" → "Psalms").
    fn find_book(&self, book: &str) -> Result<&BookIndex, RagError> {
        let target = normalize_key(book);
        if target.is_empty() {
            return Err(RagError::NotFound(format!("Book '{}' not found.", book)));
        }

        if let Some(idx) = self.keys.get(&target) {
            return Ok(&self.books[*idx]);
        }

        self.books
            .iter()
            .find(|b| {
                let key = normalize_key(&b.name);
                key.contains(&target) || target.contains(&key)
            })
            .ok_or_else(|| RagError::NotFound(format!("Book '{}' not found.", book)))
    }

    /// All verses of a chapter, in order
    pub fn chapter(&self, book: &str, chapter: u32) -> Result<&[VerseText], RagError> {
        let book_index = self.find_book(book)?;
        book_index
            .chapters
            .get(&chapter)
            .map(|verses| verses.as_slice())
            .ok_or_else(|| {
                RagError::OutOfRange(format!(
                    "{} has only {} chapters.",
                    book_index.name,
                    book_index.chapters.len()
                ))
            })
    }

    /// Case-insensitive substring search in canonical order
    pub fn search(&self, query: &str, limit: usize) -> Vec<VerseMatch> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        self.books
            .iter()
            .flat_map(|b| b.chapters.values())
            .flatten()
            .filter(|v| v.text.to_lowercase().contains(&query))
            .take(limit)
            .map(|v| VerseMatch {
                reference: v.reference(),
                text: v.text.clone(),
            })
            .collect()
    }

    /// A verse with surrounding context; the requested verse is flagged.
    pub fn fetch_passage(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
        before: u32,
        after: u32,
    ) -> Result<Vec<VerseText>, RagError> {
        let verses = self.chapter(book, chapter)?;
        let count = verses.len() as u32;
        if verse < 1 || verse > count {
            let name = verses.first().map(|v| v.book.as_str()).unwrap_or(book);
            return Err(RagError::OutOfRange(format!(
                "{} {} has only {} verses.",
                name, chapter, count
            )));
        }

        let start = verse.saturating_sub(before).max(1);
        let end = verse.saturating_add(after).min(count);

        Ok(verses
            .iter()
            .filter(|v| v.verse >= start && v.verse <= end)
            .map(|v| VerseText {
                is_target: v.verse == verse,
                ..v.clone()
            })
            .collect())
    }
}

#[async_trait]
impl VerseStore for InMemoryVerseStore {
    async fn get_chapter(&self, book: &str, chapter: u32) -> voice_bible_core::Result<Vec<VerseText>> {
        Ok(self.chapter(book, chapter)?.to_vec())
    }

    async fn search_text(&self, query: &str, limit: usize) -> voice_bible_core::Result<Vec<VerseMatch>> {
        Ok(self.search(query, limit))
    }

    fn translation_id(&self) -> &str {
        &self.translation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voice_bible_core::VerseReference;

    const SAMPLE: &str = r#"{
        "metadata": {"name": "King James Version", "shortname": "KJV", "module": "kjv", "year": "1611", "lang": "en"},
        "verses": [
            {"book_name": "Genesis", "book": 1, "chapter": 1, "verse": 1, "text": "In the beginning God created the heaven and the earth."},
            {"book_name": "Genesis", "book": 1, "chapter": 1, "verse": 2, "text": "And the earth was without form, and void."},
            {"book_name": "Genesis", "book": 1, "chapter": 1, "verse": 3, "text": "And God said, Let there be light: and there was light."},
            {"book_name": "Psalms", "book": 19, "chapter": 23, "verse": 1, "text": "The LORD is my shepherd; I shall not want."},
            {"book_name": "John", "book": 43, "chapter": 11, "verse": 35, "text": "Jesus wept."},
            {"book_name": "1 John", "book": 62, "chapter": 4, "verse": 8, "text": "He that loveth not knoweth not God; for God is love."}
        ]
    }"#;

    fn store() -> InMemoryVerseStore {
        InMemoryVerseStore::from_json_str("kjv", SAMPLE).unwrap()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("1 John"), "1john");
        assert_eq!(normalize_key("First John"), "1john");
        assert_eq!(normalize_key("2nd Kings"), "2kings");
        assert_eq!(normalize_key("Song of Solomon"), "songofsolomon");
    }

    #[test]
    fn test_load_and_metadata() {
        let store = store();
        assert_eq!(store.book_count(), 4);
        assert_eq!(store.verse_count(), 6);
        assert_eq!(store.metadata().shortname, "KJV");
    }

    #[test]
    fn test_chapter_lookup() {
        let store = store();
        let verses = store.chapter("genesis", 1).unwrap();
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[2].verse, 3);

        // Ordinal spelled out, and singular "psalm" via containment
        assert_eq!(store.chapter("First John", 4).unwrap()[0].verse, 8);
        assert_eq!(store.chapter("psalm", 23).unwrap()[0].book, "Psalms");
        assert_eq!(store.chapter("John", 11).unwrap()[0].text, "Jesus wept.");
    }

    #[test]
    fn test_out_of_range_and_unknown() {
        let store = store();
        let err = store.chapter("Genesis", 51).unwrap_err();
        assert!(matches!(err, RagError::OutOfRange(_)));
        assert_eq!(err.to_string(), "Out of range: Genesis has only 1 chapters.");

        let err = store.fetch_passage("Genesis", 1, 9, 0, 0).unwrap_err();
        assert!(err.to_string().contains("Genesis 1 has only 3 verses."));

        assert!(matches!(store.chapter("Hezekiah", 1), Err(RagError::NotFound(_))));
        assert!(matches!(store.chapter("  ", 1), Err(RagError::NotFound(_))));
    }

    #[test]
    fn test_fetch_passage_with_context() {
        let store = store();
        let passage = store.fetch_passage("Genesis", 1, 2, 1, 5).unwrap();
        assert_eq!(passage.iter().map(|v| v.verse).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(
            passage.iter().map(|v| v.is_target).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_search() {
        let store = store();
        let results = store.search("GOD", 50);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].reference, VerseReference::new("Genesis", 1, 1));
        assert_eq!(results[2].reference, VerseReference::new("1 John", 4, 8));

        assert_eq!(store.search("god", 1).len(), 1);
        assert!(store.search("   ", 10).is_empty());
        assert!(store.search("leviathan", 10).is_empty());
    }

    #[test]
    fn test_load_translation_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("kjv.json"), SAMPLE).unwrap();

        let store = InMemoryVerseStore::load_translation(dir.path(), "KJV").unwrap();
        assert_eq!(store.translation_id, "kjv");

        assert!(matches!(
            InMemoryVerseStore::load_translation(dir.path(), "klingon"),
            Err(RagError::NotFound(_))
        ));
        assert!(InMemoryVerseStore::load_translation(dir.path(), "asv").is_err());
        assert!(InMemoryVerseStore::from_json_str("kjv", "{not json").is_err());
    }

    #[tokio::test]
    async fn test_verse_store_trait() {
        let store = store();
        let verses = store.get_chapter("John", 11).await.unwrap();
        assert_eq!(verses.len(), 1);

        let err = store.get_chapter("John", 99).await.unwrap_err();
        assert!(matches!(err, voice_bible_core::Error::OutOfRange(_)));

        let hits = store.search_text("shepherd", 50).await.unwrap();
        assert_eq!(hits[0].reference.to_string(), "Psalms 23:1");
        assert_eq!(VerseStore::translation_id(&store), "kjv");
    }
}
