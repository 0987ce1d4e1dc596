//! Well-known quotations mapped straight to their reference

use voice_bible_core::VerseReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamousPhrase {
    /// Lowercase, punctuation-free
    pub phrase: &'static str,
    pub book: &'static str,
    pub chapter: u32,
    pub verse: u32,
}

impl FamousPhrase {
    pub fn reference(&self) -> VerseReference {
        VerseReference::new(self.book, self.chapter, self.verse)
    }

    pub fn words(&self) -> impl Iterator<Item = &'static str> {
        self.phrase.split_whitespace()
    }
}

const fn phrase(phrase: &'static str, book: &'static str, chapter: u32, verse: u32) -> FamousPhrase {
    FamousPhrase {
        phrase,
        book,
        chapter,
        verse,
    }
}

/// Table order is match priority.
pub static FAMOUS_PHRASES: [FamousPhrase; 20] = [
    phrase("the lord is my shepherd", "Psalms", 23, 1),
    phrase("for god so loved the world", "John", 3, 16),
    phrase("in the beginning", "Genesis", 1, 1),
    phrase("i can do all things", "Philippians", 4, 13),
    phrase("love is patient", "1 Corinthians", 13, 4),
    phrase("be strong and courageous", "Joshua", 1, 9),
    phrase("trust in the lord", "Proverbs", 3, 5),
    phrase("fear not", "Isaiah", 41, 10),
    phrase("the lord is my light", "Psalms", 27, 1),
    phrase("blessed are the poor in spirit", "Matthew", 5, 3),
    phrase("our father who art in heaven", "Matthew", 6, 9),
    phrase("the fruit of the spirit", "Galatians", 5, 22),
    phrase("faith hope and love", "1 Corinthians", 13, 13),
    phrase("all things work together", "Romans", 8, 28),
    phrase("do not be anxious", "Philippians", 4, 6),
    phrase("i am the way", "John", 14, 6),
    phrase("be still and know", "Psalms", 46, 10),
    phrase("create in me a clean heart", "Psalms", 51, 10),
    phrase("the wages of sin", "Romans", 6, 23),
    phrase("by grace you have been saved", "Ephesians", 2, 8),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::lookup_book;

    #[test]
    fn test_phrase_books_are_canonical() {
        for entry in FAMOUS_PHRASES.iter() {
            let book = lookup_book(entry.book).unwrap();
            assert_eq!(book.name, entry.book, "{}", entry.phrase);
            assert!(entry.chapter <= book.chapter_count);
        }
    }

    #[test]
    fn test_phrases_are_normalized() {
        for entry in FAMOUS_PHRASES.iter() {
            assert!(entry
                .phrase
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == ' '));
        }
    }
}
