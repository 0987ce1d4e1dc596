//! Reference extraction from free text
//!
//! Pulls "John 3:16", "1 Corinthians 13:4-7" and "Psalm 23" out of prose such
//! as a question-answering reply.

use once_cell::sync::Lazy;
use regex::Regex;

static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d?\s?[A-Z][a-z]+(?:\s[A-Z][a-z]+)?)\s+(\d{1,3})(?::(\d{1,3})(?:\s*-\s*(\d{1,3}))?)?\b")
        .unwrap()
});

/// Words that identify a book inside a capitalised name group
const BOOK_WORDS: &[&str] = &[
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy", "Joshua", "Judges", "Ruth",
    "Samuel", "Kings", "Chronicles", "Ezra", "Nehemiah", "Esther", "Job", "Psalm", "Proverbs",
    "Ecclesiastes", "Song", "Isaiah", "Jeremiah", "Lamentations", "Ezekiel", "Daniel", "Hosea",
    "Joel", "Amos", "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk", "Zephaniah", "Haggai",
    "Zechariah", "Malachi", "Matthew", "Mark", "Luke", "John", "Acts", "Romans", "Corinthians",
    "Galatians", "Ephesians", "Philippians", "Colossians", "Thessalonians", "Timothy", "Titus",
    "Philemon", "Hebrews", "James", "Peter", "Jude", "Revelation",
];

/// Find references in `text`, deduplicated in first-seen order.
///
/// Output keeps the written form: `"<book> <chapter>[:<verse>[-<end>]]"`.
pub fn extract_references(text: &str) -> Vec<String> {
    let mut references: Vec<String> = Vec::new();
    let mut start = 0;

    while let Some(caps) = REFERENCE_PATTERN.captures_at(text, start) {
        let Some(whole) = caps.get(0) else {
            break;
        };

        let book = caps[1].trim();
        if !BOOK_WORDS.iter().any(|word| book.contains(word)) {
            // "Read 1 Corinthians" matches as "Read 1" first
            start = whole.start()
                + whole.as_str().chars().next().map_or(1, |c| c.len_utf8());
            continue;
        }

        let mut reference = format!("{} {}", book, &caps[2]);
        if let Some(verse) = caps.get(3) {
            reference.push(':');
            reference.push_str(verse.as_str());
        }
        if let Some(end) = caps.get(4) {
            reference.push('-');
            reference.push_str(end.as_str());
        }

        if !references.contains(&reference) {
            references.push(reference);
        }
        start = whole.end();
    }

    references
}
