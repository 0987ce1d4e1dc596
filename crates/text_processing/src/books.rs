//! Book matching
//!
//! Finds a book name or abbreviation inside a token sequence by exact word
//! matching. Books with longer canonical names are tried first so "Song of
//! Solomon" and "1 John" are preferred over single-word partials.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::lexicon::{BookDescriptor, BOOKS};
use crate::numbers::ordinal_prefix;

/// A matched book and the tokens left after removing the match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookMatch {
    pub book: &'static str,
    pub remaining: Vec<String>,
}

struct BookCandidates {
    book: &'static BookDescriptor,
    /// Name and abbreviations split into words, longest first
    word_sequences: Vec<Vec<String>>,
}

/// Books ordered by canonical word count (descending), declaration order on ties.
static CANDIDATES: Lazy<Vec<BookCandidates>> = Lazy::new(|| {
    let mut books: Vec<&'static BookDescriptor> = BOOKS.iter().collect();
    books.sort_by(|a, b| b.name_word_count().cmp(&a.name_word_count()));

    books
        .into_iter()
        .map(|book| {
            let mut word_sequences: Vec<Vec<String>> = book
                .identifiers()
                .map(|id| id.split_whitespace().map(|w| w.to_string()).collect())
                .collect();
            word_sequences.sort_by(|a, b| b.len().cmp(&a.len()));
            BookCandidates {
                book,
                word_sequences,
            }
        })
        .collect()
});

/// Find a book in `tokens`.
///
/// The first full match (in sorted book order, then longest identifier, then
/// leftmost offset) is removed from the sequence and returned; there is no
/// search for a better later match. Digit ordinals compare as their digit, so
/// "1st john" matches "1 John". Falls back to joining an ordinal with the
/// following word ("first" + "cor" → "1cor"). `None` if nothing matches.
pub fn find_book<S: AsRef<str>>(tokens: &[S]) -> Option<BookMatch> {
    let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();
    if tokens.is_empty() {
        return None;
    }

    let keys: Vec<String> = tokens
        .iter()
        .map(|t| match t.as_str() {
            "1st" => "1".to_string(),
            "2nd" => "2".to_string(),
            "3rd" => "3".to_string(),
            _ => t.clone(),
        })
        .collect();

    for candidate in CANDIDATES.iter() {
        for words in &candidate.word_sequences {
            if let Some(offset) = find_sequence(&keys, words) {
                return Some(BookMatch {
                    book: candidate.book.name,
                    remaining: without_range(&tokens, offset, words.len()),
                });
            }
        }
    }

    find_ordinal_book(&tokens)
}

fn find_sequence(tokens: &[String], words: &[String]) -> Option<usize> {
    if words.is_empty() || words.len() > tokens.len() {
        return None;
    }
    (0..=tokens.len() - words.len()).find(|&start| tokens[start..start + words.len()] == *words)
}

fn without_range(tokens: &[String], start: usize, len: usize) -> Vec<String> {
    tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i < start || *i >= start + len)
        .map(|(_, t)| t.clone())
        .collect()
}

/// "first cor", "1 cor": ordinal or digit followed by a word that, with the
/// digit prefix, spells a canonical name or abbreviation.
fn find_ordinal_book(tokens: &[String]) -> Option<BookMatch> {
    for (i, pair) in tokens.windows(2).enumerate() {
        let Some(digit) = numbered_prefix(&pair[0]) else {
            continue;
        };
        let spaced = format!("{} {}", digit, pair[1]);
        let joined = format!("{}{}", digit, pair[1]);

        let found = CANDIDATES
            .iter()
            .find(|c| c.book.identifiers().any(|id| id == spaced || id == joined));
        if let Some(candidate) = found {
            tracing::debug!(book = candidate.book.name, "Book matched via ordinal prefix");
            return Some(BookMatch {
                book: candidate.book.name,
                remaining: without_range(tokens, i, 2),
            });
        }
    }
    None
}

fn numbered_prefix(token: &str) -> Option<u32> {
    match token {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        _ => ordinal_prefix(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_first_john() {
        let result = find_book(&tokens("first john 3 16")).unwrap();
        assert_eq!(result.book, "1 John");
        assert_eq!(result.remaining, vec!["3", "16"]);
    }

    #[test]
    fn test_numbered_book_over_single_word() {
        let result = find_book(&tokens("1 john 4 8")).unwrap();
        assert_eq!(result.book, "1 John");
        assert_eq!(result.remaining, vec!["4", "8"]);

        let result = find_book(&tokens("john 4 8")).unwrap();
        assert_eq!(result.book, "John");
    }

    #[test]
    fn test_multi_word_name() {
        let result = find_book(&tokens("song of solomon 2 1")).unwrap();
        assert_eq!(result.book, "Song of Solomon");
        assert_eq!(result.remaining, vec!["2", "1"]);

        let result = find_book(&tokens("song of songs 4")).unwrap();
        assert_eq!(result.book, "Song of Solomon");
        assert_eq!(result.remaining, vec!["4"]);
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(find_book(&tokens("gen 1 1")).unwrap().book, "Genesis");
        assert_eq!(find_book(&tokens("psalm 23")).unwrap().book, "Psalms");
        assert_eq!(find_book(&tokens("1cor 13 4")).unwrap().book, "1 Corinthians");
        assert_eq!(find_book(&tokens("revelations 21")).unwrap().book, "Revelation");
    }

    #[test]
    fn test_case_insensitive_and_offset() {
        let result = find_book(&tokens("chapter 3 of JOHN")).unwrap();
        assert_eq!(result.book, "John");
        assert_eq!(result.remaining, vec!["chapter", "3", "of"]);
    }

    #[test]
    fn test_exact_word_equality_not_substring() {
        assert!(find_book(&tokens("johnny 3")).is_none());
        assert!(find_book(&tokens("genesiss")).is_none());
    }

    #[test]
    fn test_ordinal_reconstruction() {
        let result = find_book(&tokens("1st peter 5 7")).unwrap();
        assert_eq!(result.book, "1 Peter");
        assert_eq!(result.remaining, vec!["5", "7"]);

        let result = find_book(&tokens("2nd kings 2")).unwrap();
        assert_eq!(result.book, "2 Kings");

        let result = find_book(&tokens("3rd john")).unwrap();
        assert_eq!(result.book, "3 John");
        assert!(result.remaining.is_empty());

        let result = find_book(&tokens("first cor 13 4")).unwrap();
        assert_eq!(result.book, "1 Corinthians");
        assert_eq!(result.remaining, vec!["13", "4"]);

        let result = find_book(&tokens("second thess 3")).unwrap();
        assert_eq!(result.book, "2 Thessalonians");

        let result = find_book(&tokens("1 cor 13:4")).unwrap();
        assert_eq!(result.book, "1 Corinthians");
        assert_eq!(result.remaining, vec!["13:4"]);
    }

    #[test]
    fn test_empty_and_unknown() {
        let empty: Vec<String> = Vec::new();
        assert!(find_book(&empty).is_none());
        assert!(find_book(&tokens("hello world")).is_none());
    }
}
