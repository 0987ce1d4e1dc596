//! Chapter and verse extraction
//!
//! Works on the tokens left after book matching. Never fails: missing parts
//! default to 1.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cleaner::{is_filler, is_structural};
use crate::numbers::collect_numbers;

/// "3:16", "23.1", "3,16", and "14:25-33" (range end ignored)
static SEPARATED_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[:.,](\d+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterVerse {
    pub chapter: u32,
    pub verse: u32,
}

impl Default for ChapterVerse {
    fn default() -> Self {
        Self {
            chapter: 1,
            verse: 1,
        }
    }
}

/// Derive `(chapter, verse)` from tokens.
///
/// A `<digits>[:.,]<digits>` token wins outright. Otherwise structural and
/// filler words are dropped and the remaining numbers are taken in order:
/// two or more give chapter and verse, one gives the chapter with verse 1,
/// none gives 1:1. Zero values are ignored.
pub fn extract_chapter_verse<S: AsRef<str>>(tokens: &[S]) -> ChapterVerse {
    for token in tokens {
        if let Some(caps) = SEPARATED_PAIR.captures(token.as_ref()) {
            if let (Ok(chapter), Ok(verse)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
                if chapter >= 1 && verse >= 1 {
                    return ChapterVerse { chapter, verse };
                }
            }
        }
    }

    let candidates: Vec<String> = tokens
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .filter(|t| !is_structural(t) && !is_filler(t))
        .collect();

    let numbers: Vec<u32> = collect_numbers(&candidates)
        .into_iter()
        .filter(|n| *n >= 1)
        .collect();

    match numbers.as_slice() {
        [chapter, verse, ..] => ChapterVerse {
            chapter: *chapter,
            verse: *verse,
        },
        [chapter] => ChapterVerse {
            chapter: *chapter,
            verse: 1,
        },
        [] => ChapterVerse::default(),
    }
}
