//! Translation-name extraction
//!
//! Finds a spoken translation name anywhere in the utterance ("in the king
//! james version") and removes it before cleaning, since the cleaner would
//! otherwise strip its words one at a time.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::TRANSLATIONS;

/// Result of translation extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationMatch {
    pub translation_id: Option<String>,
    /// Tokens with the matched span removed
    pub remaining: Vec<String>,
}

struct CompiledAlias {
    pattern: Regex,
    translation_id: &'static str,
}

/// Aliases sorted longest first so "king james version" wins over "king james".
static ALIASES: Lazy<Vec<CompiledAlias>> = Lazy::new(|| {
    let mut aliases: Vec<(&'static str, &'static str)> = TRANSLATIONS
        .iter()
        .flat_map(|t| t.aliases.iter().map(move |alias| (*alias, t.id)))
        .collect();
    aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    aliases
        .into_iter()
        .map(|(alias, translation_id)| CompiledAlias {
            pattern: Regex::new(&format!(
                r"\b{}\b(?:\s+(?:version|translation|bible)\b)*",
                regex::escape(alias)
            ))
            .unwrap(),
            translation_id,
        })
        .collect()
});

/// Detect and remove a translation alias.
///
/// Only the first alias found (in longest-first order) is removed. Without a
/// match the tokens come back unchanged.
pub fn extract_translation<S: AsRef<str>>(tokens: &[S]) -> TranslationMatch {
    let joined = tokens
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    for alias in ALIASES.iter() {
        if let Some(m) = alias.pattern.find(&joined) {
            let rest = format!("{} {}", &joined[..m.start()], &joined[m.end()..]);
            tracing::debug!(
                translation = alias.translation_id,
                matched = m.as_str(),
                "Translation alias found"
            );
            return TranslationMatch {
                translation_id: Some(alias.translation_id.to_string()),
                remaining: rest.split_whitespace().map(|t| t.to_string()).collect(),
            };
        }
    }

    TranslationMatch {
        translation_id: None,
        remaining: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
    }
}
