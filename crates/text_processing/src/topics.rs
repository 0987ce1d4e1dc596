//! Topic query detection and the topic index
//!
//! "verses about love", "what does the bible say about fear" and bare alias
//! words like "forgiveness" resolve to a curated topic and its verse list.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use voice_bible_core::TopicEntry;

use crate::error::{Result, TextProcessingError};
use crate::lexicon::builtin_topics;

/// Score for the topic name appearing in the query
const TOPIC_NAME_SCORE: u32 = 10;
/// Score for each alias appearing in the query
const ALIAS_SCORE: u32 = 5;

static VERSES_ABOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:verses?|scriptures?|passages?|bible)\s+(?:about|on|for|regarding)\s+")
        .unwrap()
});

static BIBLE_SAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:what|where)\s+(?:does|did|do)\s+(?:the\s+)?bible\s+(?:say|teach)\s+(?:about|on)")
        .unwrap()
});

/// Prefix form of [`BIBLE_SAY`] that also eats the following whitespace
static BIBLE_SAY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:what|where)\s+(?:does|did|do)\s+(?:the\s+)?bible\s+(?:say|teach)\s+(?:about|on)\s+")
        .unwrap()
});

static TELL_ME_ABOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:tell me|show me|find|search)\s+(?:about|for)\s+").unwrap()
});

static TRAILING_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?.!]").unwrap());

/// True when the text asks for verses on a theme rather than a reference
pub fn is_topic_query(text: &str) -> bool {
    VERSES_ABOUT.is_match(text) || BIBLE_SAY.is_match(text) || TELL_ME_ABOUT.is_match(text)
}

/// Strip the topic framing and punctuation, leaving the theme.
///
/// Each framing pattern is removed at most once.
pub fn extract_topic_keyword(text: &str) -> String {
    let stripped = VERSES_ABOUT.replace(text, "");
    let stripped = BIBLE_SAY_PREFIX.replace(&stripped, "");
    let stripped = TELL_ME_ABOUT.replace(&stripped, "");
    TRAILING_PUNCTUATION
        .replace_all(&stripped, "")
        .trim()
        .to_string()
}

#[derive(Debug, Deserialize)]
struct TopicFile {
    topics: Vec<TopicEntry>,
}

/// A topic chosen for an utterance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicHit<'a> {
    pub entry: &'a TopicEntry,
    /// True when the utterance carried "verses about"-style framing
    pub framed: bool,
}

impl TopicHit<'_> {
    /// "Love: 6 verses"
    pub fn label(&self) -> String {
        format!("{}: {} verses", self.entry.topic, self.entry.verses.len())
    }
}

/// Ranked lookup over curated topic entries
#[derive(Debug, Clone)]
pub struct TopicIndex {
    entries: Vec<TopicEntry>,
}

impl Default for TopicIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TopicIndex {
    /// The sixteen built-in topics
    pub fn builtin() -> Self {
        Self::new(builtin_topics())
    }

    pub fn new(entries: Vec<TopicEntry>) -> Self {
        Self { entries }
    }

    /// Parse a `topics:` YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: TopicFile = serde_yaml::from_str(yaml)
            .map_err(|e| TextProcessingError::TopicIndex(e.to_string()))?;
        if file.topics.is_empty() {
            return Err(TextProcessingError::TopicIndex(
                "topic file contains no topics".to_string(),
            ));
        }
        Ok(Self::new(file.topics))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let index = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.display(),
            topics = index.entries.len(),
            "Loaded topic index"
        );
        Ok(index)
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank topics against a query.
    ///
    /// +10 when the topic name occurs in the lowercased query, +5 per alias
    /// that occurs. Zero scores are dropped; ties keep declaration order.
    pub fn search(&self, query: &str) -> Vec<&TopicEntry> {
        let query = query.to_lowercase();
        let mut scored: Vec<(u32, &TopicEntry)> = self
            .entries
            .iter()
            .map(|entry| (score(entry, &query), entry))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, entry)| entry).collect()
    }

    /// Resolve an utterance to a topic.
    ///
    /// Framed queries search on the extracted keyword. Without framing, the
    /// best-ranked topic is accepted only if the whole trimmed query is one
    /// of its aliases.
    pub fn lookup(&self, utterance: &str) -> Option<TopicHit<'_>> {
        let trimmed = utterance.trim();
        if trimmed.is_empty() {
            return None;
        }

        if is_topic_query(trimmed) {
            let keyword = extract_topic_keyword(trimmed);
            if let Some(entry) = self.search(&keyword).into_iter().next() {
                tracing::debug!(topic = %entry.topic, keyword = %keyword, "Topic query matched");
                return Some(TopicHit {
                    entry,
                    framed: true,
                });
            }
        }

        self.search(trimmed)
            .into_iter()
            .next()
            .filter(|entry| entry.has_alias(trimmed))
            .map(|entry| TopicHit {
                entry,
                framed: false,
            })
    }
}

fn score(entry: &TopicEntry, query: &str) -> u32 {
    let mut score = 0;
    if query.contains(&entry.topic.to_lowercase()) {
        score += TOPIC_NAME_SCORE;
    }
    for alias in &entry.aliases {
        if query.contains(&alias.to_lowercase()) {
            score += ALIAS_SCORE;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_topic_query() {
        assert!(is_topic_query("verses about love"));
        assert!(is_topic_query("Scriptures on forgiveness"));
        assert!(is_topic_query("What does the Bible say about fear?"));
        assert!(is_topic_query("where did bible teach on money"));
        assert!(is_topic_query("tell me about hope"));
        assert!(is_topic_query("search for peace"));
        assert!(!is_topic_query("john 3:16"));
        assert!(!is_topic_query("love"));
    }

    #[test]
    fn test_extract_topic_keyword() {
        assert_eq!(extract_topic_keyword("verses about love"), "love");
        assert_eq!(extract_topic_keyword("What does the Bible say about fear?"), "fear");
        assert_eq!(extract_topic_keyword("show me about healing."), "healing");
        assert_eq!(extract_topic_keyword("  patience!  "), "patience");
    }

    #[test]
    fn test_search_ranks_love_first() {
        let index = TopicIndex::builtin();
        let results = index.search("love");
        assert_eq!(results[0].topic, "Love");
        // Every hit mentions love somewhere
        for entry in results {
            assert!(
                "love".contains(&entry.topic.to_lowercase())
                    || entry.aliases.iter().any(|a| "love".contains(a.as_str()))
            );
        }
    }

    #[test]
    fn test_search_excludes_zero_scores() {
        let index = TopicIndex::builtin();
        assert!(index.search("xylophone").is_empty());
    }

    #[test]
    fn test_search_stable_on_ties() {
        let entries: Vec<TopicEntry> = ["Alpha", "Beta"]
            .iter()
            .map(|name| TopicEntry {
                topic: name.to_string(),
                aliases: vec!["shared".to_string()],
                verses: Vec::new(),
            })
            .collect();
        let index = TopicIndex::new(entries);
        let results = index.search("shared");
        assert_eq!(results[0].topic, "Alpha");
        assert_eq!(results[1].topic, "Beta");
    }

    #[test]
    fn test_lookup_framed_and_direct() {
        let index = TopicIndex::builtin();

        let hit = index.lookup("verses about love").unwrap();
        assert_eq!(hit.entry.topic, "Love");
        assert!(hit.framed);
        assert_eq!(hit.label(), format!("Love: {} verses", hit.entry.verses.len()));

        let hit = index.lookup("Forgiveness").unwrap();
        assert_eq!(hit.entry.topic, "Forgiveness");
        assert!(!hit.framed);

        // Mentions a topic without framing and is not itself an alias
        assert!(index.lookup("i love pizza").is_none());
        assert!(index.lookup("   ").is_none());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
topics:
  - topic: Courage
    aliases: [courage, brave]
    verses:
      - reference: "Joshua 1:9"
        book: Joshua
        chapter: 1
        verse: 9
        snippet: "Be strong and of a good courage"
"#;
        let index = TopicIndex::from_yaml_str(yaml).unwrap();
        assert_eq!(index.len(), 1);
        let hit = index.lookup("brave").unwrap();
        assert_eq!(hit.entry.lead_verse().unwrap().to_reference().to_string(), "Joshua 1:9");
    }

    #[test]
    fn test_from_yaml_rejects_bad_input() {
        assert!(TopicIndex::from_yaml_str("topics: []").is_err());
        assert!(TopicIndex::from_yaml_str("not: [valid").is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "topics:\n  - topic: Joy\n    aliases: [joy, joyful]\n    verses: []"
        )
        .unwrap();

        let index = TopicIndex::load(file.path()).unwrap();
        assert_eq!(index.entries()[0].topic, "Joy");
        assert!(TopicIndex::load("/nonexistent/topics.yaml").is_err());
    }
}
