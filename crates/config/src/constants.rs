//! Centralized constants for reference resolution
//!
//! Single source of truth for the thresholds and confidence values used by the
//! parser and the resolver. Settings use these as their serde defaults, so a
//! value changed here changes the default everywhere.

/// Confidence assigned to each kind of resolution
pub mod confidence {
    /// Famous phrase recognized
    pub const FAMOUS_PHRASE: f32 = 0.95;

    /// Structured parse that resolved only a book
    pub const BOOK_ONLY: f32 = 0.7;

    /// Structured parse with chapter > 1 or verse > 1
    pub const DETAILED: f32 = 0.9;

    /// Added when a translation was named too (result capped at 1.0)
    pub const TRANSLATION_BONUS: f32 = 0.05;
}

/// Phrase matching
pub mod matching {
    /// Share of a famous phrase's words the input must contain
    pub const PHRASE_OVERLAP_RATIO: f32 = 0.6;
}

/// Semantic search over the curated verse subset
pub mod semantic {
    /// Results must score strictly above this cosine similarity
    pub const SIMILARITY_THRESHOLD: f32 = 0.25;

    /// Results kept after ranking
    pub const TOP_K: usize = 3;
}

/// Keyword search over verse text
pub mod search {
    pub const KEYWORD_LIMIT: usize = 50;
}

/// Intent classification word-count limits
pub mod intent {
    /// Longer utterances without a reference read as narrative
    pub const NARRATIVE_WORD_LIMIT: usize = 15;

    /// Wake word plus fewer words than this reads as a command
    pub const SHORT_COMMAND_WORD_LIMIT: usize = 10;
}

/// Service endpoints
pub mod endpoints {
    /// Default Ollama endpoint for embeddings
    pub const OLLAMA_DEFAULT: &str = "http://localhost:11434";
}

/// Embedding model defaults
pub mod embedding {
    pub const DEFAULT_MODEL: &str = "all-minilm";

    /// all-MiniLM-L6-v2 output size
    pub const DEFAULT_DIM: usize = 384;
}

/// Bible data defaults
pub mod bible {
    pub const DEFAULT_TRANSLATION: &str = "kjv";
    pub const DEFAULT_DATA_DIR: &str = "data/bibles";
}
