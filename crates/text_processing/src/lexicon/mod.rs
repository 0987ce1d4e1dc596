//! Static lexicon tables
//!
//! All tables are process-wide, immutable and built once:
//! - Book names, abbreviations and chapter counts
//! - Famous phrases mapped to references
//! - Translation identifiers and their spoken aliases
//! - The built-in topic index

pub mod books;
pub mod phrases;
pub mod topics;
pub mod translations;

pub use books::{lookup_book, BookDescriptor, BOOKS};
pub use phrases::{FamousPhrase, FAMOUS_PHRASES};
pub use topics::builtin_topics;
pub use translations::{lookup_translation, Translation, TRANSLATIONS};
