//! Collaborator traits
//!
//! The resolution pipeline talks to everything outside the parser through
//! these traits, so backends can be swapped and tests can inject fakes.
//!
//! ```text
//! Data:
//!   - VerseStore: chapter lookup and keyword search over verse text
//!
//! Models:
//!   - EmbeddingModel: text → dense vector, for semantic search
//!   - QuestionAnswerer: free-form question → answer + references
//! ```

mod assistant;
mod embedding;
mod store;

pub use assistant::{Answer, QuestionAnswerer};
pub use embedding::EmbeddingModel;
pub use store::VerseStore;
