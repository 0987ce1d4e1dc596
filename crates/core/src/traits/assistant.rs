//! Question answering trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Reply from a question-answering service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    /// Reference strings such as "Matthew 14:25-33"
    #[serde(default)]
    pub references: Vec<String>,
}

/// Opaque question-answering collaborator, consulted for complex queries.
#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn ask(&self, query: &str) -> Result<Answer>;

    /// Tell the service what the user is reading, for follow-up questions.
    fn set_context(&self, _references: &[String]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_references_default_empty() {
        let answer: Answer = serde_json::from_str(r#"{"answer": "Jesus wept."}"#).unwrap();
        assert!(answer.references.is_empty());
    }
}
