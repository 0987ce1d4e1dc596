//! Transcript updates from a speech-to-text engine

use serde::{Deserialize, Serialize};

/// One update from the speech engine: finalized text plus the current partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptUpdate {
    #[serde(default)]
    pub final_text: String,
    #[serde(default)]
    pub interim_text: String,
}

impl TranscriptUpdate {
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            final_text: text.into(),
            interim_text: String::new(),
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            final_text: String::new(),
            interim_text: text.into(),
        }
    }

    /// Finalized text, if any. Interim partials are never parsed.
    pub fn final_text(&self) -> Option<&str> {
        let text = self.final_text.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_final_text_is_exposed() {
        assert_eq!(TranscriptUpdate::interim("john three").final_text(), None);
        assert_eq!(
            TranscriptUpdate::finalized("  john three sixteen ").final_text(),
            Some("john three sixteen")
        );
        assert_eq!(TranscriptUpdate::finalized("   ").final_text(), None);
    }
}
