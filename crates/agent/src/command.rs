//! Transcript command routing
//!
//! Only finalized transcript text is acted on. The intent classifier decides
//! whether the text is addressed to the app before anything is resolved.

use std::sync::Arc;

use voice_bible_config::IntentConfig;
use voice_bible_core::TranscriptUpdate;
use voice_bible_text_processing::{IntentClassifier, IntentKind, IntentResult};

use crate::resolver::{Resolution, Resolver};

/// What to do with a finalized transcript
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Toggle the projection display
    Media(IntentResult),
    /// Not addressed to the app
    Ignored(IntentResult),
    Resolved {
        intent: IntentResult,
        resolution: Resolution,
    },
}

impl CommandOutcome {
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            CommandOutcome::Resolved { resolution, .. } => Some(resolution),
            _ => None,
        }
    }

    pub fn intent(&self) -> &IntentResult {
        match self {
            CommandOutcome::Media(intent)
            | CommandOutcome::Ignored(intent)
            | CommandOutcome::Resolved { intent, .. } => intent,
        }
    }
}

pub struct CommandRouter {
    resolver: Arc<Resolver>,
    classifier: IntentClassifier,
    /// Configured wake words, merged with the per-call ones
    wake_words: Vec<String>,
}

impl CommandRouter {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self {
            resolver,
            classifier: IntentClassifier::default(),
            wake_words: Vec::new(),
        }
    }

    pub fn with_intent_config(mut self, config: &IntentConfig) -> Self {
        self.classifier = IntentClassifier::from(config);
        self.wake_words = config.custom_wake_words.clone();
        self
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    /// Route one speech-engine update.
    ///
    /// `None` when the update carries no finalized text. Narrative speech is
    /// ignored unless it quotes a famous phrase or names a reference outright.
    pub async fn handle_transcript(
        &self,
        update: &TranscriptUpdate,
        custom_wake_words: &[String],
    ) -> Option<CommandOutcome> {
        let text = update.final_text()?;

        let wake_words: Vec<String> = self
            .wake_words
            .iter()
            .chain(custom_wake_words)
            .cloned()
            .collect();
        let intent = self.classifier.classify(text, &wake_words);

        tracing::debug!(
            intent = ?intent.intent,
            confidence = intent.confidence,
            reason = ?intent.reason,
            "Transcript classified"
        );

        let outcome = match intent.intent {
            IntentKind::Media => CommandOutcome::Media(intent),
            IntentKind::Uncertain => CommandOutcome::Ignored(intent),
            IntentKind::Narrative => match self.resolver.resolve_direct(text) {
                Some(resolution) => CommandOutcome::Resolved { intent, resolution },
                None => CommandOutcome::Ignored(intent),
            },
            IntentKind::Command => {
                let resolution = self.resolver.resolve(text).await;
                CommandOutcome::Resolved { intent, resolution }
            },
        };
        Some(outcome)
    }
}
