//! Tracing setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use voice_bible_config::ObservabilityConfig;

use crate::AgentError;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Fails if a subscriber is
/// already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), AgentError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("voice_bible={}", config.log_level).into());

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    subscriber
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AgentError::Telemetry(e.to_string()))
}
