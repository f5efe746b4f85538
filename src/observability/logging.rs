//! Structured logging.
//!
//! Uses `tracing` with a fmt subscriber. The level configured in
//! `observability.log_level` applies to this crate and tower-http; `RUST_LOG`
//! takes precedence when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter directive for a configured log level.
pub fn default_directive(log_level: &str) -> String {
    format!("credits_gateway={log_level},tower_http={log_level}")
}

/// Initialize the global tracing subscriber.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(log_level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
