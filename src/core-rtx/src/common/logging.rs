use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber. The level comes from RUST_LOG, falling back to `default_log_settings`.
/// Only binaries call this; the library only emits events.
pub fn setup_logging(default_log_settings: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_settings.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init()
}
