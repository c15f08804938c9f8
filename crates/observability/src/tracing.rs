//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.default_filter` when set. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
