//! Tracing/logging setup shared by every binary in the workspace.

pub mod config;
pub mod tracing;

pub use config::ObservabilityConfig;

/// Initialize process-wide logging from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}
