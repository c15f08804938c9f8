//! Logging configuration read from the environment.

/// Enables JSON log lines when set to `1`/`true`/`yes`.
pub const ENV_LOG_JSON: &str = "HOTELCHAIN_LOG_JSON";
/// Default filter directive when `RUST_LOG` is unset (e.g. `debug`).
pub const ENV_LOG_LEVEL: &str = "HOTELCHAIN_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub json: bool,
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            json: false,
            default_filter: "info".to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let json = lookup(ENV_LOG_JSON).map(|v| parse_flag(&v)).unwrap_or(defaults.json);
        let default_filter = lookup(ENV_LOG_LEVEL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_filter);
        Self { json, default_filter }
    }
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
