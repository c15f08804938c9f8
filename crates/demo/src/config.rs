//! Demo settings read from the environment.

use anyhow::Context;
use chrono::NaiveDate;

/// Dump the final reservation list as JSON when set to `1`/`true`/`yes`.
pub const ENV_PRINT_JSON: &str = "HOTELCHAIN_DEMO_PRINT_JSON";
/// Pin the reservation creation date (`YYYY-MM-DD`); defaults to today.
pub const ENV_TODAY: &str = "HOTELCHAIN_DEMO_TODAY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub print_json: bool,
    pub today: Option<NaiveDate>,
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let print_json = lookup(ENV_PRINT_JSON)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let today = lookup(ENV_TODAY)
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                    .with_context(|| format!("{ENV_TODAY} must be YYYY-MM-DD, got {v:?}"))
            })
            .transpose()?;
        Ok(Self { print_json, today })
    }
}
