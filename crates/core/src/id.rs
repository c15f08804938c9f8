//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a registry instance (one per session).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(Uuid);

impl ChainId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ChainId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(ChainId::new(), ChainId::new());
    }

    #[test]
    fn displays_as_hyphenated_uuid() {
        let text = ChainId::new().to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }
}
