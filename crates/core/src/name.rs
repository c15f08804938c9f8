//! Person and hotel names.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 100;

/// A validated name: 2 to 100 characters of ASCII letters, whitespace,
/// hyphens and apostrophes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let len = value.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(DomainError::validation(format!(
                "name must be between {MIN_LEN} and {MAX_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace() || c == '-' || c == '\'')
        {
            return Err(DomainError::validation(
                "name can only contain letters, spaces, hyphens, and apostrophes",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Name {}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}
