use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Kind of identity document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityType {
    Passport,
    NationalId,
    DriverLicense,
}

/// Identity document of a reserver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IdentityRepr")]
pub struct Identity {
    id_number: String,
    kind: IdentityType,
}

#[derive(Deserialize)]
struct IdentityRepr {
    id_number: String,
    kind: IdentityType,
}

impl TryFrom<IdentityRepr> for Identity {
    type Error = DomainError;

    fn try_from(value: IdentityRepr) -> Result<Self, Self::Error> {
        Self::new(value.id_number, value.kind)
    }
}

impl Identity {
    pub fn new(id_number: impl Into<String>, kind: IdentityType) -> DomainResult<Self> {
        let id_number = id_number.into();
        if id_number.trim().is_empty() {
            return Err(DomainError::validation("id number cannot be empty"));
        }
        if !(5..=20).contains(&id_number.chars().count()) {
            return Err(DomainError::validation(
                "id number must be between 5 and 20 characters",
            ));
        }
        Ok(Self { id_number, kind })
    }

    pub fn id_number(&self) -> &str {
        &self.id_number
    }

    pub fn kind(&self) -> IdentityType {
        self.kind
    }
}

impl ValueObject for Identity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds() {
        assert!(Identity::new("ID123", IdentityType::Passport).is_ok());
        assert!(Identity::new("A".repeat(20), IdentityType::NationalId).is_ok());
        assert!(Identity::new("ID12", IdentityType::Passport).unwrap_err().is_validation());
        assert!(Identity::new("A".repeat(21), IdentityType::DriverLicense).is_err());
        assert!(Identity::new("     ", IdentityType::Passport).is_err());
    }

    #[test]
    fn equality_includes_document_type() {
        let a = Identity::new("ID123", IdentityType::Passport).unwrap();
        let b = Identity::new("ID123", IdentityType::NationalId).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, Identity::new("ID123", IdentityType::Passport).unwrap());
    }

    #[test]
    fn deserialization_validates() {
        let id: Identity =
            serde_json::from_str(r#"{"id_number":"AB12345","kind":"DRIVER_LICENSE"}"#).unwrap();
        assert_eq!(id.kind(), IdentityType::DriverLicense);

        let short = r#"{"id_number":"X","kind":"PASSPORT"}"#;
        assert!(serde_json::from_str::<Identity>(short).is_err());
    }
}
