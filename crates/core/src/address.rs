use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Postal address of a guest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressRepr")]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
}

#[derive(Deserialize)]
struct AddressRepr {
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
}

impl TryFrom<AddressRepr> for Address {
    type Error = DomainError;

    fn try_from(value: AddressRepr) -> Result<Self, Self::Error> {
        Self::new(value.street, value.city, value.state, value.zip_code, value.country)
    }
}

fn required(field: &str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            street: required("street", street.into())?,
            city: required("city", city.into())?,
            state: required("state", state.into())?,
            zip_code: required("zip code", zip_code.into())?,
            country: required("country", country.into())?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }
}
