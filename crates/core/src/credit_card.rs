use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Payment card details held by a reserver.
///
/// The full number and the CVV never leave this type through `Debug`,
/// `Display` or serialization; only the last four digits are shown.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CreditCard {
    card_number: String,
    card_holder_name: String,
    expiry_date: String,
    cvv: String,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

impl CreditCard {
    pub fn new(
        card_number: &str,
        card_holder_name: &str,
        expiry_date: &str,
        cvv: &str,
    ) -> DomainResult<Self> {
        if card_number.trim().is_empty() {
            return Err(DomainError::validation("card number cannot be empty"));
        }
        let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if !all_digits(&digits) || !(13..=19).contains(&digits.len()) {
            return Err(DomainError::validation("card number must be 13-19 digits"));
        }

        if card_holder_name.trim().is_empty() {
            return Err(DomainError::validation("card holder name cannot be empty"));
        }
        if !(2..=50).contains(&card_holder_name.chars().count()) {
            return Err(DomainError::validation(
                "card holder name must be between 2 and 50 characters",
            ));
        }

        if expiry_date.trim().is_empty() {
            return Err(DomainError::validation("expiry date cannot be empty"));
        }
        let valid_expiry = match expiry_date.split_once('/') {
            Some((mm, yy)) => mm.len() == 2 && yy.len() == 2 && all_digits(mm) && all_digits(yy),
            None => false,
        };
        if !valid_expiry {
            return Err(DomainError::validation("expiry date must be in MM/YY format"));
        }

        if cvv.trim().is_empty() {
            return Err(DomainError::validation("CVV cannot be empty"));
        }
        if !all_digits(cvv) || !(3..=4).contains(&cvv.len()) {
            return Err(DomainError::validation("CVV must be 3 or 4 digits"));
        }

        Ok(Self {
            card_number: digits,
            card_holder_name: card_holder_name.to_string(),
            expiry_date: expiry_date.to_string(),
            cvv: cvv.to_string(),
        })
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn card_holder_name(&self) -> &str {
        &self.card_holder_name
    }

    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// `***` followed by the last four digits.
    pub fn masked_number(&self) -> String {
        let tail = &self.card_number[self.card_number.len() - 4..];
        format!("***{tail}")
    }
}

impl ValueObject for CreditCard {}

impl core::fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CreditCard")
            .field("card_number", &self.masked_number())
            .field("card_holder_name", &self.card_holder_name)
            .finish_non_exhaustive()
    }
}

impl core::fmt::Display for CreditCard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.masked_number(), self.card_holder_name)
    }
}

impl Serialize for CreditCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CreditCard", 2)?;
        s.serialize_field("card_number", &self.masked_number())?;
        s.serialize_field("card_holder_name", &self.card_holder_name)?;
        s.end()
    }
}
