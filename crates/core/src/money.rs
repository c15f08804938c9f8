//! [`Money`]: nightly rates and other amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative amount in a 3-letter currency, kept at a scale of 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

#[derive(Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: String,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(value: MoneyRepr) -> Result<Self, Self::Error> {
        Self::new(value.amount, &value.currency)
    }
}

impl Money {
    /// Rounds `amount` half-up to two decimals and upper-cases `currency`.
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(DomainError::validation("currency cannot be empty"));
        }
        if currency.chars().count() != 3 {
            return Err(DomainError::validation(
                "currency must be a 3-letter code (e.g. USD, EUR)",
            ));
        }
        let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(2);
        Ok(Self {
            amount,
            currency: currency.to_uppercase(),
        })
    }

    /// Parses a plain decimal string such as `"100"` or `"99.95"`.
    pub fn parse(amount: &str, currency: &str) -> DomainResult<Self> {
        let amount: Decimal = amount
            .trim()
            .parse()
            .map_err(|e| DomainError::validation(format!("invalid amount {amount:?}: {e}")))?;
        Self::new(amount, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::validation(
                "cannot add amounts in different currencies",
            ));
        }
        Money::new(self.amount + other.amount, &self.currency)
    }

    pub fn multiply(&self, multiplier: u32) -> DomainResult<Money> {
        Money::new(self.amount * Decimal::from(multiplier), &self.currency)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}
