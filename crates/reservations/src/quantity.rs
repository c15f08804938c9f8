use serde::{Deserialize, Serialize};

use hotelchain_core::{DomainError, DomainResult, ValueObject};

/// Number of rooms requested by one reservation: 1 to 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct HowMany(u8);

impl HowMany {
    pub const MAX: i64 = 10;

    pub fn new(number: i64) -> DomainResult<Self> {
        if number <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if number > Self::MAX {
            return Err(DomainError::validation(
                "quantity cannot exceed 10 rooms per reservation",
            ));
        }
        Ok(Self(number as u8))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl ValueObject for HowMany {}

impl TryFrom<i64> for HowMany {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HowMany> for i64 {
    fn from(value: HowMany) -> Self {
        i64::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        for bad in [0, -1, 11, 100] {
            assert!(HowMany::new(bad).unwrap_err().is_validation(), "{bad}");
        }
        assert_eq!(HowMany::new(1).unwrap().get(), 1);
        assert_eq!(HowMany::new(10).unwrap().get(), 10);
    }

    #[test]
    fn equal_by_value() {
        assert_eq!(HowMany::new(3).unwrap(), HowMany::new(3).unwrap());
        assert_ne!(HowMany::new(3).unwrap(), HowMany::new(4).unwrap());
    }
}
