//! Identifiers for registry entities.
//!
//! Hotels and guests live in slot arenas inside the registry and are addressed
//! by generated keys; rooms, payers and reservations are addressed by their
//! positive business numbers.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use hotelchain_core::{DomainError, DomainResult};

new_key_type! {
    /// Arena key of a hotel registered with a chain.
    pub struct HotelKey;

    /// Arena key of a guest registered with a chain.
    pub struct GuestKey;
}

macro_rules! impl_positive_number {
    ($t:ident, $inner:ty, $name:literal) => {
        impl $t {
            pub fn new(value: $inner) -> DomainResult<Self> {
                if value == 0 {
                    return Err(DomainError::validation(concat!($name, " must be positive")));
                }
                Ok(Self(value))
            }

            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<$inner> for $t {
            type Error = DomainError;

            fn try_from(value: $inner) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

/// Room number, unique within one hotel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u32);

/// Reserver-payer number, unique within one registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayerNumber(u32);

/// Reservation number, unique within one registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationNumber(u64);

impl_positive_number!(RoomNumber, u32, "room number");
impl_positive_number!(PayerNumber, u32, "payer number");
impl_positive_number!(ReservationNumber, u64, "reservation number");

/// Address of one room inside a chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRef {
    pub hotel: HotelKey,
    pub number: RoomNumber,
}
