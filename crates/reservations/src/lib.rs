//! Hotel chain reservation registry.
//!
//! Hotels own room types and rooms; guests occupy rooms; reserver-payers
//! hold at most one reservation each. [`HotelChain`] is the aggregate root
//! that registers entities and runs every operation spanning more than one
//! of them. All state is in memory and every call is synchronous.

pub mod chain;
pub mod clock;
pub mod guest;
pub mod hotel;
pub mod keys;
pub mod kind;
pub mod payer;
pub mod quantity;
pub mod reservation;
pub mod room;
pub mod room_type;

pub use chain::HotelChain;
pub use clock::{Clock, FixedClock, SystemClock};
pub use guest::Guest;
pub use hotel::Hotel;
pub use keys::{GuestKey, HotelKey, PayerNumber, ReservationNumber, RoomNumber, RoomRef};
pub use kind::RoomKind;
pub use payer::ReserverPayer;
pub use quantity::HowMany;
pub use reservation::Reservation;
pub use room::{Booking, Room};
pub use room_type::RoomType;
