use chrono::NaiveDate;
use serde::Serialize;

use hotelchain_core::{Entity, Name, StayRange};

use crate::keys::{GuestKey, ReservationNumber, RoomNumber};
use crate::kind::RoomKind;

/// A reservation's claim on a room: which reservation, for which stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub reservation: ReservationNumber,
    pub stay: StayRange,
}

/// A physical, bookable room.
///
/// Occupancy (a guest physically in the room) and bookings (reservations
/// that include the room) are tracked separately and never imply each other.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    number: RoomNumber,
    hotel: Name,
    kind: RoomKind,
    #[serde(skip)]
    occupant: Option<GuestKey>,
    bookings: Vec<Booking>,
}

impl Room {
    pub(crate) fn new(number: RoomNumber, hotel: Name, kind: RoomKind) -> Self {
        Self {
            number,
            hotel,
            kind,
            occupant: None,
            bookings: Vec::new(),
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn hotel(&self) -> &Name {
        &self.hotel
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn occupant(&self) -> Option<GuestKey> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_available(&self) -> bool {
        !self.is_occupied()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn reservations(&self) -> impl Iterator<Item = ReservationNumber> + '_ {
        self.bookings.iter().map(|b| b.reservation)
    }

    /// Free of occupants and of any booking overlapping `[start, end]`.
    pub fn is_free_for(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !self.is_occupied() && !self.bookings.iter().any(|b| b.stay.overlaps_dates(start, end))
    }

    pub(crate) fn set_occupant(&mut self, guest: Option<GuestKey>) {
        self.occupant = guest;
    }

    pub(crate) fn add_booking(&mut self, booking: Booking) {
        if !self.bookings.iter().any(|b| b.reservation == booking.reservation) {
            self.bookings.push(booking);
        }
    }

    pub(crate) fn remove_booking(&mut self, reservation: ReservationNumber) {
        self.bookings.retain(|b| b.reservation != reservation);
    }
}

impl Entity for Room {
    type Id = RoomNumber;
    const KIND: &'static str = "room";

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

/// Rooms are equal when they carry the same number in the same hotel.
impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.hotel == other.hotel
    }
}

impl Eq for Room {}
