use serde::Serialize;

use hotelchain_core::{Money, Name};

use crate::keys::RoomNumber;
use crate::kind::RoomKind;

/// One kind of room at one hotel, with its nightly rate.
///
/// Holds the numbers of its rooms in insertion order; the rooms themselves
/// are owned by the hotel.
#[derive(Debug, Clone, Serialize)]
pub struct RoomType {
    kind: RoomKind,
    rate: Money,
    hotel: Name,
    rooms: Vec<RoomNumber>,
}

impl RoomType {
    pub fn new(kind: RoomKind, rate: Money, hotel: Name) -> Self {
        Self {
            kind,
            rate,
            hotel,
            rooms: Vec::new(),
        }
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn rate(&self) -> &Money {
        &self.rate
    }

    pub fn hotel(&self) -> &Name {
        &self.hotel
    }

    pub fn rooms(&self) -> &[RoomNumber] {
        &self.rooms
    }

    pub(crate) fn add_room(&mut self, number: RoomNumber) {
        if !self.rooms.contains(&number) {
            self.rooms.push(number);
        }
    }
}

impl PartialEq for RoomType {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.hotel == other.hotel
    }
}

impl Eq for RoomType {}
