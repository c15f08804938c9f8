use serde::Serialize;

use hotelchain_core::{Address, Entity, Name};

use crate::keys::RoomRef;

/// A person staying at a hotel.
///
/// The guest is distinct from the reserver who pays; a guest can check in
/// without holding any reservation.
#[derive(Debug, Clone, Serialize)]
pub struct Guest {
    name: Name,
    address: Address,
    occupied_room: Option<RoomRef>,
}

impl Guest {
    pub fn create(name: Name, address: Address) -> Self {
        Self {
            name,
            address,
            occupied_room: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn occupied_room(&self) -> Option<RoomRef> {
        self.occupied_room
    }

    pub fn is_checked_in(&self) -> bool {
        self.occupied_room.is_some()
    }

    pub(crate) fn set_occupied_room(&mut self, room: Option<RoomRef>) {
        self.occupied_room = room;
    }
}

impl Entity for Guest {
    type Id = Name;
    const KIND: &'static str = "guest";

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl PartialEq for Guest {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.address == other.address
    }
}

impl Eq for Guest {}
