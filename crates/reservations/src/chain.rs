//! The hotel chain registry: keyed tables plus the operations that touch
//! more than one entity (booking, cancellation, check-in, check-out).
//!
//! Every mutating operation validates everything it needs before changing
//! anything, so a failed call leaves the registry exactly as it was.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use slotmap::SlotMap;

use hotelchain_core::{
    AggregateRoot, ChainId, CreditCard, DomainError, DomainResult, Entity, Identity, StayRange,
};

use crate::clock::{Clock, SystemClock};
use crate::guest::Guest;
use crate::hotel::Hotel;
use crate::keys::{GuestKey, HotelKey, PayerNumber, ReservationNumber, RoomNumber, RoomRef};
use crate::kind::RoomKind;
use crate::payer::ReserverPayer;
use crate::quantity::HowMany;
use crate::reservation::Reservation;

/// Aggregate root of the reservation domain.
#[derive(Debug)]
pub struct HotelChain {
    id: ChainId,
    version: u64,
    clock: Box<dyn Clock>,
    next_reservation: u64,
    payers: BTreeMap<PayerNumber, ReserverPayer>,
    guests: SlotMap<GuestKey, Guest>,
    guest_index: HashMap<String, GuestKey>,
    hotels: SlotMap<HotelKey, Hotel>,
    hotel_index: HashMap<String, HotelKey>,
}

impl Default for HotelChain {
    fn default() -> Self {
        Self::new()
    }
}

impl HotelChain {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            id: ChainId::new(),
            version: 0,
            clock: Box::new(clock),
            next_reservation: 1,
            payers: BTreeMap::new(),
            guests: SlotMap::with_key(),
            guest_index: HashMap::new(),
            hotels: SlotMap::with_key(),
            hotel_index: HashMap::new(),
        }
    }

    // ---- registration -------------------------------------------------

    pub fn add_hotel(&mut self, mut hotel: Hotel) -> DomainResult<HotelKey> {
        let name = hotel.id().as_str().to_string();
        if self.hotel_index.contains_key(&name) {
            return Err(hotel.duplicate());
        }
        let key = self.hotels.insert_with_key(|key| {
            hotel.set_key(key);
            hotel
        });
        self.hotel_index.insert(name.clone(), key);
        self.version += 1;
        tracing::info!(hotel = %name, "hotel registered");
        Ok(key)
    }

    pub fn add_guest(&mut self, guest: Guest) -> DomainResult<GuestKey> {
        let name = guest.id().as_str().to_string();
        if self.guest_index.contains_key(&name) {
            return Err(guest.duplicate());
        }
        let key = self.guests.insert(guest);
        self.guest_index.insert(name.clone(), key);
        self.version += 1;
        tracing::info!(guest = %name, "guest registered");
        Ok(key)
    }

    pub fn create_reserver_payer(
        &mut self,
        card: CreditCard,
        identity: Identity,
        number: u32,
    ) -> DomainResult<&ReserverPayer> {
        let payer = ReserverPayer::create(card, identity, number)?;
        match self.payers.entry(*payer.id()) {
            Entry::Occupied(_) => Err(payer.duplicate()),
            Entry::Vacant(slot) => {
                self.version += 1;
                tracing::info!(payer = number, "reserver payer created");
                Ok(slot.insert(payer))
            }
        }
    }

    // ---- lookups ------------------------------------------------------

    pub fn hotel(&self, name: &str) -> Option<&Hotel> {
        self.hotel_index.get(name).and_then(|k| self.hotels.get(*k))
    }

    /// Mutable access for adding room types and rooms after registration.
    pub fn hotel_mut(&mut self, name: &str) -> Option<&mut Hotel> {
        let key = *self.hotel_index.get(name)?;
        self.hotels.get_mut(key)
    }

    pub fn hotel_by_key(&self, key: HotelKey) -> Option<&Hotel> {
        self.hotels.get(key)
    }

    pub fn hotels(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.values()
    }

    pub fn guest(&self, name: &str) -> Option<&Guest> {
        self.guest_index.get(name).and_then(|k| self.guests.get(*k))
    }

    pub fn guest_by_key(&self, key: GuestKey) -> Option<&Guest> {
        self.guests.get(key)
    }

    pub fn guests(&self) -> impl Iterator<Item = &Guest> {
        self.guests.values()
    }

    pub fn reserver_payer(&self, number: u32) -> Option<&ReserverPayer> {
        let number = PayerNumber::new(number).ok()?;
        self.payers.get(&number)
    }

    /// Guest currently occupying room `room` of hotel `hotel`, if any.
    pub fn room_occupant(&self, hotel: &str, room: u32) -> Option<&Guest> {
        let room = RoomNumber::new(room).ok()?;
        let key = self.hotel(hotel)?.room(room)?.occupant()?;
        self.guests.get(key)
    }

    /// Every reservation currently linked to a payer, ordered by payer number.
    pub fn all_reservations(&self) -> Vec<&Reservation> {
        self.payers.values().filter_map(ReserverPayer::reservation).collect()
    }

    pub fn reservation(&self, number: ReservationNumber) -> Option<&Reservation> {
        self.payers
            .values()
            .filter_map(ReserverPayer::reservation)
            .find(|r| r.number() == number)
    }

    // ---- booking ------------------------------------------------------

    /// Books `quantity` rooms of `kind` at `hotel_name` for `[start, end]`,
    /// paid by payer `payer`.
    ///
    /// The guest must be registered but is not recorded on the reservation.
    /// A payer that already holds a reservation has it replaced; the replaced
    /// reservation keeps its rooms.
    #[allow(clippy::too_many_arguments)]
    pub fn make_reservation(
        &mut self,
        payer: u32,
        guest_name: &str,
        hotel_name: &str,
        kind: RoomKind,
        start: NaiveDate,
        end: NaiveDate,
        quantity: i64,
    ) -> DomainResult<&Reservation> {
        let payer_no = PayerNumber::new(payer)
            .ok()
            .filter(|n| self.payers.contains_key(n))
            .ok_or_else(|| DomainError::not_found(format!("reserver payer {payer}")))?;
        if !self.guest_index.contains_key(guest_name) {
            return Err(DomainError::not_found(format!("guest {guest_name}")));
        }
        let hotel_key = *self
            .hotel_index
            .get(hotel_name)
            .ok_or_else(|| DomainError::not_found(format!("hotel {hotel_name}")))?;
        let how_many = HowMany::new(quantity)?;
        StayRange::new(start, end)?;

        let hotel = self
            .hotels
            .get_mut(hotel_key)
            .ok_or_else(|| DomainError::not_found(format!("hotel {hotel_name}")))?;
        if !hotel.available(kind, start, end, quantity) {
            tracing::debug!(hotel = hotel_name, %kind, %start, %end, quantity, "no availability");
            return Err(DomainError::state(format!(
                "cannot make reservation: {quantity} {kind} room(s) not available at {hotel_name} from {start} to {end}"
            )));
        }

        let number = ReservationNumber::new(self.next_reservation)?;
        let mut reservation =
            hotel.create_reservation(self.clock.today(), start, end, number, payer_no)?;

        let rooms = hotel.find_available_rooms(kind, start, end, how_many.get());
        if rooms.len() < how_many.get() {
            return Err(DomainError::state("not enough available rooms"));
        }

        reservation.set_quantity(how_many);
        for room_no in &rooms {
            let room = hotel
                .room_mut(*room_no)
                .ok_or_else(|| DomainError::state(format!("room {room_no} disappeared")))?;
            reservation.add_room(hotel_key, room);
        }

        self.next_reservation += 1;
        self.version += 1;

        let payer_entry = self
            .payers
            .get_mut(&payer_no)
            .ok_or_else(|| DomainError::not_found(format!("reserver payer {payer}")))?;
        let (replaced, linked) = payer_entry.link(reservation);
        if let Some(previous) = replaced {
            tracing::warn!(
                payer,
                replaced = %previous.number(),
                "payer already held a reservation; link overwritten"
            );
        }
        tracing::info!(
            reservation = %number,
            payer,
            hotel = hotel_name,
            %kind,
            %start,
            %end,
            rooms = rooms.len(),
            "reservation made"
        );
        Ok(linked)
    }

    /// Releases the rooms held by reservation `number` and detaches it from
    /// its payer. The detached reservation is handed back to the caller.
    pub fn cancel_reservation(&mut self, number: ReservationNumber) -> DomainResult<Reservation> {
        let reservation = self
            .payers
            .values_mut()
            .find(|p| p.reservation().is_some_and(|r| r.number() == number))
            .and_then(ReserverPayer::unlink)
            .ok_or_else(|| DomainError::not_found(format!("reservation {number}")))?;

        for room_ref in reservation.rooms() {
            if let Some(room) = self
                .hotels
                .get_mut(room_ref.hotel)
                .and_then(|h| h.room_mut(room_ref.number))
            {
                room.remove_booking(number);
            }
        }

        self.version += 1;
        tracing::info!(
            reservation = %number,
            payer = %reservation.payer(),
            rooms = reservation.rooms().len(),
            "reservation cancelled"
        );
        Ok(reservation)
    }

    // ---- occupancy ----------------------------------------------------

    /// Puts guest `guest_name` into room `room` of `hotel_name`.
    ///
    /// Walk-in semantics: no reservation is required or consulted.
    pub fn checkin_guest(&mut self, guest_name: &str, room: u32, hotel_name: &str) -> DomainResult<()> {
        let guest_key = *self
            .guest_index
            .get(guest_name)
            .ok_or_else(|| DomainError::not_found(format!("guest {guest_name}")))?;
        let hotel_key = *self
            .hotel_index
            .get(hotel_name)
            .ok_or_else(|| DomainError::not_found(format!("hotel {hotel_name}")))?;
        let room_no = RoomNumber::new(room)
            .ok()
            .filter(|n| self.hotels.get(hotel_key).is_some_and(|h| h.room(*n).is_some()))
            .ok_or_else(|| DomainError::not_found(format!("room {room} at {hotel_name}")))?;

        let guest = self
            .guests
            .get_mut(guest_key)
            .ok_or_else(|| DomainError::not_found(format!("guest {guest_name}")))?;
        let room_entry = self
            .hotels
            .get_mut(hotel_key)
            .and_then(|h| h.room_mut(room_no))
            .ok_or_else(|| DomainError::not_found(format!("room {room} at {hotel_name}")))?;

        if room_entry.is_occupied() {
            return Err(DomainError::state(format!("room {room} is already occupied")));
        }
        if guest.is_checked_in() {
            return Err(DomainError::state(format!(
                "guest {guest_name} is already checked in to another room"
            )));
        }

        room_entry.set_occupant(Some(guest_key));
        guest.set_occupied_room(Some(RoomRef {
            hotel: hotel_key,
            number: room_no,
        }));
        self.version += 1;
        tracing::info!(guest = guest_name, hotel = hotel_name, room, "guest checked in");
        Ok(())
    }

    pub fn check_out_guest(&mut self, guest_name: &str) -> DomainResult<()> {
        let guest = self
            .guest_index
            .get(guest_name)
            .and_then(|k| self.guests.get_mut(*k))
            .ok_or_else(|| DomainError::not_found(format!("guest {guest_name}")))?;
        let room_ref = guest
            .occupied_room()
            .ok_or_else(|| DomainError::state(format!("guest {guest_name} is not checked in")))?;

        if let Some(room) = self
            .hotels
            .get_mut(room_ref.hotel)
            .and_then(|h| h.room_mut(room_ref.number))
        {
            room.set_occupant(None);
        }
        guest.set_occupied_room(None);
        self.version += 1;
        tracing::info!(guest = guest_name, room = %room_ref.number, "guest checked out");
        Ok(())
    }
}

impl AggregateRoot for HotelChain {
    type Id = ChainId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
