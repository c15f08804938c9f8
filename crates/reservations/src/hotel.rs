use chrono::NaiveDate;
use serde::Serialize;

use hotelchain_core::{DomainError, DomainResult, Entity, Money, Name};

use crate::keys::{HotelKey, PayerNumber, ReservationNumber, RoomNumber};
use crate::kind::RoomKind;
use crate::reservation::Reservation;
use crate::room::Room;
use crate::room_type::RoomType;

/// A hotel: its room types and the rooms it owns.
///
/// Rooms are only ever created through [`Hotel::add_room`], which registers
/// each room with the hotel and with its room type together.
#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    name: Name,
    #[serde(skip)]
    key: Option<HotelKey>,
    room_types: Vec<RoomType>,
    rooms: Vec<Room>,
}

impl Hotel {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            key: None,
            room_types: Vec::new(),
            rooms: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Key under which the owning chain stores this hotel, once registered.
    pub fn key(&self) -> Option<HotelKey> {
        self.key
    }

    pub fn is_registered(&self) -> bool {
        self.key.is_some()
    }

    pub(crate) fn set_key(&mut self, key: HotelKey) {
        self.key = Some(key);
    }

    pub fn room_types(&self) -> &[RoomType] {
        &self.room_types
    }

    pub fn room_type(&self, kind: RoomKind) -> Option<&RoomType> {
        self.room_types.iter().find(|rt| rt.kind() == kind)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    pub(crate) fn room_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number() == number)
    }

    pub fn add_room_type(&mut self, kind: RoomKind, rate: Money) -> DomainResult<()> {
        if self.room_type(kind).is_some() {
            return Err(DomainError::state(format!(
                "hotel {} already has a {kind} room type",
                self.name
            )));
        }
        self.room_types.push(RoomType::new(kind, rate, self.name.clone()));
        Ok(())
    }

    pub fn add_room(&mut self, number: RoomNumber, kind: RoomKind) -> DomainResult<()> {
        if let Some(existing) = self.room(number) {
            return Err(existing.duplicate());
        }
        let name = self.name.clone();
        let room_type = self
            .room_types
            .iter_mut()
            .find(|rt| rt.kind() == kind)
            .ok_or_else(|| DomainError::state(format!("hotel {name} has no {kind} room type")))?;
        room_type.add_room(number);
        self.rooms.push(Room::new(number, name, kind));
        Ok(())
    }

    /// Whether `quantity` rooms of `kind` are free for `[start, end]`.
    ///
    /// Never fails: a non-positive quantity or an unknown room kind is
    /// simply "not available".
    pub fn available(&self, kind: RoomKind, start: NaiveDate, end: NaiveDate, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        let Some(room_type) = self.room_type(kind) else {
            return false;
        };
        let free = self.free_rooms(room_type, start, end).count();
        free as i64 >= quantity
    }

    /// Up to `quantity` free rooms of `kind`, first-fit in room-type order.
    pub fn find_available_rooms(
        &self,
        kind: RoomKind,
        start: NaiveDate,
        end: NaiveDate,
        quantity: usize,
    ) -> Vec<RoomNumber> {
        let Some(room_type) = self.room_type(kind) else {
            return Vec::new();
        };
        self.free_rooms(room_type, start, end)
            .take(quantity)
            .map(Room::number)
            .collect()
    }

    /// Rooms of `kind` with no current occupant.
    pub fn available_room_count(&self, kind: RoomKind) -> usize {
        self.room_type(kind)
            .map(|rt| {
                rt.rooms()
                    .iter()
                    .filter_map(|n| self.room(*n))
                    .filter(|r| !r.is_occupied())
                    .count()
            })
            .unwrap_or(0)
    }

    fn free_rooms<'a>(
        &'a self,
        room_type: &'a RoomType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &'a Room> + 'a {
        room_type
            .rooms()
            .iter()
            .filter_map(move |n| self.room(*n))
            .filter(move |r| r.is_free_for(start, end))
    }

    pub fn create_reservation(
        &self,
        reserved_on: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        number: ReservationNumber,
        payer: PayerNumber,
    ) -> DomainResult<Reservation> {
        Reservation::create(reserved_on, start, end, number, payer)
    }
}

impl Entity for Hotel {
    type Id = Name;
    const KIND: &'static str = "hotel";

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl PartialEq for Hotel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Hotel {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Booking;
    use hotelchain_core::StayRange;
    use proptest::prelude::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn room_no(n: u32) -> RoomNumber {
        RoomNumber::new(n).unwrap()
    }

    fn grand_hotel(singles: &[u32]) -> Hotel {
        let mut hotel = Hotel::new(Name::new("Grand Hotel").unwrap());
        hotel
            .add_room_type(RoomKind::Single, Money::parse("100", "USD").unwrap())
            .unwrap();
        for n in singles {
            hotel.add_room(room_no(*n), RoomKind::Single).unwrap();
        }
        hotel
    }

    fn book(hotel: &mut Hotel, room: u32, reservation: u64, start: NaiveDate, end: NaiveDate) {
        hotel.room_mut(room_no(room)).unwrap().add_booking(Booking {
            reservation: ReservationNumber::new(reservation).unwrap(),
            stay: StayRange::new(start, end).unwrap(),
        });
    }

    #[test]
    fn new_hotel_is_empty_and_unregistered() {
        let hotel = Hotel::new(Name::new("Test Hotel").unwrap());
        assert_eq!(hotel.name().as_str(), "Test Hotel");
        assert!(!hotel.is_registered());
        assert!(hotel.rooms().is_empty());
        assert!(hotel.room_types().is_empty());
    }

    #[test]
    fn add_room_links_room_and_room_type() {
        let hotel = grand_hotel(&[101, 102]);
        assert_eq!(hotel.rooms().len(), 2);
        assert_eq!(hotel.room_type(RoomKind::Single).unwrap().rooms(), &[room_no(101), room_no(102)]);
        assert_eq!(hotel.room(room_no(102)).unwrap().kind(), RoomKind::Single);
    }

    #[test]
    fn add_room_rejects_duplicates_and_unknown_kinds() {
        let mut hotel = grand_hotel(&[101]);
        assert!(hotel.add_room(room_no(101), RoomKind::Single).unwrap_err().is_state());
        assert!(hotel.add_room(room_no(201), RoomKind::Double).unwrap_err().is_state());
        assert!(
            hotel
                .add_room_type(RoomKind::Single, Money::parse("90", "USD").unwrap())
                .unwrap_err()
                .is_state()
        );
        assert_eq!(hotel.rooms().len(), 1);
    }

    #[test]
    fn available_for_existing_kind_only() {
        let hotel = grand_hotel(&[101]);
        assert!(hotel.available(RoomKind::Single, d(6, 1), d(6, 5), 1));
        assert!(!hotel.available(RoomKind::Double, d(6, 1), d(6, 5), 1));
        assert!(!hotel.available(RoomKind::Single, d(6, 1), d(6, 5), 2));
    }

    #[test]
    fn non_positive_quantity_is_never_available() {
        let hotel = grand_hotel(&[101]);
        assert!(!hotel.available(RoomKind::Single, d(6, 1), d(6, 5), 0));
        assert!(!hotel.available(RoomKind::Single, d(6, 1), d(6, 5), -3));
    }

    #[test]
    fn booked_room_is_unavailable_for_overlapping_dates() {
        let mut hotel = grand_hotel(&[101]);
        book(&mut hotel, 101, 1, d(6, 1), d(6, 5));
        assert!(!hotel.available(RoomKind::Single, d(6, 1), d(6, 5), 1));
        assert!(!hotel.available(RoomKind::Single, d(6, 5), d(6, 9), 1));
        assert!(hotel.available(RoomKind::Single, d(7, 1), d(7, 5), 1));
    }

    #[test]
    fn find_available_rooms_is_first_fit() {
        let mut hotel = grand_hotel(&[101, 102, 103]);
        book(&mut hotel, 101, 1, d(6, 1), d(6, 5));
        assert_eq!(
            hotel.find_available_rooms(RoomKind::Single, d(6, 2), d(6, 3), 5),
            vec![room_no(102), room_no(103)]
        );
        assert_eq!(
            hotel.find_available_rooms(RoomKind::Single, d(6, 2), d(6, 3), 1),
            vec![room_no(102)]
        );
        assert!(hotel.find_available_rooms(RoomKind::Suite, d(6, 2), d(6, 3), 1).is_empty());
    }

    #[test]
    fn available_room_count_ignores_bookings() {
        let mut hotel = grand_hotel(&[101, 102]);
        book(&mut hotel, 101, 1, d(6, 1), d(6, 5));
        assert_eq!(hotel.available_room_count(RoomKind::Single), 2);
        assert_eq!(hotel.available_room_count(RoomKind::Penthouse), 0);
    }

    #[test]
    fn create_reservation_binds_payer() {
        let hotel = grand_hotel(&[101]);
        let payer = PayerNumber::new(1).unwrap();
        let r = hotel
            .create_reservation(d(1, 1), d(6, 1), d(6, 5), ReservationNumber::new(1001).unwrap(), payer)
            .unwrap();
        assert_eq!(r.payer(), payer);
        assert!(r.rooms().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: availability for N implies availability for every 1..=N.
        #[test]
        fn availability_is_monotone_in_quantity(
            rooms in 1u32..8,
            booked in prop::collection::vec((0u32..8, 0i64..60, 1i64..10), 0..8),
            start_offset in 0i64..60,
            len in 1i64..10,
        ) {
            let numbers: Vec<u32> = (1..=rooms).map(|n| 100 + n).collect();
            let mut hotel = grand_hotel(&numbers);
            let base = d(6, 1);
            for (i, (room, offset, nights)) in booked.iter().enumerate() {
                if *room < rooms {
                    let start = base + chrono::Duration::days(*offset);
                    book(&mut hotel, 101 + room, i as u64 + 1, start, start + chrono::Duration::days(*nights));
                }
            }
            let start = base + chrono::Duration::days(start_offset);
            let end = start + chrono::Duration::days(len);
            for n in 1..=i64::from(rooms) {
                if hotel.available(RoomKind::Single, start, end, n) {
                    for m in 1..=n {
                        prop_assert!(hotel.available(RoomKind::Single, start, end, m));
                    }
                }
            }
        }

        /// Property: adding a booking never increases the free-room count.
        #[test]
        fn booking_never_increases_free_rooms(
            rooms in 1u32..6,
            target in 0u32..6,
            offset in 0i64..20,
            nights in 1i64..10,
        ) {
            let numbers: Vec<u32> = (1..=rooms).map(|n| 100 + n).collect();
            let mut hotel = grand_hotel(&numbers);
            let (start, end) = (d(6, 1), d(6, 10));
            let before = hotel.find_available_rooms(RoomKind::Single, start, end, 10).len();
            if target < rooms {
                let s = d(6, 1) + chrono::Duration::days(offset);
                book(&mut hotel, 101 + target, 1, s, s + chrono::Duration::days(nights));
            }
            let after = hotel.find_available_rooms(RoomKind::Single, start, end, 10).len();
            prop_assert!(after <= before);
        }
    }
}
