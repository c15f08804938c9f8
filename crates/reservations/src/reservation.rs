use chrono::NaiveDate;
use serde::Serialize;

use hotelchain_core::{DomainResult, Entity, StayRange};

use crate::keys::{HotelKey, PayerNumber, ReservationNumber, RoomRef};
use crate::quantity::HowMany;
use crate::room::{Booking, Room};

/// A booking of one or more rooms for a stay, paid for by one reserver.
///
/// Number, dates and payer are fixed at creation. Quantity and rooms are
/// filled in by the chain while the reservation is being made.
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    number: ReservationNumber,
    reserved_on: NaiveDate,
    stay: StayRange,
    payer: PayerNumber,
    quantity: Option<HowMany>,
    rooms: Vec<RoomRef>,
}

impl Reservation {
    pub fn create(
        reserved_on: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        number: ReservationNumber,
        payer: PayerNumber,
    ) -> DomainResult<Self> {
        Ok(Self {
            number,
            reserved_on,
            stay: StayRange::new(start, end)?,
            payer,
            quantity: None,
            rooms: Vec::new(),
        })
    }

    pub fn number(&self) -> ReservationNumber {
        self.number
    }

    pub fn reserved_on(&self) -> NaiveDate {
        self.reserved_on
    }

    pub fn stay(&self) -> StayRange {
        self.stay
    }

    pub fn start_date(&self) -> NaiveDate {
        self.stay.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.stay.end()
    }

    pub fn payer(&self) -> PayerNumber {
        self.payer
    }

    pub fn quantity(&self) -> Option<HowMany> {
        self.quantity
    }

    pub fn rooms(&self) -> &[RoomRef] {
        &self.rooms
    }

    pub fn duration_in_days(&self) -> i64 {
        self.stay.nights()
    }

    /// Whether `today` falls within the stay, both ends included.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.stay.contains(today)
    }

    pub(crate) fn set_quantity(&mut self, quantity: HowMany) {
        self.quantity = Some(quantity);
    }

    /// Links `room` and this reservation in both directions.
    pub(crate) fn add_room(&mut self, hotel: HotelKey, room: &mut Room) {
        let room_ref = RoomRef {
            hotel,
            number: room.number(),
        };
        if self.rooms.contains(&room_ref) {
            return;
        }
        self.rooms.push(room_ref);
        room.add_booking(Booking {
            reservation: self.number,
            stay: self.stay,
        });
    }
}

impl Entity for Reservation {
    type Id = ReservationNumber;
    const KIND: &'static str = "reservation";

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.payer == other.payer
    }
}

impl Eq for Reservation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::RoomNumber;
    use crate::kind::RoomKind;
    use hotelchain_core::Name;
    use slotmap::SlotMap;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn payer() -> PayerNumber {
        PayerNumber::new(1).unwrap()
    }

    fn number() -> ReservationNumber {
        ReservationNumber::new(1001).unwrap()
    }

    fn june() -> Reservation {
        Reservation::create(d(2024, 1, 1), d(2024, 6, 1), d(2024, 6, 5), number(), payer()).unwrap()
    }

    #[test]
    fn create_keeps_its_inputs() {
        let r = june();
        assert_eq!(r.reserved_on(), d(2024, 1, 1));
        assert_eq!(r.start_date(), d(2024, 6, 1));
        assert_eq!(r.end_date(), d(2024, 6, 5));
        assert_eq!(r.number(), number());
        assert_eq!(r.payer(), payer());
        assert_eq!(r.quantity(), None);
    }

    #[test]
    fn start_must_precede_end() {
        let inverted = Reservation::create(d(2024, 1, 1), d(2024, 6, 5), d(2024, 6, 1), number(), payer());
        assert!(inverted.unwrap_err().is_validation());
        let empty = Reservation::create(d(2024, 1, 1), d(2024, 6, 1), d(2024, 6, 1), number(), payer());
        assert!(empty.is_err());
    }

    #[test]
    fn duration_in_days() {
        assert_eq!(june().duration_in_days(), 4);
        let january =
            Reservation::create(d(2024, 1, 1), d(2024, 1, 1), d(2024, 1, 31), number(), payer()).unwrap();
        assert_eq!(january.duration_in_days(), 30);
    }

    #[test]
    fn active_window_is_inclusive() {
        let r = june();
        assert!(!r.is_active_on(d(2024, 5, 31)));
        assert!(r.is_active_on(d(2024, 6, 1)));
        assert!(r.is_active_on(d(2024, 6, 5)));
        assert!(!r.is_active_on(d(2024, 6, 6)));
    }

    #[test]
    fn equality_is_number_and_payer() {
        let other_dates =
            Reservation::create(d(2024, 2, 1), d(2024, 8, 1), d(2024, 8, 2), number(), payer()).unwrap();
        assert_eq!(june(), other_dates);
        let other_payer =
            Reservation::create(d(2024, 1, 1), d(2024, 6, 1), d(2024, 6, 5), number(), PayerNumber::new(2).unwrap())
                .unwrap();
        assert_ne!(june(), other_payer);
    }

    #[test]
    fn add_room_links_both_sides_once() {
        let mut hotels: SlotMap<HotelKey, ()> = SlotMap::with_key();
        let hotel = hotels.insert(());
        let mut room = Room::new(RoomNumber::new(101).unwrap(), Name::new("Grand Hotel").unwrap(), RoomKind::Single);
        let mut r = june();

        r.add_room(hotel, &mut room);
        r.add_room(hotel, &mut room);

        assert_eq!(r.rooms().len(), 1);
        assert_eq!(r.rooms()[0].number, room.number());
        assert_eq!(room.reservations().collect::<Vec<_>>(), vec![r.number()]);
    }
}
