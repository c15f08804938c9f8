//! Scripted walk through every registry use case, printed as a report.

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;

use hotelchain_core::{
    Address, AggregateRoot, ChainId, CreditCard, Identity, IdentityType, Money, Name,
};
use hotelchain_reservations::{
    FixedClock, Guest, Hotel, HotelChain, RoomKind, RoomNumber,
};

use crate::config::DemoConfig;

const GRAND: &str = "Grand Hotel";
const PARADISE: &str = "Paradise Resort";
const RULE_WIDTH: usize = 80;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub chain_id: ChainId,
    pub hotels: usize,
    pub guests: usize,
    pub active_reservations: usize,
    pub grand_hotel_rooms: usize,
}

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid date {y}-{m}-{d}"))
}

fn heading(out: &mut impl Write, title: &str) -> anyhow::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

fn grand_hotel() -> anyhow::Result<Hotel> {
    let mut hotel = Hotel::new(Name::new(GRAND)?);
    hotel.add_room_type(RoomKind::Single, Money::parse("100", "USD")?)?;
    hotel.add_room_type(RoomKind::Double, Money::parse("150", "USD")?)?;
    hotel.add_room_type(RoomKind::Suite, Money::parse("300", "USD")?)?;
    for n in 101..=103 {
        hotel.add_room(RoomNumber::new(n)?, RoomKind::Single)?;
    }
    for n in 201..=202 {
        hotel.add_room(RoomNumber::new(n)?, RoomKind::Double)?;
    }
    hotel.add_room(RoomNumber::new(301)?, RoomKind::Suite)?;
    Ok(hotel)
}

pub fn run(out: &mut impl Write, config: &DemoConfig) -> anyhow::Result<Summary> {
    let mut chain = match config.today {
        Some(today) => HotelChain::with_clock(FixedClock(today)),
        None => HotelChain::new(),
    };
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}\nHOTEL RESERVATION SYSTEM - USE CASE WALKTHROUGH\n{rule}")?;
    writeln!(out, "registry {}\n", chain.id())?;

    heading(out, "USE CASE 1: Creating Hotels")?;
    chain.add_hotel(grand_hotel()?)?;
    chain.add_hotel(Hotel::new(Name::new(PARADISE)?))?;
    for hotel in [GRAND, PARADISE] {
        writeln!(out, "  created hotel: {hotel}")?;
    }
    writeln!(out)?;

    heading(out, "USE CASE 2: Room Types and Rooms")?;
    let grand = chain.hotel(GRAND).context("grand hotel missing")?;
    for rt in grand.room_types() {
        writeln!(
            out,
            "  {:<9} {:>10}  rooms: {}",
            rt.kind().as_str(),
            rt.rate().to_string(),
            rt.rooms().len()
        )?;
    }
    writeln!(out, "  {} rooms in {GRAND}\n", grand.rooms().len())?;

    heading(out, "USE CASE 3: Creating Guests")?;
    let guests = [
        ("John Doe", Address::new("123 Main Street", "New York", "NY", "10001", "USA")?),
        ("Jane Smith", Address::new("456 Oak Avenue", "Los Angeles", "CA", "90001", "USA")?),
    ];
    for (name, address) in guests {
        chain.add_guest(Guest::create(Name::new(name)?, address))?;
        writeln!(out, "  created guest: {name}")?;
    }
    writeln!(out)?;

    heading(out, "USE CASE 4: Creating Reserver Payers")?;
    let payers = [
        (1, "1234567890123456", "John Doe", "12/25", "123", "ID123456", IdentityType::Passport),
        (2, "9876543210987654", "Jane Smith", "06/26", "456", "ID789012", IdentityType::NationalId),
    ];
    for (number, card, holder, expiry, cvv, id, kind) in payers {
        let payer = chain.create_reserver_payer(
            CreditCard::new(card, holder, expiry, cvv)?,
            Identity::new(id, kind)?,
            number,
        )?;
        writeln!(out, "  created payer #{} paying with {}", payer.number(), payer.card())?;
    }
    writeln!(out)?;

    heading(out, "USE CASE 5: Making Reservations")?;
    let (start1, end1) = (date(2024, 7, 1)?, date(2024, 7, 5)?);
    let first = chain.make_reservation(1, "John Doe", GRAND, RoomKind::Single, start1, end1, 1)?;
    let first_number = first.number();
    let first_room = first.rooms().first().map(|r| r.number).context("reservation has no room")?;
    writeln!(
        out,
        "  reservation #{} for John Doe: SINGLE, {} to {} ({} days, {} room)",
        first_number,
        first.start_date(),
        first.end_date(),
        first.duration_in_days(),
        first.rooms().len()
    )?;
    let (start2, end2) = (date(2024, 7, 10)?, date(2024, 7, 15)?);
    let second = chain.make_reservation(2, "Jane Smith", GRAND, RoomKind::Double, start2, end2, 1)?;
    let second_number = second.number();
    writeln!(
        out,
        "  reservation #{} for Jane Smith: DOUBLE, {} to {} ({} room)\n",
        second_number,
        second.start_date(),
        second.end_date(),
        second.rooms().len()
    )?;

    heading(out, "USE CASE 6: Checking Availability")?;
    let grand = chain.hotel(GRAND).context("grand hotel missing")?;
    let (later_start, later_end) = (date(2024, 8, 1)?, date(2024, 8, 5)?);
    for (start, end) in [(start1, end1), (later_start, later_end)] {
        let free = grand.available(RoomKind::Single, start, end, 3);
        writeln!(
            out,
            "  3 x SINGLE {start} to {end}: {}",
            if free { "AVAILABLE" } else { "UNAVAILABLE" }
        )?;
    }
    writeln!(out)?;

    heading(out, "USE CASE 7: Guest Check-in")?;
    chain.checkin_guest("John Doe", first_room.get(), GRAND)?;
    let checked_in = chain.guest("John Doe").is_some_and(|g| g.is_checked_in());
    writeln!(out, "  John Doe -> room #{first_room}, checked in: {checked_in}\n")?;

    heading(out, "USE CASE 8: Guest Check-out")?;
    chain.check_out_guest("John Doe")?;
    let occupied = chain.room_occupant(GRAND, first_room.get()).is_some();
    writeln!(out, "  John Doe checked out, room #{first_room} occupied: {occupied}\n")?;

    heading(out, "USE CASE 9: Cancelling a Reservation")?;
    writeln!(out, "  active before: {}", chain.all_reservations().len())?;
    chain.cancel_reservation(second_number)?;
    writeln!(out, "  cancelled #{second_number}")?;
    writeln!(out, "  active after: {}\n", chain.all_reservations().len())?;

    let summary = Summary {
        chain_id: *chain.id(),
        hotels: chain.hotels().count(),
        guests: chain.guests().count(),
        active_reservations: chain.all_reservations().len(),
        grand_hotel_rooms: chain.hotel(GRAND).map(|h| h.rooms().len()).unwrap_or(0),
    };
    writeln!(out, "{rule}\nSUMMARY\n{rule}")?;
    writeln!(out, "  registry: {}", summary.chain_id)?;
    writeln!(out, "  hotels: {}", summary.hotels)?;
    writeln!(out, "  guests: {}", summary.guests)?;
    writeln!(out, "  active reservations: {}", summary.active_reservations)?;
    writeln!(out, "  rooms in {GRAND}: {}", summary.grand_hotel_rooms)?;

    if config.print_json {
        let json = serde_json::to_string_pretty(&chain.all_reservations())?;
        writeln!(out, "\n{json}")?;
    }
    tracing::info!(
        active_reservations = summary.active_reservations,
        "walkthrough complete"
    );
    Ok(summary)
}
