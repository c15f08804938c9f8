use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate};
use hotelchain_core::{Address, CreditCard, Identity, IdentityType, Money, Name};
use hotelchain_reservations::{FixedClock, Guest, Hotel, HotelChain, RoomKind, RoomNumber};

const HOTEL: &str = "Bench Hotel";

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// A chain with `rooms` SINGLE rooms, each already holding one week-long
/// booking per payer, staggered across the year.
fn seeded_chain(rooms: u32, payers: u32) -> HotelChain {
    let mut chain = HotelChain::with_clock(FixedClock(base()));
    let mut hotel = Hotel::new(Name::new(HOTEL).unwrap());
    hotel
        .add_room_type(RoomKind::Single, Money::parse("100", "USD").unwrap())
        .unwrap();
    for n in 1..=rooms {
        hotel.add_room(RoomNumber::new(n).unwrap(), RoomKind::Single).unwrap();
    }
    chain.add_hotel(hotel).unwrap();
    chain
        .add_guest(Guest::create(
            Name::new("Bench Guest").unwrap(),
            Address::new("1 Bench Rd", "Springfield", "IL", "62701", "USA").unwrap(),
        ))
        .unwrap();

    for p in 1..=payers {
        chain
            .create_reserver_payer(
                CreditCard::new("1234567890123456", "Bench Payer", "12/30", "123").unwrap(),
                Identity::new(format!("BENCH{p:05}"), IdentityType::Passport).unwrap(),
                p,
            )
            .unwrap();
        let start = base() + Duration::days(i64::from(p % 300));
        chain
            .make_reservation(
                p,
                "Bench Guest",
                HOTEL,
                RoomKind::Single,
                start,
                start + Duration::days(7),
                1,
            )
            .unwrap_or_else(|e| panic!("seeding booking {p} of {payers} in {rooms} rooms: {e}"));
    }
    assert_eq!(chain.all_reservations().len(), payers as usize);
    chain
}

fn bench_available(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_available");
    for &(rooms, payers) in &[(10u32, 50u32), (100, 500), (500, 2000)] {
        let chain = seeded_chain(rooms, payers);
        let hotel = chain.hotel(HOTEL).unwrap();
        let start = base() + Duration::days(120);
        let end = start + Duration::days(5);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rooms}_rooms_{payers}_bookings")),
            &(start, end),
            |b, &(s, e)| {
                b.iter(|| black_box(hotel.available(RoomKind::Single, s, e, black_box(3))));
            },
        );
    }
    group.finish();
}

fn bench_make_and_cancel(c: &mut Criterion) {
    let mut chain = seeded_chain(100, 99);
    chain
        .create_reserver_payer(
            CreditCard::new("1234567890123456", "Bench Payer", "12/30", "123").unwrap(),
            Identity::new("BENCH-LAST", IdentityType::Passport).unwrap(),
            1000,
        )
        .unwrap();
    let start = base() + Duration::days(400);

    c.bench_function("make_then_cancel_reservation", |b| {
        b.iter(|| {
            let number = chain
                .make_reservation(1000, "Bench Guest", HOTEL, RoomKind::Single, start, start + Duration::days(3), 2)
                .unwrap()
                .number();
            chain.cancel_reservation(black_box(number)).unwrap();
        });
    });
}

criterion_group!(benches, bench_available, bench_make_and_cancel);
criterion_main!(benches);
