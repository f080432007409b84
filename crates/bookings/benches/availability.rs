//! Availability scan cost as a room's booking history grows.

use chrono::{Duration, NaiveDate, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use hotelier_bookings::{Booking, BookingDraft, BookingStatus, DateRange, is_available};
use hotelier_core::{BookingId, CustomerId, Money, RoomId};

fn history(len: usize) -> Vec<Booking> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (0..len)
        .map(|i| {
            let check_in = start + Duration::days(2 * i as i64);
            let stay = DateRange::new(check_in, check_in + Duration::days(2)).unwrap();
            let draft = BookingDraft::new(CustomerId::new(1), RoomId::new(1), stay, Money::ZERO);
            let mut booking = Booking::from_draft(BookingId::new(i as i64 + 1), draft, Utc::now());
            if i % 5 == 0 {
                booking.status = BookingStatus::Cancelled;
            }
            booking
        })
        .collect()
}

fn bench_availability(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_available");
    for len in [10usize, 100, 1_000, 10_000] {
        let bookings = history(len);
        let far_future = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        let requested = DateRange::new(far_future, far_future + Duration::days(3)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &bookings, |b, bookings| {
            b.iter(|| is_available(black_box(&requested), bookings.iter(), None))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_availability);
criterion_main!(benches);
