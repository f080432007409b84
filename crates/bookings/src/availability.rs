//! Availability checking for a room over a stay.
//!
//! A linear scan over the room's bookings; rooms carry few enough bookings
//! that no interval index is needed.

use hotelier_core::{BookingId, DomainError, DomainResult};

use crate::booking::Booking;
use crate::stay::DateRange;

pub const NOT_AVAILABLE: &str = "room not available for requested dates";

/// First booking that still holds dates overlapping `requested`.
///
/// Cancelled bookings and `exclude` (a booking being re-checked against
/// itself) are ignored. Callers pass the bookings of a single room.
pub fn conflicting_booking<'a, I>(
    requested: &DateRange,
    existing: I,
    exclude: Option<BookingId>,
) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    existing.into_iter().find(|b| {
        b.status.holds_dates() && Some(b.booking_id) != exclude && b.stay.overlaps(requested)
    })
}

pub fn is_available<'a, I>(requested: &DateRange, existing: I, exclude: Option<BookingId>) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    conflicting_booking(requested, existing, exclude).is_none()
}

/// Like [`is_available`], but as a `Conflict` error for the booking path.
pub fn ensure_available<'a, I>(requested: &DateRange, existing: I, exclude: Option<BookingId>) -> DomainResult<()>
where
    I: IntoIterator<Item = &'a Booking>,
{
    match conflicting_booking(requested, existing, exclude) {
        None => Ok(()),
        Some(_) => Err(DomainError::conflict(NOT_AVAILABLE)),
    }
}
