//! Bookings domain module.
//!
//! Pure booking rules, no IO:
//! - `stay`: half-open `[check_in, check_out)` date ranges and the overlap predicate
//! - `availability`: whether a room is free for a stay given its existing bookings
//! - `status`: the booking lifecycle state machine and its room-status side effect
//! - `booking`: the booking record, drafts and the joined display view

pub mod availability;
pub mod booking;
pub mod stay;
pub mod status;

pub use availability::{NOT_AVAILABLE, conflicting_booking, ensure_available, is_available};
pub use booking::{Booking, BookingDraft, BookingView, StatusChange};
pub use stay::DateRange;
pub use status::{BookingStatus, RoomEffect};
