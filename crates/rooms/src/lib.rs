//! Rooms domain module.
//!
//! A room is a bookable unit with a displayable availability flag. The flag is
//! a cache: date-specific availability is always computed from bookings.

pub mod room;

pub use room::{Room, RoomDraft, RoomStatus};
