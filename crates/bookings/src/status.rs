//! Booking lifecycle state machine.
//!
//! ```text
//! booked ──► checked_in ──► checked_out
//!    │  │                        ▲
//!    │  └────────────────────────┘
//!    └─────► cancelled
//! ```
//!
//! `booked → checked_out` settles a stay the desk never checked in.
//! `checked_out` and `cancelled` are terminal. Re-applying the current status
//! is not a transition and is rejected like any other pair outside the table.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hotelier_core::DomainError;
use hotelier_rooms::RoomStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Booked,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// What a status change does to the room's display status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEffect {
    /// A guest moved in.
    Occupy,
    /// A stay ended or was called off.
    Release,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Booked,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Booked => "booked",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses reachable from `self` in one step.
    pub fn successors(self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Booked => &[
                BookingStatus::CheckedIn,
                BookingStatus::CheckedOut,
                BookingStatus::Cancelled,
            ],
            BookingStatus::CheckedIn => &[BookingStatus::CheckedOut],
            BookingStatus::CheckedOut | BookingStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        self.successors().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }

    /// Whether a booking in this status still claims its dates.
    pub fn holds_dates(self) -> bool {
        self != BookingStatus::Cancelled
    }

    /// Whether a booking in this status has a guest physically in the room.
    pub fn occupies_room(self) -> bool {
        self == BookingStatus::CheckedIn
    }

    /// Room side effect of entering this status.
    pub fn room_effect(self) -> Option<RoomEffect> {
        match self {
            BookingStatus::CheckedIn => Some(RoomEffect::Occupy),
            BookingStatus::CheckedOut | BookingStatus::Cancelled => Some(RoomEffect::Release),
            BookingStatus::Booked => None,
        }
    }
}

impl RoomEffect {
    /// Room status after the effect. A release leaves the room occupied while
    /// another booking for it is still checked in.
    pub fn resulting_room_status(self, other_guest_checked_in: bool) -> RoomStatus {
        match self {
            RoomEffect::Occupy => RoomStatus::Occupied,
            RoomEffect::Release if other_guest_checked_in => RoomStatus::Occupied,
            RoomEffect::Release => RoomStatus::Available,
        }
    }
}

impl core::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                DomainError::invalid_status(format!(
                    "'{s}' is not one of: booked, checked_in, checked_out, cancelled"
                ))
            })
    }
}
