use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use hotelier_core::{BookingId, CustomerId, DomainError, DomainResult, Entity, Money, RoomId};
use hotelier_rooms::RoomStatus;

use crate::stay::DateRange;
use crate::status::BookingStatus;

/// A reservation of one room for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    #[serde(flatten)]
    pub stay: DateRange,
    pub total_amount: Money,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> BookingId {
        self.booking_id
    }
}

impl Booking {
    /// New bookings always start in `booked`.
    pub fn from_draft(booking_id: BookingId, draft: BookingDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            booking_id,
            customer_id: draft.customer_id,
            room_id: draft.room_id,
            stay: draft.stay,
            total_amount: draft.total_amount,
            status: BookingStatus::Booked,
            created_at,
        }
    }

    pub fn check_in(&self) -> NaiveDate {
        self.stay.check_in()
    }

    pub fn check_out(&self) -> NaiveDate {
        self.stay.check_out()
    }

    /// Move to `next` if the lifecycle allows it.
    ///
    /// On success the booking is updated in place and the returned change
    /// describes the room-status side effect the caller must persist in the
    /// same transaction.
    pub fn transition(&mut self, next: BookingStatus) -> DomainResult<StatusChange> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_status(format!(
                "cannot move booking {} from {} to {}",
                self.booking_id, self.status, next
            )));
        }

        let change = StatusChange {
            booking_id: self.booking_id,
            room_id: self.room_id,
            from: self.status,
            to: next,
        };
        self.status = next;
        Ok(change)
    }
}

/// A committed status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub from: BookingStatus,
    pub to: BookingStatus,
}

impl StatusChange {
    /// The room status to write, if any.
    pub fn room_status(&self, other_guest_checked_in: bool) -> Option<RoomStatus> {
        self.to
            .room_effect()
            .map(|effect| effect.resulting_room_status(other_guest_checked_in))
    }
}

/// Validated input for creating a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    customer_id: CustomerId,
    room_id: RoomId,
    stay: DateRange,
    total_amount: Money,
}

impl BookingDraft {
    pub fn new(customer_id: CustomerId, room_id: RoomId, stay: DateRange, total_amount: Money) -> Self {
        Self {
            customer_id,
            room_id,
            stay,
            total_amount,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn stay(&self) -> DateRange {
        self.stay
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }
}

/// A booking joined with the customer and room fields the admin list shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub customer_name: String,
    pub room_number: String,
    pub room_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn booking() -> Booking {
        let draft = BookingDraft::new(
            CustomerId::new(1),
            RoomId::new(2),
            DateRange::new(day(10), day(12)).unwrap(),
            Money::from_cents(300_00).unwrap(),
        );
        Booking::from_draft(BookingId::new(3), draft, Utc::now())
    }

    #[test]
    fn new_bookings_start_booked() {
        assert_eq!(booking().status, BookingStatus::Booked);
    }

    #[test]
    fn check_in_then_out_drives_room_status() {
        let mut b = booking();

        let change = b.transition(BookingStatus::CheckedIn).unwrap();
        assert_eq!(change.from, BookingStatus::Booked);
        assert_eq!(change.room_status(false), Some(RoomStatus::Occupied));
        assert_eq!(b.status, BookingStatus::CheckedIn);

        let change = b.transition(BookingStatus::CheckedOut).unwrap();
        assert_eq!(change.room_status(false), Some(RoomStatus::Available));
        assert_eq!(change.room_id, RoomId::new(2));
    }

    #[test]
    fn rejected_transition_leaves_booking_untouched() {
        let mut b = booking();
        b.transition(BookingStatus::Cancelled).unwrap();

        let err = b.transition(BookingStatus::Booked).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatus(_)));
        assert_eq!(b.status, BookingStatus::Cancelled);
    }

    #[test]
    fn same_status_is_not_a_transition() {
        let mut b = booking();
        assert!(matches!(
            b.transition(BookingStatus::Booked),
            Err(DomainError::InvalidStatus(_))
        ));
    }

    #[test]
    fn view_flattens_booking_fields() {
        let view = BookingView {
            booking: booking(),
            customer_name: "Ada".to_string(),
            room_number: "101".to_string(),
            room_type: "Double".to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["booking_id"], 3);
        assert_eq!(json["check_in"], "2024-01-10");
        assert_eq!(json["check_out"], "2024-01-12");
        assert_eq!(json["status"], "booked");
        assert_eq!(json["customer_name"], "Ada");
        assert_eq!(json["room_type"], "Double");
    }
}
