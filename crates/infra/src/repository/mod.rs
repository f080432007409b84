//! Repository boundary.
//!
//! One trait per aggregate, implemented by an in-memory store (tests/dev) and a
//! Postgres store (production). The booking operations that must be atomic
//! (check-then-insert, status change + room sync) are single repository calls
//! so each backend can wrap them in one transaction; the decisions themselves
//! come from the pure `hotelier-bookings` rules.

use async_trait::async_trait;

use hotelier_bookings::{BookingDraft, BookingStatus, BookingView, DateRange, StatusChange};
use hotelier_core::{BookingId, RoomId};
use hotelier_customers::{Customer, CustomerDraft};
use hotelier_payments::{Payment, PaymentDraft};
use hotelier_rooms::{Room, RoomDraft, RoomStatus};

use crate::error::StoreResult;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryHotelStore;
pub use postgres::PostgresHotelStore;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// All rooms ordered by room number.
    async fn list_rooms(&self) -> StoreResult<Vec<Room>>;

    async fn get_room(&self, room_id: RoomId) -> StoreResult<Room>;

    /// Fails with `Conflict` when the room number is taken.
    async fn create_room(&self, draft: RoomDraft) -> StoreResult<Room>;

    /// Replace every editable field.
    async fn update_room(&self, room_id: RoomId, draft: RoomDraft) -> StoreResult<Room>;

    /// Hard delete. Rooms still referenced by bookings cannot be deleted.
    async fn delete_room(&self, room_id: RoomId) -> StoreResult<()>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers, newest first.
    async fn list_customers(&self) -> StoreResult<Vec<Customer>>;

    /// Return the customer already holding the draft's email unchanged, or
    /// create one. The flag is `true` when a row was created.
    async fn find_or_create_customer(&self, draft: CustomerDraft) -> StoreResult<(Customer, bool)>;
}

/// Outcome of a committed booking status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    pub booking: BookingView,
    pub change: StatusChange,
    /// Room status written alongside, if the transition touched the room.
    pub room_status: Option<RoomStatus>,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings joined with customer and room, newest first.
    async fn list_bookings(&self) -> StoreResult<Vec<BookingView>>;

    async fn get_booking(&self, booking_id: BookingId) -> StoreResult<BookingView>;

    /// Read-only overlap check against the room's date-holding bookings.
    /// The room is not re-validated here.
    async fn is_available(
        &self,
        room_id: RoomId,
        stay: DateRange,
        exclude: Option<BookingId>,
    ) -> StoreResult<bool>;

    /// Atomically check availability and insert a `booked` booking.
    ///
    /// Implementations must serialize concurrent creations for the same room
    /// so two overlapping requests can never both succeed.
    async fn create_booking(&self, draft: BookingDraft) -> StoreResult<BookingView>;

    /// Atomically apply a lifecycle transition and sync the room status.
    async fn transition_booking(
        &self,
        booking_id: BookingId,
        next: BookingStatus,
    ) -> StoreResult<StatusTransition>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Fails with `NotFound` when the booking does not exist.
    async fn record_payment(&self, draft: PaymentDraft) -> StoreResult<Payment>;

    async fn list_payments(&self, booking_id: BookingId) -> StoreResult<Vec<Payment>>;
}

/// Everything the HTTP layer needs from a backend.
pub trait HotelStore: RoomRepository + CustomerRepository + BookingRepository + PaymentRepository {}

impl<T> HotelStore for T where T: RoomRepository + CustomerRepository + BookingRepository + PaymentRepository {}
