//! Booking lifecycle orchestration.
//!
//! ```text
//! request
//!   ↓
//! 1. Validate dates / parse status (pure, `hotelier-bookings`)
//!   ↓
//! 2. Repository call that checks and writes in one transaction
//!   ↓
//! 3. Log the outcome
//! ```
//!
//! The manager holds no state of its own; atomicity lives in the repository.

use std::sync::Arc;

use chrono::NaiveDate;

use hotelier_bookings::{BookingDraft, BookingStatus, BookingView, DateRange};
use hotelier_core::{BookingId, CustomerId, DomainError, Money, RoomId};

use crate::error::{StoreError, StoreResult};
use crate::repository::{BookingRepository, StatusTransition};

/// Availability checks, booking creation and status transitions.
pub struct BookingManager<S: BookingRepository + ?Sized> {
    store: Arc<S>,
}

impl<S: BookingRepository + ?Sized> Clone for BookingManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: BookingRepository + ?Sized> BookingManager<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Whether `room_id` is free for `[check_in, check_out)`.
    ///
    /// `exclude` skips one booking (re-checking a booking against itself).
    #[tracing::instrument(skip(self), fields(room_id = %room_id), err)]
    pub async fn is_available(
        &self,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude: Option<BookingId>,
    ) -> StoreResult<bool> {
        let stay = DateRange::new(check_in, check_out)?;
        self.store.is_available(room_id, stay, exclude).await
    }

    #[tracing::instrument(skip(self), fields(room_id = %room_id, customer_id = %customer_id), err)]
    pub async fn create_booking(
        &self,
        customer_id: CustomerId,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_amount: Money,
    ) -> StoreResult<BookingView> {
        let stay = DateRange::new(check_in, check_out)?;
        let draft = BookingDraft::new(customer_id, room_id, stay, total_amount);

        match self.store.create_booking(draft).await {
            Ok(view) => {
                tracing::info!(
                    booking_id = %view.booking.booking_id,
                    room_id = %room_id,
                    customer_id = %customer_id,
                    stay = %stay,
                    "booking created"
                );
                Ok(view)
            }
            Err(StoreError::Domain(DomainError::Conflict(msg))) => {
                tracing::warn!(room_id = %room_id, stay = %stay, "booking rejected: {msg}");
                Err(StoreError::Domain(DomainError::Conflict(msg)))
            }
            Err(e) => Err(e),
        }
    }

    /// Parse `status` and apply the transition, syncing the room status.
    #[tracing::instrument(skip(self), fields(booking_id = %booking_id), err)]
    pub async fn set_status(&self, booking_id: BookingId, status: &str) -> StoreResult<StatusTransition> {
        let next: BookingStatus = status.parse()?;
        let transition = self.store.transition_booking(booking_id, next).await?;

        tracing::info!(
            booking_id = %booking_id,
            from = %transition.change.from,
            to = %transition.change.to,
            room_status = ?transition.room_status,
            "booking status changed"
        );
        Ok(transition)
    }

    pub async fn list_bookings(&self) -> StoreResult<Vec<BookingView>> {
        self.store.list_bookings().await
    }

    pub async fn get_booking(&self, booking_id: BookingId) -> StoreResult<BookingView> {
        self.store.get_booking(booking_id).await
    }
}
