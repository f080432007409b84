use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use hotelier_bookings::{
    Booking, BookingDraft, BookingStatus, BookingView, DateRange, ensure_available, is_available,
};
use hotelier_core::{BookingId, CustomerId, Entity, PaymentId, RoomId};
use hotelier_customers::{Customer, CustomerDraft};
use hotelier_payments::{Payment, PaymentDraft};
use hotelier_rooms::{Room, RoomDraft};

use super::{
    BookingRepository, CustomerRepository, PaymentRepository, RoomRepository, StatusTransition,
};
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
struct State {
    rooms: BTreeMap<RoomId, Room>,
    customers: BTreeMap<CustomerId, Customer>,
    bookings: BTreeMap<BookingId, Booking>,
    payments: BTreeMap<PaymentId, Payment>,
    last_id: i64,
}

impl State {
    /// Ids are unique across tables, which is fine for a dev store.
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn room(&self, room_id: RoomId) -> StoreResult<&Room> {
        self.rooms.get(&room_id).ok_or(StoreError::not_found("room"))
    }

    fn ensure_room_number_free(&self, room_number: &str, except: Option<RoomId>) -> StoreResult<()> {
        let taken = self
            .rooms
            .values()
            .any(|r| r.room_number == room_number && Some(r.room_id) != except);
        if taken {
            return Err(StoreError::conflict(format!("room number {room_number} already exists")));
        }
        Ok(())
    }

    fn bookings_for_room(&self, room_id: RoomId) -> impl Iterator<Item = &Booking> {
        self.bookings.values().filter(move |b| b.room_id == room_id)
    }

    fn view(&self, booking: &Booking) -> StoreResult<BookingView> {
        let customer = self
            .customers
            .get(&booking.customer_id)
            .ok_or(StoreError::not_found("customer"))?;
        let room = self.room(booking.room_id)?;
        Ok(BookingView {
            booking: booking.clone(),
            customer_name: customer.name.clone(),
            room_number: room.room_number.clone(),
            room_type: room.room_type.clone(),
        })
    }
}

/// In-memory hotel store.
///
/// Intended for tests/dev. Every operation runs under one lock, which makes
/// each repository call atomic and serializes conflicting booking writes.
#[derive(Debug, Default)]
pub struct InMemoryHotelStore {
    state: RwLock<State>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StoreError::Database("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StoreError::Database("lock poisoned".to_string()))
    }
}

#[async_trait]
impl RoomRepository for InMemoryHotelStore {
    async fn list_rooms(&self) -> StoreResult<Vec<Room>> {
        let state = self.read()?;
        let mut rooms: Vec<Room> = state.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(rooms)
    }

    async fn get_room(&self, room_id: RoomId) -> StoreResult<Room> {
        self.read()?.room(room_id).cloned()
    }

    async fn create_room(&self, draft: RoomDraft) -> StoreResult<Room> {
        let mut state = self.write()?;
        state.ensure_room_number_free(draft.room_number(), None)?;

        let room = Room::from_draft(RoomId::new(state.next_id()), draft);
        state.rooms.insert(room.id(), room.clone());
        Ok(room)
    }

    async fn update_room(&self, room_id: RoomId, draft: RoomDraft) -> StoreResult<Room> {
        let mut state = self.write()?;
        state.room(room_id)?;
        state.ensure_room_number_free(draft.room_number(), Some(room_id))?;

        let room = state.rooms.get_mut(&room_id).ok_or(StoreError::not_found("room"))?;
        room.apply_draft(draft);
        Ok(room.clone())
    }

    async fn delete_room(&self, room_id: RoomId) -> StoreResult<()> {
        let mut state = self.write()?;
        state.room(room_id)?;
        if state.bookings_for_room(room_id).next().is_some() {
            return Err(StoreError::conflict("room has bookings and cannot be deleted"));
        }
        state.rooms.remove(&room_id);
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryHotelStore {
    async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        let state = self.read()?;
        // Ids grow with insertion, so reverse id order is newest first.
        Ok(state.customers.values().rev().cloned().collect())
    }

    async fn find_or_create_customer(&self, draft: CustomerDraft) -> StoreResult<(Customer, bool)> {
        let mut state = self.write()?;
        if let Some(existing) = state.customers.values().find(|c| c.matches(&draft)) {
            return Ok((existing.clone(), false));
        }

        let customer = Customer::from_draft(CustomerId::new(state.next_id()), draft, Utc::now());
        state.customers.insert(customer.id(), customer.clone());
        Ok((customer, true))
    }
}

#[async_trait]
impl BookingRepository for InMemoryHotelStore {
    async fn list_bookings(&self) -> StoreResult<Vec<BookingView>> {
        let state = self.read()?;
        state.bookings.values().rev().map(|b| state.view(b)).collect()
    }

    async fn get_booking(&self, booking_id: BookingId) -> StoreResult<BookingView> {
        let state = self.read()?;
        let booking = state
            .bookings
            .get(&booking_id)
            .ok_or(StoreError::not_found("booking"))?;
        state.view(booking)
    }

    async fn is_available(
        &self,
        room_id: RoomId,
        stay: DateRange,
        exclude: Option<BookingId>,
    ) -> StoreResult<bool> {
        let state = self.read()?;
        Ok(is_available(&stay, state.bookings_for_room(room_id), exclude))
    }

    async fn create_booking(&self, draft: BookingDraft) -> StoreResult<BookingView> {
        let mut state = self.write()?;
        state.room(draft.room_id())?;
        if !state.customers.contains_key(&draft.customer_id()) {
            return Err(StoreError::not_found("customer"));
        }
        ensure_available(&draft.stay(), state.bookings_for_room(draft.room_id()), None)?;

        let booking = Booking::from_draft(BookingId::new(state.next_id()), draft, Utc::now());
        state.bookings.insert(booking.id(), booking.clone());
        state.view(&booking)
    }

    async fn transition_booking(
        &self,
        booking_id: BookingId,
        next: BookingStatus,
    ) -> StoreResult<StatusTransition> {
        let mut state = self.write()?;
        let mut booking = state
            .bookings
            .get(&booking_id)
            .cloned()
            .ok_or(StoreError::not_found("booking"))?;

        let change = booking.transition(next)?;
        let other_guest_checked_in = state
            .bookings_for_room(change.room_id)
            .any(|b| b.booking_id != booking_id && b.status.occupies_room());
        let room_status = change.room_status(other_guest_checked_in);

        // Both writes happen under the same guard.
        if let Some(status) = room_status {
            let room = state
                .rooms
                .get_mut(&change.room_id)
                .ok_or(StoreError::not_found("room"))?;
            room.status = status;
        }
        state.bookings.insert(booking_id, booking.clone());

        Ok(StatusTransition {
            booking: state.view(&booking)?,
            change,
            room_status,
        })
    }
}

#[async_trait]
impl PaymentRepository for InMemoryHotelStore {
    async fn record_payment(&self, draft: PaymentDraft) -> StoreResult<Payment> {
        let mut state = self.write()?;
        if !state.bookings.contains_key(&draft.booking_id()) {
            return Err(StoreError::not_found("booking"));
        }

        let payment = Payment::from_draft(PaymentId::new(state.next_id()), draft);
        state.payments.insert(payment.id(), payment.clone());
        Ok(payment)
    }

    async fn list_payments(&self, booking_id: BookingId) -> StoreResult<Vec<Payment>> {
        let state = self.read()?;
        Ok(state
            .payments
            .values()
            .filter(|p| p.booking_id == booking_id)
            .cloned()
            .collect())
    }
}
