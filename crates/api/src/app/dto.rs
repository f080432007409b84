use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use hotelier_core::{BookingId, CustomerId, DomainResult, Money, RoomId};
use hotelier_customers::CustomerDraft;
use hotelier_payments::PaymentDraft;
use hotelier_rooms::{RoomDraft, RoomStatus};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /rooms` and `PUT /rooms/{id}`.
#[derive(Debug, Deserialize)]
pub struct RoomRequest {
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: Money,
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
}

impl RoomRequest {
    pub fn into_draft(self) -> DomainResult<RoomDraft> {
        RoomDraft::new(
            &self.room_number,
            &self.room_type,
            self.price,
            self.status,
            self.description.as_deref(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct CustomerRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

impl CustomerRequest {
    pub fn into_draft(self) -> DomainResult<CustomerDraft> {
        CustomerDraft::new(
            &self.name,
            self.email.as_deref(),
            self.phone.as_deref(),
            self.city.as_deref(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: Money,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub booking_id: BookingId,
    pub amount: Money,
    pub method: String,
    /// Defaults to today (UTC).
    pub payment_date: Option<NaiveDate>,
}

impl RecordPaymentRequest {
    pub fn into_draft(self) -> DomainResult<PaymentDraft> {
        let payment_date = self.payment_date.unwrap_or_else(|| Utc::now().date_naive());
        PaymentDraft::new(self.booking_id, self.amount, &self.method, payment_date)
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
