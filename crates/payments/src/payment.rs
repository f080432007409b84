use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use hotelier_core::{BookingId, DomainResult, Entity, Money, PaymentId, required_text};

/// A recorded payment against a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub booking_id: BookingId,
    pub amount: Money,
    pub method: String,
    pub payment_date: NaiveDate,
}

impl Entity for Payment {
    type Id = PaymentId;

    fn id(&self) -> PaymentId {
        self.payment_id
    }
}

impl Payment {
    pub fn from_draft(payment_id: PaymentId, draft: PaymentDraft) -> Self {
        Self {
            payment_id,
            booking_id: draft.booking_id,
            amount: draft.amount,
            method: draft.method,
            payment_date: draft.payment_date,
        }
    }
}

/// Validated input for recording a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDraft {
    booking_id: BookingId,
    amount: Money,
    method: String,
    payment_date: NaiveDate,
}

impl PaymentDraft {
    pub fn new(booking_id: BookingId, amount: Money, method: &str, payment_date: NaiveDate) -> DomainResult<Self> {
        Ok(Self {
            booking_id,
            amount,
            method: required_text("method", method)?,
            payment_date,
        })
    }

    pub fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }
}
