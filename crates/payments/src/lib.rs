//! Payments domain module (append-only payment records).

pub mod payment;

pub use payment::{Payment, PaymentDraft};
