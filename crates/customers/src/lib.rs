//! Customers domain module.
//!
//! Customers are deduplicated by email: creating a customer whose email is
//! already on file yields the stored record unchanged (find-or-create).

pub mod customer;

pub use customer::{Customer, CustomerDraft};
