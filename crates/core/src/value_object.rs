//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// `Money` and a booking's `DateRange` are the value objects of this system:
/// two date ranges with the same endpoints are the same stay, regardless of
/// which booking carries them.
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so value objects can be
/// copied freely, compared in invariants and printed in test failures.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
