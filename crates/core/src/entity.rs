//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Rooms, customers, bookings and payments are all entities: two records with
/// the same id are the same thing even if every other field differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
