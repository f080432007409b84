use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier (e.g. `"bookings.write"`).
///
/// The wildcard `"*"` grants everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const ROOMS_WRITE: Permission = Permission(Cow::Borrowed("rooms.write"));
    pub const CUSTOMERS_READ: Permission = Permission(Cow::Borrowed("customers.read"));
    pub const BOOKINGS_READ: Permission = Permission(Cow::Borrowed("bookings.read"));
    pub const BOOKINGS_WRITE: Permission = Permission(Cow::Borrowed("bookings.write"));
    pub const PAYMENTS_READ: Permission = Permission(Cow::Borrowed("payments.read"));
    pub const PAYMENTS_WRITE: Permission = Permission(Cow::Borrowed("payments.write"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
