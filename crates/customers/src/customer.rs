use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hotelier_core::{CustomerId, DomainResult, Entity, optional_text, required_text};

/// A persisted customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.customer_id
    }
}

impl Customer {
    pub fn from_draft(customer_id: CustomerId, draft: CustomerDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            customer_id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            city: draft.city,
            created_at,
        }
    }

    /// Whether this record answers a find-or-create lookup for `draft`.
    pub fn matches(&self, draft: &CustomerDraft) -> bool {
        match (draft.dedup_key(), self.email.as_deref()) {
            (Some(wanted), Some(stored)) => wanted == stored,
            _ => false,
        }
    }
}

/// Validated input for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    city: Option<String>,
}

impl CustomerDraft {
    pub fn new(
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        city: Option<&str>,
    ) -> DomainResult<Self> {
        Ok(Self {
            name: required_text("name", name)?,
            email: optional_text(email),
            phone: optional_text(phone),
            city: optional_text(city),
        })
    }

    /// Natural key for deduplication. Drafts without an email always create.
    pub fn dedup_key(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}
