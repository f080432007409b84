use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hotelier_core::{DomainError, DomainResult, Entity, Money, RoomId, optional_text, required_text};

/// Display status of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [RoomStatus::Available, RoomStatus::Occupied, RoomStatus::Maintenance];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
        }
    }
}

impl core::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "room status must be one of: available, occupied, maintenance (got '{s}')"
                ))
            })
    }
}

/// A persisted room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: Money,
    pub status: RoomStatus,
    pub description: Option<String>,
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> RoomId {
        self.room_id
    }
}

impl Room {
    /// Materialize a validated draft under a datastore-assigned id.
    pub fn from_draft(room_id: RoomId, draft: RoomDraft) -> Self {
        Self {
            room_id,
            room_number: draft.room_number,
            room_type: draft.room_type,
            price: draft.price,
            status: draft.status.unwrap_or_default(),
            description: draft.description,
        }
    }

    /// Overwrite the editable fields (PUT semantics). An omitted status keeps
    /// the stored one, so an edit never frees an occupied room.
    pub fn apply_draft(&mut self, draft: RoomDraft) {
        self.room_number = draft.room_number;
        self.room_type = draft.room_type;
        self.price = draft.price;
        if let Some(status) = draft.status {
            self.status = status;
        }
        self.description = draft.description;
    }
}

/// Validated input for creating or replacing a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    room_number: String,
    room_type: String,
    price: Money,
    status: Option<RoomStatus>,
    description: Option<String>,
}

impl RoomDraft {
    /// Validate raw input. A missing status means `available` on create and
    /// "unchanged" on update.
    pub fn new(
        room_number: &str,
        room_type: &str,
        price: Money,
        status: Option<RoomStatus>,
        description: Option<&str>,
    ) -> DomainResult<Self> {
        Ok(Self {
            room_number: required_text("room_number", room_number)?,
            room_type: required_text("type", room_type)?,
            price,
            status,
            description: optional_text(description),
        })
    }

    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn status(&self) -> Option<RoomStatus> {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
