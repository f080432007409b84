use thiserror::Error;

use hotelier_core::DomainError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository operation error.
///
/// Business failures (not found, conflicts, lifecycle violations) surface as
/// `Domain`; anything the datastore itself failed at is `Database` and is
/// fatal to the request.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("datastore error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::Domain(DomainError::not_found(entity))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::conflict(msg))
    }
}
