//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ScoreStore::get / ScoreStore::put                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in receipt-api) → 404 / 500                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Score store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists for the id.
    ///
    /// Distinct from a record that scored zero points.
    #[error("Receipt not found: {id}")]
    NotFound { id: String },

    /// A record with this id was already stored.
    ///
    /// ## When This Occurs
    /// - A caller reused an id instead of minting a new one
    #[error("Duplicate receipt id: '{id}' already exists")]
    DuplicateId { id: String },

    /// A thread panicked while holding the store lock.
    #[error("Score store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Creates a DuplicateId error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        StoreError::DuplicateId { id: id.into() }
    }

    /// True for lookups of unknown ids.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
