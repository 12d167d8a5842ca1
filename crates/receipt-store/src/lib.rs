//! # receipt-store: Score Storage for Receipt Points
//!
//! Maps an opaque receipt id to the points it scored.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  receipt-api handler                                                   │
//! │       │  store.put(ScoreRecord::new(points))                           │
//! │       │  store.get(id)                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ScoreStore (trait)  ◄────  MemoryScoreStore                   │   │
//! │  │                              Mutex<HashMap<id, ScoreRecord>>    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records last for the life of the process. There is no update, delete,
//! eviction or iteration.
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::ScoreRecord;
//! use receipt_store::{MemoryScoreStore, ScoreStore};
//!
//! let store = MemoryScoreStore::new();
//! let record = ScoreRecord::new(28);
//! let id = record.id.clone();
//!
//! store.put(record).unwrap();
//! assert_eq!(store.get(&id).unwrap().points, 28);
//! assert!(store.get("unknown").unwrap_err().is_not_found());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::MemoryScoreStore;

use receipt_core::ScoreRecord;

/// Insert-once, read-many storage of score records.
///
/// Implementations must be safe to share across request tasks.
pub trait ScoreStore: Send + Sync {
    /// Stores a new record.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id is already present;
    /// existing records are never overwritten.
    fn put(&self, record: ScoreRecord) -> StoreResult<()>;

    /// Looks up a record by id.
    ///
    /// Unknown ids yield [`StoreError::NotFound`], never a default score.
    fn get(&self, id: &str) -> StoreResult<ScoreRecord>;

    /// Number of stored records.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
