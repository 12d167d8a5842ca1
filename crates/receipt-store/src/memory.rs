//! # In-Memory Score Store
//!
//! ## Thread Safety
//! Records live in a `HashMap` behind a single `Mutex`:
//! 1. Every request task may insert or look up concurrently
//! 2. Ids are freshly minted, so writers never contend for the same key
//! 3. No scans or iteration, so the lock is held for one map operation
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  put(record) ──► lock ──► entry(id) vacant? ──► insert                 │
//! │                                   │                                     │
//! │                                   └── occupied ──► DuplicateId          │
//! │                                                                         │
//! │  get(id)     ──► lock ──► map.get(id) ──► clone  |  NotFound            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use receipt_core::ScoreRecord;

use crate::error::{StoreError, StoreResult};
use crate::ScoreStore;

/// Process-lifetime score store.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: Mutex<HashMap<String, ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, ScoreRecord>>> {
        self.records.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ScoreStore for MemoryScoreStore {
    fn put(&self, record: ScoreRecord) -> StoreResult<()> {
        let mut records = self.lock()?;

        match records.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::duplicate(record.id)),
            Entry::Vacant(slot) => {
                tracing::trace!(id = %record.id, points = record.points, "Stored score record");
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> StoreResult<ScoreRecord> {
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
