//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │  ScoreRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  short_desc     │   │  id (UUID)      │       │
//! │  │  purchase_date  │──►│  price (text)   │   │  points         │       │
//! │  │  purchase_time  │   └─────────────────┘   │  created_at     │       │
//! │  │  items          │                         └─────────────────┘       │
//! │  │  total (text)   │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Receipt fields arrive as text and are only parsed by the rule that needs
//! them, so one bad field names exactly one failing rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt submitted for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Store name, free-form.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Purchased items. Only the count and each item's own fields matter.
    pub items: Vec<Item>,

    /// Receipt total as a decimal string, e.g. `"35.35"`.
    pub total: String,
}

/// A single line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    pub short_description: String,

    /// Item price as a decimal string, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Score Record
// =============================================================================

/// The stored result of scoring one receipt.
///
/// ## Invariants
/// - `id` is minted once, never reused
/// - `points` never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Random UUID v4 in canonical hyphenated form.
    pub id: String,

    /// Total points awarded.
    pub points: u64,

    pub created_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Creates a record for `points` under a freshly generated id.
    pub fn new(points: u64) -> Self {
        ScoreRecord {
            id: Uuid::new_v4().to_string(),
            points,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
