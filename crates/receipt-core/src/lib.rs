//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It turns a receipt into a
//! points total using pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-api (axum HTTP server)                  │   │
//! │  │     POST /receipts/process      GET /receipts/{id}/points       │   │
//! │  └───────────────┬─────────────────────────────────┬───────────────┘   │
//! │                  │                                 │                    │
//! │  ┌───────────────▼─────────────────┐  ┌────────────▼───────────────┐   │
//! │  │   ★ receipt-core (THIS CRATE) ★ │  │   receipt-store            │   │
//! │  │                                 │  │   ScoreStore trait         │   │
//! │  │  types  money  validation rules │  │   MemoryScoreStore         │   │
//! │  │                                 │  └────────────────────────────┘   │
//! │  │  NO I/O • NO STORAGE • PURE     │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt, Item, ScoreRecord
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Field parsers used by the rules
//! - [`rules`] - The scoring rules and engine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{score_receipt, Item, Receipt, Rule};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"), Item::new("Gatorade", "2.25")],
//!     total: "4.50".to_string(),
//! };
//!
//! let breakdown = score_receipt(&receipt).unwrap();
//! assert_eq!(breakdown.points_for(Rule::AfternoonPurchase), 10);
//! assert_eq!(breakdown.total(), 14 + 25 + 5 + 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{RuleError, RuleResult, ValidationError};
pub use money::Money;
pub use rules::{calculate_points, score_receipt, Rule, RuleContribution, ScoreBreakdown};
pub use types::*;
