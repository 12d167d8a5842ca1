//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ValidationError  - A receipt field failed to parse                │
//! │  └── RuleError        - Which scoring rule hit the ValidationError     │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Lookup / insert failures                       │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → RuleError → ApiError → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::rules::Rule;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt field validation errors.
///
/// Raised when a field a scoring rule depends on cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A total or item price is not a well-formed decimal amount.
    #[error("{field} '{value}' is not a valid amount: {reason}")]
    InvalidMonetaryValue {
        field: String,
        value: String,
        reason: String,
    },

    /// The purchase date cannot be split into its components.
    #[error("purchase date '{value}' is invalid: {reason}")]
    InvalidDate { value: String, reason: String },

    /// The purchase time cannot be split into hour and minute.
    #[error("purchase time '{value}' is invalid: {reason}")]
    InvalidTime { value: String, reason: String },

    /// Invalid format (e.g. a malformed receipt id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the receipt field that failed, as it appears on the wire.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidMonetaryValue { field, .. } => field,
            ValidationError::InvalidDate { .. } => "purchaseDate",
            ValidationError::InvalidTime { .. } => "purchaseTime",
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Rule Error
// =============================================================================

/// A scoring rule could not be evaluated.
///
/// Any rule failure aborts the whole scoring run, so this carries enough
/// context for the caller to report either a generic or a field-specific
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rule} rule failed: {source}")]
pub struct RuleError {
    pub rule: Rule,
    #[source]
    pub source: ValidationError,
}

impl RuleError {
    pub fn new(rule: Rule, source: ValidationError) -> Self {
        RuleError { rule, source }
    }

    /// The receipt field that caused the failure.
    pub fn field(&self) -> &str {
        self.source.field()
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RuleError.
pub type RuleResult<T> = Result<T, RuleError>;

// =============================================================================
// Unit Tests
// =============================================================================
