//! # Validation Module
//!
//! Field parsers the scoring rules run before awarding points.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (axum Json extractor)                                   │
//! │  └── Shape checks: every field present, every field a string           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by each rule)                            │
//! │  ├── total / price → Money (integer cents)                             │
//! │  ├── purchaseDate  → day of month                                      │
//! │  └── purchaseTime  → hour and minute                                   │
//! │                                                                         │
//! │  A field is only parsed by the rule that reads it                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{parse_amount, parse_purchase_day, parse_purchase_time};
//!
//! assert_eq!(parse_amount("total", "35.35").unwrap().cents(), 3535);
//! assert_eq!(parse_purchase_day("2022-01-01").unwrap(), 1);
//! assert_eq!(parse_purchase_time("13:01").unwrap().hour, 13);
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Money
// =============================================================================

/// Parses a monetary field into cents.
///
/// `field` is the wire name used in the error (`total`, `items[0].price`).
pub fn parse_amount(field: &str, value: &str) -> ValidationResult<Money> {
    value
        .parse::<Money>()
        .map_err(|e| ValidationError::InvalidMonetaryValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// Date / Time
// =============================================================================

/// Extracts the day of month from a `YYYY-MM-DD` purchase date.
///
/// ## Rules
/// - Exactly three `-` separated components
/// - The third component must be an unsigned integer
/// - Year and month are not interpreted, and the day is not range checked
///
/// ## Example
/// ```rust
/// use receipt_core::validation::parse_purchase_day;
///
/// assert_eq!(parse_purchase_day("2022-03-20").unwrap(), 20);
/// assert!(parse_purchase_day("2022-01-XX").is_err());
/// assert!(parse_purchase_day("20220320").is_err());
/// ```
pub fn parse_purchase_day(purchase_date: &str) -> ValidationResult<u32> {
    let invalid = |reason: &str| ValidationError::InvalidDate {
        value: purchase_date.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = purchase_date.split('-').collect();
    let [_, _, day] = parts.as_slice() else {
        return Err(invalid("expected YYYY-MM-DD"));
    };

    day.parse::<u32>()
        .map_err(|_| invalid("day is not a number"))
}

/// A 24-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

/// Parses an `HH:MM` purchase time.
///
/// ## Rules
/// - Exactly two `:` separated components
/// - Both must be unsigned integers
/// - Hour must be 0-23, minute 0-59
///
/// ## Example
/// ```rust
/// use receipt_core::validation::parse_purchase_time;
///
/// let time = parse_purchase_time("14:33").unwrap();
/// assert_eq!((time.hour, time.minute), (14, 33));
///
/// assert!(parse_purchase_time("25:00").is_err());
/// assert!(parse_purchase_time("14:61").is_err());
/// assert!(parse_purchase_time("").is_err());
/// ```
pub fn parse_purchase_time(purchase_time: &str) -> ValidationResult<ClockTime> {
    let invalid = |reason: &str| ValidationError::InvalidTime {
        value: purchase_time.to_string(),
        reason: reason.to_string(),
    };

    let Some((hour, minute)) = purchase_time.split_once(':') else {
        return Err(invalid("expected HH:MM"));
    };
    if minute.contains(':') {
        return Err(invalid("expected HH:MM"));
    }

    let hour: u32 = hour.parse().map_err(|_| invalid("hour is not a number"))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| invalid("minute is not a number"))?;

    if hour > 23 {
        return Err(invalid("hour must be between 0 and 23"));
    }
    if minute > 59 {
        return Err(invalid("minute must be between 0 and 59"));
    }

    Ok(ClockTime { hour, minute })
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a receipt id string format.
///
/// ## Rules
/// - Must be a valid UUID (any version, hyphenated or simple form)
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_receipt_id;
///
/// assert!(validate_receipt_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_receipt_id("not-a-uuid").is_err());
/// ```
pub fn validate_receipt_id(id: &str) -> ValidationResult<()> {
    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("total", "50.25").unwrap().cents(), 5025);

        let err = parse_amount("items[1].price", "abc").unwrap_err();
        assert_eq!(err.field(), "items[1].price");
        assert!(matches!(err, ValidationError::InvalidMonetaryValue { .. }));
    }

    #[test]
    fn test_parse_purchase_day() {
        assert_eq!(parse_purchase_day("2022-01-01").unwrap(), 1);
        assert_eq!(parse_purchase_day("2022-01-02").unwrap(), 2);
        assert_eq!(parse_purchase_day("2022-03-20").unwrap(), 20);
    }

    #[test]
    fn test_parse_purchase_day_rejects_bad_dates() {
        assert!(parse_purchase_day("2022-01-XX").is_err());
        assert!(parse_purchase_day("2022-01-").is_err());
        assert!(parse_purchase_day("2022/01/01").is_err());
        assert!(parse_purchase_day("2022-01").is_err());
        assert!(parse_purchase_day("2022-01-01-01").is_err());
        assert!(parse_purchase_day("").is_err());

        let err = parse_purchase_day("2022-01-XX").unwrap_err();
        assert_eq!(err.field(), "purchaseDate");
    }

    #[test]
    fn test_parse_purchase_time() {
        assert_eq!(
            parse_purchase_time("15:30").unwrap(),
            ClockTime { hour: 15, minute: 30 }
        );
        assert_eq!(
            parse_purchase_time("00:00").unwrap(),
            ClockTime { hour: 0, minute: 0 }
        );
        assert_eq!(
            parse_purchase_time("23:59").unwrap(),
            ClockTime { hour: 23, minute: 59 }
        );
    }

    #[test]
    fn test_parse_purchase_time_rejects_bad_times() {
        assert!(parse_purchase_time("").is_err());
        assert!(parse_purchase_time("1430").is_err());
        assert!(parse_purchase_time("14:").is_err());
        assert!(parse_purchase_time(":30").is_err());
        assert!(parse_purchase_time("ab:30").is_err());
        assert!(parse_purchase_time("14:30:00").is_err());
        assert!(parse_purchase_time("25:00").is_err());
        assert!(parse_purchase_time("24:00").is_err());
        assert!(parse_purchase_time("14:61").is_err());

        let err = parse_purchase_time("14:99").unwrap_err();
        assert_eq!(err.field(), "purchaseTime");
    }

    #[test]
    fn test_validate_receipt_id() {
        assert!(validate_receipt_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_receipt_id("").is_err());
        assert!(validate_receipt_id("not-a-uuid").is_err());
        assert!(validate_receipt_id("123").is_err());
    }
}
