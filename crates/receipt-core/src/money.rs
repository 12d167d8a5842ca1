//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Parsed as f64:                                                        │
//! │    "0.29" * 100 = 28.999999999999996  ❌ WRONG CENTS!                   │
//! │    → "is this a multiple of 0.25?" depends on float noise              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "0.29" → 29 cents, parsed digit by digit                            │
//! │    Round-total and quarter checks are plain integer modulo             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_whole());
//!
//! // NEVER do this:
//! // let bad = Money::from_float(35.35); // NO SUCH METHOD EXISTS!
//! ```

use std::str::FromStr;

use thiserror::Error;

/// Basis points in one whole (100%).
const BPS_PER_WHOLE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Receipts may carry negative amounts such as refunds
/// - **`sub_cent` flag**: Parsing rounds to cents but remembers whether a
///   nonzero digit past the cents was dropped, so `2.001` is not whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    cents: i64,
    sub_cent: bool,
}

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money {
            cents,
            sub_cent: false,
        }
    }

    /// Returns the value in cents, rounded half away from zero.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// True when the exact amount has no fractional part (`2` or `2.00`).
    ///
    /// Uses the digits as written: `2.999` and `2.001` are not whole even
    /// though they round to a whole number of cents.
    #[inline]
    pub const fn is_whole(&self) -> bool {
        !self.sub_cent && self.cents % 100 == 0
    }

    /// True when the amount in cents is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(5025).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(210).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.cents != 0 && self.cents % step.cents == 0
    }

    /// Takes a share of the amount and rounds up to a whole unit.
    ///
    /// The share is given in basis points (2000 = 20%) and the result is
    /// `ceil(amount * share)` in whole currency units, rounding toward
    /// positive infinity rather than half-even.
    ///
    /// ## Implementation
    /// `amount_cents * bps` is in cent-basis-points, so one whole unit is
    /// `100 * 10000`. Integer ceiling division keeps it exact.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // $12.25 × 20% = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_share(2000), 3);
    /// // $5.00 × 20% = 1.00 → 1
    /// assert_eq!(Money::from_cents(500).ceil_share(2000), 1);
    /// ```
    pub fn ceil_share(&self, share_bps: u32) -> i64 {
        // Use i128 to prevent overflow on large amounts
        let scaled = i128::from(self.cents) * i128::from(share_bps);
        let unit = 100 * BPS_PER_WHOLE;
        let whole_units = -((-scaled).div_euclid(unit));
        whole_units as i64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Reasons a textual amount cannot become `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount contains an unexpected character")]
    InvalidCharacter,

    #[error("amount is too large")]
    Overflow,
}

/// Parses `[+-]digits[.digits]` into cents.
///
/// - Surrounding whitespace is ignored, a leading sign is allowed
/// - `.5` and `5.` are accepted
/// - Digits past the second decimal place round half away from zero
///
/// ```rust
/// use receipt_core::money::{Money, MoneyParseError};
///
/// assert_eq!("2".parse::<Money>().unwrap().cents(), 200);
/// assert_eq!("2.005".parse::<Money>().unwrap().cents(), 201);
/// assert_eq!("-1.00".parse::<Money>().unwrap().cents(), -100);
/// assert_eq!("1e2".parse::<Money>(), Err(MoneyParseError::InvalidCharacter));
/// ```
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, unsigned) = match text.as_bytes().first() {
            None => return Err(MoneyParseError::Empty),
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            Some(_) => (false, text),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(MoneyParseError::InvalidCharacter);
        }

        let mut dollars: i64 = 0;
        for digit in whole.bytes().map(|b| i64::from(b - b'0')) {
            dollars = dollars
                .checked_mul(10)
                .and_then(|d| d.checked_add(digit))
                .ok_or(MoneyParseError::Overflow)?;
        }

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let mut rest = digits.peekable();
        let round_up = rest.peek().is_some_and(|&d| d >= 5);
        let sub_cent = rest.any(|d| d != 0);
        let minor = tenths * 10 + hundredths + i64::from(round_up);

        let magnitude = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or(MoneyParseError::Overflow)?;
        let cents = if negative { -magnitude } else { magnitude };

        Ok(Money { cents, sub_cent })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
