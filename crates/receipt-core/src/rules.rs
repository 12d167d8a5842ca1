//! # Scoring Rules
//!
//! The points engine: a closed set of rules, each reading one part of a
//! receipt and returning a non-negative contribution.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                 Reads            Awards                           │
//! │  ──────────────────   ──────────────   ───────────────────────────────  │
//! │  RetailerName         retailer         1 per ASCII letter/digit         │
//! │  RoundTotal           total            50 if no fractional part         │
//! │  QuarterMultiple      total            25 if cents % 25 == 0            │
//! │  ItemPairs            items.len()      5 per two items                  │
//! │  ItemDescriptions     items[*]         ceil(price × 0.2) when trimmed   │
//! │                                        description length % 3 == 0      │
//! │  OddPurchaseDay       purchaseDate     6 if day is odd                  │
//! │  AfternoonPurchase    purchaseTime     10 if 14:01 - 15:59              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! `score_receipt` walks [`Rule::ALL`] in order and stops at the first rule
//! whose field does not parse. There is no partial credit: a receipt either
//! gets a full score or a [`RuleError`] naming the rule and field.
//!
//! ## Example
//! ```rust
//! use receipt_core::rules::calculate_points;
//! use receipt_core::types::Receipt;
//!
//! let receipt = Receipt {
//!     retailer: "M".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "08:00".to_string(),
//!     items: vec![],
//!     total: "2".to_string(),
//! };
//!
//! // retailer 1 + round 50 + quarter 25
//! assert_eq!(calculate_points(&receipt).unwrap(), 76);
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{RuleError, RuleResult};
use crate::money::Money;
use crate::types::{Item, Receipt};
use crate::validation::{parse_amount, parse_purchase_day, parse_purchase_time, ValidationResult};

// =============================================================================
// Rule Constants
// =============================================================================

/// Bonus for a total with no cents.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Bonus for a total that is a multiple of [`QUARTER`].
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Step for the quarter-multiple rule.
pub const QUARTER: Money = Money::from_cents(25);

/// Points per two items on the receipt.
pub const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Trimmed description lengths divisible by this earn price points.
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;

/// Share of the item price awarded, in basis points (20%).
pub const ITEM_PRICE_SHARE_BPS: u32 = 2_000;

/// Bonus for an odd day of the month.
pub const ODD_DAY_POINTS: u64 = 6;

/// Bonus for a purchase between 14:00 and 16:00.
pub const AFTERNOON_POINTS: u64 = 10;

// =============================================================================
// Rule
// =============================================================================

/// One scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    RetailerName,
    RoundTotal,
    QuarterMultiple,
    ItemPairs,
    ItemDescriptions,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundTotal,
        Rule::QuarterMultiple,
        Rule::ItemPairs,
        Rule::ItemDescriptions,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    /// Human readable rule name.
    pub const fn name(&self) -> &'static str {
        match self {
            Rule::RetailerName => "retailer name",
            Rule::RoundTotal => "round total",
            Rule::QuarterMultiple => "quarter multiple",
            Rule::ItemPairs => "item pairs",
            Rule::ItemDescriptions => "item descriptions",
            Rule::OddPurchaseDay => "odd purchase day",
            Rule::AfternoonPurchase => "afternoon purchase",
        }
    }

    /// Evaluates this rule against a receipt.
    pub fn apply(self, receipt: &Receipt) -> RuleResult<u64> {
        let points = match self {
            Rule::RetailerName => Ok(retailer_points(&receipt.retailer)),
            Rule::RoundTotal => round_total_points(&receipt.total),
            Rule::QuarterMultiple => quarter_multiple_points(&receipt.total),
            Rule::ItemPairs => Ok(item_pair_points(&receipt.items)),
            Rule::ItemDescriptions => item_description_points(&receipt.items),
            Rule::OddPurchaseDay => odd_day_points(&receipt.purchase_date),
            Rule::AfternoonPurchase => afternoon_points(&receipt.purchase_time),
        };

        points.map_err(|source| RuleError::new(self, source))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per ASCII letter or digit in the retailer name.
///
/// Non-ASCII letters and digits such as `é` or `٣` score nothing.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points if the total has no fractional part.
pub fn round_total_points(total: &str) -> ValidationResult<u64> {
    let total = parse_amount("total", total)?;
    Ok(if total.is_whole() { ROUND_TOTAL_POINTS } else { 0 })
}

/// 25 points if the total is a multiple of 0.25.
pub fn quarter_multiple_points(total: &str) -> ValidationResult<u64> {
    let total = parse_amount("total", total)?;
    Ok(if total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    })
}

/// 5 points for every two items.
pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// Price points for items with a qualifying description length.
///
/// Length is the byte length of the whitespace-trimmed description. An
/// empty description qualifies. Prices of non-qualifying items are never
/// parsed, and a negative price contributes nothing.
pub fn item_description_points(items: &[Item]) -> ValidationResult<u64> {
    let mut points: u64 = 0;

    for (index, item) in items.iter().enumerate() {
        let length = item.short_description.trim().len();
        if length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
            continue;
        }

        let price = parse_amount(&format!("items[{index}].price"), &item.price)?;
        let item_points = u64::try_from(price.ceil_share(ITEM_PRICE_SHARE_BPS)).unwrap_or(0);
        points = points.saturating_add(item_points);
    }

    Ok(points)
}

/// 6 points if the day of the purchase date is odd.
pub fn odd_day_points(purchase_date: &str) -> ValidationResult<u64> {
    let day = parse_purchase_day(purchase_date)?;
    Ok(if day % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// 10 points if the purchase was after 14:00 and before 16:00.
///
/// Both bounds are exclusive: `14:00` and `16:00` score nothing.
pub fn afternoon_points(purchase_time: &str) -> ValidationResult<u64> {
    let time = parse_purchase_time(purchase_time)?;
    let in_window = (time.hour == 14 && time.minute != 0) || time.hour == 15;
    Ok(if in_window { AFTERNOON_POINTS } else { 0 })
}

// =============================================================================
// Engine
// =============================================================================

/// Points awarded by one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: Rule,
    pub points: u64,
}

/// Per-rule contributions of one scoring run, in [`Rule::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.points))
    }

    /// Points from a single rule (zero if the rule was not run).
    pub fn points_for(&self, rule: Rule) -> u64 {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map_or(0, |c| c.points)
    }
}

/// Runs every rule against the receipt.
///
/// ## Errors
/// Returns the first [`RuleError`] encountered; no score is produced for a
/// receipt with any unparsable field.
pub fn score_receipt(receipt: &Receipt) -> RuleResult<ScoreBreakdown> {
    let contributions = Rule::ALL
        .iter()
        .map(|&rule| {
            rule.apply(receipt)
                .map(|points| RuleContribution { rule, points })
        })
        .collect::<RuleResult<Vec<_>>>()?;

    Ok(ScoreBreakdown { contributions })
}

/// Total points for a receipt.
pub fn calculate_points(receipt: &Receipt) -> RuleResult<u64> {
    score_receipt(receipt).map(|breakdown| breakdown.total())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        }
    }

    fn items(n: usize) -> Vec<Item> {
        (1..=n)
            .map(|i| Item::new(format!("Item{i}"), format!("{i}.00")))
            .collect()
    }

    #[test]
    fn test_retailer_points() {
        let cases = [
            ("Target123", 9),
            ("Wal mart", 7),
            ("Best Buy!", 7),
            ("", 0),
            ("!@#$%^&*()_+", 0),
            ("M&M Corner Market", 14),
            ("Café Ünïcode", 8),
            ("٣٤٥", 0),
        ];

        for (retailer, expected) in cases {
            assert_eq!(retailer_points(retailer), expected, "retailer {retailer:?}");
        }
    }

    #[test]
    fn test_round_total_points() {
        assert_eq!(round_total_points("2").unwrap(), 50);
        assert_eq!(round_total_points("2.00").unwrap(), 50);
        assert_eq!(round_total_points("0").unwrap(), 50);
        assert_eq!(round_total_points("2.01").unwrap(), 0);
        assert_eq!(round_total_points("35.35").unwrap(), 0);
        assert!(round_total_points("invalid").is_err());
    }

    #[test]
    fn test_total_with_sub_cent_digits_is_not_round() {
        // Rounds to 300 cents, a quarter multiple, but is not a whole number
        assert_eq!(round_total_points("2.999").unwrap(), 0);
        assert_eq!(quarter_multiple_points("2.999").unwrap(), 25);

        // Rounds to 200 cents
        assert_eq!(round_total_points("2.001").unwrap(), 0);
        assert_eq!(quarter_multiple_points("2.001").unwrap(), 25);

        // Rounds to 201 cents
        assert_eq!(round_total_points("2.005").unwrap(), 0);
        assert_eq!(quarter_multiple_points("2.005").unwrap(), 0);
    }

    #[test]
    fn test_negative_total_is_scored() {
        let total = "-2.00";
        assert_eq!(round_total_points(total).unwrap(), 50);
        assert_eq!(quarter_multiple_points(total).unwrap(), 25);

        assert_eq!(round_total_points("-0.29").unwrap(), 0);
        assert_eq!(quarter_multiple_points("-0.29").unwrap(), 0);
    }

    #[test]
    fn test_quarter_multiple_points() {
        assert_eq!(quarter_multiple_points("50.25").unwrap(), 25);
        assert_eq!(quarter_multiple_points("2").unwrap(), 25);
        assert_eq!(quarter_multiple_points("9.75").unwrap(), 25);
        assert_eq!(quarter_multiple_points("2.10").unwrap(), 0);
        assert_eq!(quarter_multiple_points("0.29").unwrap(), 0);
        assert!(quarter_multiple_points("").is_err());
    }

    #[test]
    fn test_total_rules_combined() {
        // A round total is always a quarter multiple too
        let total = "2";
        assert_eq!(
            round_total_points(total).unwrap() + quarter_multiple_points(total).unwrap(),
            75
        );
    }

    #[test]
    fn test_item_pair_points() {
        assert_eq!(item_pair_points(&items(0)), 0);
        assert_eq!(item_pair_points(&items(1)), 0);
        assert_eq!(item_pair_points(&items(2)), 5);
        assert_eq!(item_pair_points(&items(3)), 5);
        assert_eq!(item_pair_points(&items(4)), 10);
        assert_eq!(item_pair_points(&items(5)), 10);
    }

    #[test]
    fn test_item_description_points() {
        let items = vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ];

        // "Emils Cheese Pizza" (18) → ceil(2.45) = 3
        // "Klarbrunn 12-PK 12 FL OZ" (24) → ceil(2.4) = 3
        assert_eq!(item_description_points(&items).unwrap(), 6);
    }

    #[test]
    fn test_item_description_empty_description_qualifies() {
        let items = vec![Item::new("   ", "5.00"), Item::new("", "0.01")];
        assert_eq!(item_description_points(&items).unwrap(), 2);
    }

    #[test]
    fn test_item_description_length_counts_bytes() {
        // "Café" is 4 characters but 5 bytes
        let items = vec![Item::new("Café", "10.00")];
        assert_eq!(item_description_points(&items).unwrap(), 0);

        let items = vec![Item::new("Caf", "10.00")];
        assert_eq!(item_description_points(&items).unwrap(), 2);

        // "Cafééé" is 9 bytes
        let items = vec![Item::new(" Cafééé ", "10.00")];
        assert_eq!(item_description_points(&items).unwrap(), 2);
    }

    #[test]
    fn test_item_description_negative_price_contributes_nothing() {
        let items = vec![Item::new("Tea", "-5.00"), Item::new("Pie", "5.00")];
        assert_eq!(item_description_points(&items).unwrap(), 1);

        // ceil(-0.002) is zero too
        let items = vec![Item::new("Tea", "-0.01")];
        assert_eq!(item_description_points(&items).unwrap(), 0);
    }

    #[test]
    fn test_item_description_skips_unqualified_prices() {
        // Length 4: the bad price is never looked at
        let items = vec![Item::new("Milk", "not-a-price")];
        assert_eq!(item_description_points(&items).unwrap(), 0);
    }

    #[test]
    fn test_item_description_invalid_price_names_item() {
        let items = vec![Item::new("Gatorade", "2.25"), Item::new("Tea", "abc")];

        let err = item_description_points(&items).unwrap_err();
        assert_eq!(err.field(), "items[1].price");
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points("2022-01-01").unwrap(), 6);
        assert_eq!(odd_day_points("2022-01-02").unwrap(), 0);
        assert_eq!(odd_day_points("2022-03-31").unwrap(), 6);
        assert!(odd_day_points("2022-01-XX").is_err());
        assert!(odd_day_points("January 1st").is_err());
    }

    #[test]
    fn test_afternoon_points() {
        let cases = [
            ("15:30", 10),
            ("14:30", 10),
            ("14:01", 10),
            ("15:59", 10),
            ("14:00", 0),
            ("16:00", 0),
            ("13:59", 0),
            ("08:13", 0),
        ];

        for (time, expected) in cases {
            assert_eq!(afternoon_points(time).unwrap(), expected, "time {time}");
        }
    }

    #[test]
    fn test_afternoon_points_rejects_bad_times() {
        for time in ["25:00", "14:61", "", "2pm", "14-30"] {
            assert!(afternoon_points(time).is_err(), "time {time:?}");
        }
    }

    #[test]
    fn test_rule_order_and_names() {
        assert_eq!(Rule::ALL.len(), 7);
        assert_eq!(Rule::ALL[0], Rule::RetailerName);
        assert_eq!(Rule::AfternoonPurchase.to_string(), "afternoon purchase");
    }

    #[test]
    fn test_minimal_receipt_scores_76() {
        let r = receipt("M", "2022-01-02", "09:00", vec![], "2");
        assert_eq!(calculate_points(&r).unwrap(), 76);
    }

    #[test]
    fn test_target_receipt() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        );

        let breakdown = score_receipt(&r).unwrap();
        assert_eq!(breakdown.points_for(Rule::RetailerName), 6);
        assert_eq!(breakdown.points_for(Rule::RoundTotal), 0);
        assert_eq!(breakdown.points_for(Rule::QuarterMultiple), 0);
        assert_eq!(breakdown.points_for(Rule::ItemPairs), 10);
        assert_eq!(breakdown.points_for(Rule::ItemDescriptions), 6);
        assert_eq!(breakdown.points_for(Rule::OddPurchaseDay), 6);
        assert_eq!(breakdown.points_for(Rule::AfternoonPurchase), 0);
        assert_eq!(breakdown.total(), 28);
    }

    #[test]
    fn test_corner_market_receipt() {
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
            ],
            "9.00",
        );

        // 14 + 50 + 25 + 10 + 0 + 0 + 10
        assert_eq!(calculate_points(&r).unwrap(), 109);
    }

    #[test]
    fn test_refund_receipt_scores_negative_total() {
        let r = receipt("M", "2022-01-02", "09:00", vec![], "-2.00");
        // retailer 1 + round 50 + quarter 25
        assert_eq!(calculate_points(&r).unwrap(), 76);
    }

    #[test]
    fn test_breakdown_lists_every_rule_in_order() {
        let r = receipt("M", "2022-01-02", "09:00", vec![], "2");
        let breakdown = score_receipt(&r).unwrap();

        let rules: Vec<Rule> = breakdown.contributions.iter().map(|c| c.rule).collect();
        assert_eq!(rules, Rule::ALL.to_vec());
    }

    #[test]
    fn test_first_failing_rule_aborts_scoring() {
        // Both total and date are bad; total is evaluated first
        let r = receipt("M", "2022-01-XX", "09:00", vec![], "abc");

        let err = score_receipt(&r).unwrap_err();
        assert_eq!(err.rule, Rule::RoundTotal);
        assert_eq!(err.field(), "total");
    }

    #[test]
    fn test_each_bad_field_names_its_rule() {
        let bad_date = receipt("M", "2022-01-XX", "09:00", vec![], "2");
        let err = calculate_points(&bad_date).unwrap_err();
        assert_eq!(err.rule, Rule::OddPurchaseDay);
        assert!(matches!(err.source, ValidationError::InvalidDate { .. }));

        let bad_time = receipt("M", "2022-01-02", "25:00", vec![], "2");
        let err = calculate_points(&bad_time).unwrap_err();
        assert_eq!(err.rule, Rule::AfternoonPurchase);
        assert!(matches!(err.source, ValidationError::InvalidTime { .. }));

        let bad_price = receipt("M", "2022-01-02", "09:00", vec![Item::new("Tea", "x")], "2");
        let err = calculate_points(&bad_price).unwrap_err();
        assert_eq!(err.rule, Rule::ItemDescriptions);
        assert!(matches!(err.source, ValidationError::InvalidMonetaryValue { .. }));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let r = receipt("Walgreens", "2022-01-02", "08:13", items(2), "2.65");
        assert_eq!(calculate_points(&r).unwrap(), calculate_points(&r).unwrap());
    }
}
