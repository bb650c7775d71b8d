//! # Scoring Engine
//!
//! Pure, deterministic points calculation for a single receipt.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                          Points                Parse failure   │
//! │  ─  ────────────────────────────  ────────────────────  ─────────────   │
//! │  1  Retailer alphanumerics        +1 per [A-Za-z0-9]    n/a             │
//! │  2  Total is whole dollars        +50                   total = 0 → +50 │
//! │  3  Total is multiple of 0.25     +25                   total = 0 → +25 │
//! │  4  Every two items               +5 per pair           n/a             │
//! │  5  Trimmed desc len % 3 == 0     ceil(price × 0.2)     price = 0 → 0   │
//! │  6  Purchase day is odd           +6                    no bonus        │
//! │  7  14:00 <= time < 16:00         +10                   no bonus        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is evaluated independently and the contributions are summed,
//! so rule order never changes the total. No rule subtracts points.
//!
//! ## Example
//! ```rust
//! use receipt_core::{scoring, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() };
//!         4
//!     ],
//!     total: "9.00".to_string(),
//! };
//! assert_eq!(scoring::score(&receipt), 109);
//! ```

use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;
use tracing::debug;

use crate::money::{ceil_scaled, is_multiple_of, is_whole_dollars};
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Rule 2 bonus.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Rule 3 bonus.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Rule 4 bonus per pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Rule 5 divisor for the trimmed description length.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// Rule 5 price multiplier, in tenths (0.2).
pub const DESCRIPTION_PRICE_RATE_TENTHS: i64 = 2;

/// Rule 6 bonus.
pub const ODD_DAY_POINTS: u64 = 6;

/// Rule 7 bonus.
pub const AFTERNOON_POINTS: u64 = 10;

/// Rule 7 window start hour (inclusive).
pub const AFTERNOON_START_HOUR: u32 = 14;

/// Rule 7 window end hour (exclusive).
pub const AFTERNOON_END_HOUR: u32 = 16;

fn quarter() -> Decimal {
    Decimal::new(25, 2)
}

fn description_price_rate() -> Decimal {
    Decimal::new(DESCRIPTION_PRICE_RATE_TENTHS, 1)
}

// =============================================================================
// Breakdown
// =============================================================================

/// Points contributed by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating on absurd prices.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Evaluates every rule against the receipt.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    // Rules 2 and 3 share one parse; a malformed total counts as zero.
    let total = receipt.parse_total().unwrap_or_default();

    PointsBreakdown {
        retailer_name: retailer_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(total),
        quarter_multiple_total: quarter_multiple_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_purchase_day: odd_day_points(receipt),
        afternoon_purchase: afternoon_points(receipt),
    }
}

/// Total points for the receipt.
pub fn score(receipt: &Receipt) -> u64 {
    let breakdown = breakdown(receipt);
    let points = breakdown.total();
    debug!(total = %receipt.total, ?breakdown, points, "Receipt scored");
    points
}

// =============================================================================
// Rules
// =============================================================================

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: Decimal) -> u64 {
    if is_whole_dollars(total) {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Decimal) -> u64 {
    if is_multiple_of(total, quarter()) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// An empty trimmed description does not qualify even though 0 % 3 == 0.
fn description_points(item: &Item) -> u64 {
    let len = item.trimmed_description_len();
    if len == 0 || len % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    let price = item.parse_price().unwrap_or_default();
    ceil_scaled(price, description_price_rate())
}

fn odd_day_points(receipt: &Receipt) -> u64 {
    match receipt.parse_purchase_date() {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

fn afternoon_points(receipt: &Receipt) -> u64 {
    match receipt.parse_purchase_time() {
        Ok(time) if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) => {
            AFTERNOON_POINTS
        }
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
