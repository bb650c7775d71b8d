//! # Money Module
//!
//! Reads receipt amounts as exact decimals and answers the questions the
//! scoring rules ask about them.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FLOATING POINT (BAD):                                                  │
//! │    35.35 % 0.25 = 0.10000000000000142                                   │
//! │    0.1 + 0.2    = 0.30000000000000004                                   │
//! │                                                                         │
//! │  DECIMAL (GOOD):                                                        │
//! │    "35.35"  → 35.35;   35.35 % 0.25 == 0.10 → not a quarter multiple    │
//! │    "6.495"  → 6.495;   ceil(6.495 × 0.2) == ceil(1.299) == 2            │
//! │    "12.345" → 12.345;  12.345 % 1 == 0.345  → not whole dollars         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts keep every digit the client sent; nothing is rounded to cents.
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::{is_multiple_of, is_whole_dollars, parse_amount};
//! use rust_decimal::Decimal;
//!
//! let total = parse_amount("9.00").unwrap();
//! assert!(is_whole_dollars(total));
//! assert!(is_multiple_of(total, Decimal::new(25, 2)));
//! ```

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::MoneyParseError;

// =============================================================================
// Parsing
// =============================================================================

/// Parses an amount string such as `"35.35"` at full precision.
///
/// Accepts an optional sign, digits and a single decimal point. Exponents,
/// surrounding whitespace and currency symbols are rejected.
pub fn parse_amount(text: &str) -> Result<Decimal, MoneyParseError> {
    if text.is_empty() {
        return Err(MoneyParseError::Empty);
    }
    Ok(Decimal::from_str(text)?)
}

// =============================================================================
// Predicates
// =============================================================================

/// True when the amount has no fractional part (`amount mod 1 == 0`).
pub fn is_whole_dollars(amount: Decimal) -> bool {
    (amount % Decimal::ONE).is_zero()
}

/// True when the amount is an exact multiple of `step`.
///
/// A zero step never divides anything.
pub fn is_multiple_of(amount: Decimal, step: Decimal) -> bool {
    !step.is_zero() && (amount % step).is_zero()
}

// =============================================================================
// Arithmetic
// =============================================================================

/// `ceil(amount × rate)` as a whole number, floored at zero.
///
/// Saturates at `u64::MAX` for products too large to count.
pub fn ceil_scaled(amount: Decimal, rate: Decimal) -> u64 {
    let product = amount.checked_mul(rate).unwrap_or(Decimal::MAX);
    product
        .ceil()
        .max(Decimal::ZERO)
        .to_u64()
        .unwrap_or(u64::MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        parse_amount(text).unwrap()
    }

    #[test]
    fn test_parse_amounts() {
        assert_eq!(dec("35.35"), Decimal::new(3535, 2));
        assert_eq!(dec("9.00"), Decimal::new(9, 0));
        assert_eq!(dec("100"), Decimal::new(100, 0));
        assert_eq!(dec("-1.50"), Decimal::new(-15, 1));
    }

    #[test]
    fn test_parse_keeps_sub_cent_precision() {
        assert_eq!(dec("12.345"), Decimal::new(12345, 3));
        assert_eq!(dec("6.495"), Decimal::new(6495, 3));
        assert_eq!(dec("6.490"), dec("6.49"));
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(parse_amount(""), Err(MoneyParseError::Empty)));
        assert!(matches!(parse_amount("abc"), Err(MoneyParseError::Invalid(_))));
        assert!(parse_amount("1.2.3").is_err());
        assert!(parse_amount("$5.00").is_err());
        assert!(parse_amount("1e3").is_err());
        assert!(parse_amount(" 1.00").is_err());
    }

    #[test]
    fn test_whole_dollars() {
        assert!(is_whole_dollars(dec("100.00")));
        assert!(is_whole_dollars(dec("0")));
        assert!(is_whole_dollars(dec("-3")));
        assert!(!is_whole_dollars(dec("10.10")));
        assert!(!is_whole_dollars(dec("12.001")));
    }

    #[test]
    fn test_multiple_of_quarter() {
        let quarter = Decimal::new(25, 2);
        assert!(is_multiple_of(dec("10.75"), quarter));
        assert!(is_multiple_of(dec("100.00"), quarter));
        assert!(is_multiple_of(dec("0.250"), quarter));
        assert!(!is_multiple_of(dec("35.35"), quarter));
        assert!(!is_multiple_of(dec("12.345"), quarter));
        assert!(!is_multiple_of(dec("1.00"), Decimal::ZERO));
    }

    #[test]
    fn test_ceil_scaled() {
        let rate = Decimal::new(2, 1);
        assert_eq!(ceil_scaled(dec("6.49"), rate), 2);
        assert_eq!(ceil_scaled(dec("6.495"), rate), 2);
        assert_eq!(ceil_scaled(dec("12.25"), rate), 3);
        assert_eq!(ceil_scaled(dec("5.00"), rate), 1);
        assert_eq!(ceil_scaled(dec("0.001"), rate), 1);
        assert_eq!(ceil_scaled(Decimal::ZERO, rate), 0);
        assert_eq!(ceil_scaled(dec("-10.00"), rate), 0);
    }
}
