//! # Validation Module
//!
//! Strict input validation for receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP adapter (receipt-api)                                   │
//! │  ├── JSON syntax                                                       │
//! │  └── Shape: every field present with the right JSON type               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (only when strict validation is enabled)         │
//! │  ├── total / price parse as decimals and are not negative              │
//! │  ├── purchaseDate parses as zero-padded YYYY-MM-DD                     │
//! │  └── purchaseTime parses as HH:MM                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring (always)                                             │
//! │  └── Any field that still fails to parse scores as zero / no bonus     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate_amount;
//!
//! assert!(validate_amount("total", "35.35").is_ok());
//! assert!(validate_amount("total", "35.3.5").is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::parse_amount;
use crate::types::{Receipt, PURCHASE_TIME_FORMAT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a monetary amount string and returns the parsed value.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a decimal (see [`parse_amount`])
/// - Must not be negative
pub fn validate_amount(field: &str, text: &str) -> ValidationResult<Decimal> {
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let amount = parse_amount(text).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("{}", e),
    })?;

    if amount < Decimal::ZERO {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(amount)
}

/// Validates `purchaseDate` against `YYYY-MM-DD`.
pub fn validate_purchase_date(receipt: &Receipt) -> ValidationResult<()> {
    if receipt.purchase_date.is_empty() {
        return Err(ValidationError::Required {
            field: "purchaseDate".to_string(),
        });
    }

    receipt
        .parse_purchase_date()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "purchaseDate".to_string(),
            reason: e.to_string(),
        })?;

    Ok(())
}

/// Validates `purchaseTime` against 24-hour `HH:MM`.
pub fn validate_purchase_time(receipt: &Receipt) -> ValidationResult<()> {
    if receipt.purchase_time.is_empty() {
        return Err(ValidationError::Required {
            field: "purchaseTime".to_string(),
        });
    }

    receipt
        .parse_purchase_time()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "purchaseTime".to_string(),
            reason: format!("expected {}: {}", PURCHASE_TIME_FORMAT, e),
        })?;

    Ok(())
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates every parsed field of a receipt, reporting the first failure.
///
/// Fields are checked in wire order: `purchaseDate`, `purchaseTime`, each
/// `items[i].price`, then `total`. Free-text fields (`retailer`,
/// `shortDescription`) are never rejected.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    validate_purchase_date(receipt)?;
    validate_purchase_time(receipt)?;

    for (index, item) in receipt.items.iter().enumerate() {
        validate_amount(&format!("items[{}].price", index), &item.price)?;
    }

    validate_amount("total", &receipt.total)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn valid_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item {
                    short_description: "Mountain Dew 12PK".to_string(),
                    price: "6.49".to_string(),
                },
                Item {
                    short_description: "Emils Cheese Pizza".to_string(),
                    price: "12.25".to_string(),
                },
            ],
            total: "18.74".to_string(),
        }
    }

    fn field_of(err: ValidationError) -> String {
        match err {
            ValidationError::Required { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("total", "35.35").unwrap(), Decimal::new(3535, 2));
        assert_eq!(validate_amount("total", "0").unwrap(), Decimal::ZERO);
        assert_eq!(validate_amount("total", "1.005").unwrap(), Decimal::new(1005, 3));

        assert!(matches!(
            validate_amount("total", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_amount("total", "abc").is_err());
        assert!(validate_amount("total", "-1.00").is_err());
    }

    #[test]
    fn test_validate_receipt_accepts_well_formed() {
        assert!(validate_receipt(&valid_receipt()).is_ok());
    }

    #[test]
    fn test_validate_receipt_accepts_free_text_edge_cases() {
        let mut receipt = valid_receipt();
        receipt.retailer = String::new();
        receipt.items[0].short_description = "   ".to_string();
        assert!(validate_receipt(&receipt).is_ok());
    }

    #[test]
    fn test_validate_receipt_reports_first_bad_field() {
        let mut receipt = valid_receipt();
        receipt.items[1].price = "twelve".to_string();
        receipt.total = "oops".to_string();
        assert_eq!(
            field_of(validate_receipt(&receipt).unwrap_err()),
            "items[1].price"
        );

        let mut receipt = valid_receipt();
        receipt.purchase_time = "1:01 PM".to_string();
        assert_eq!(
            field_of(validate_receipt(&receipt).unwrap_err()),
            "purchaseTime"
        );

        let mut receipt = valid_receipt();
        receipt.purchase_date = "2022-13-01".to_string();
        assert_eq!(
            field_of(validate_receipt(&receipt).unwrap_err()),
            "purchaseDate"
        );

        let mut receipt = valid_receipt();
        receipt.purchase_date = "2022-1-1".to_string();
        assert_eq!(
            field_of(validate_receipt(&receipt).unwrap_err()),
            "purchaseDate"
        );

        let mut receipt = valid_receipt();
        receipt.total = String::new();
        assert_eq!(field_of(validate_receipt(&receipt).unwrap_err()), "total");
    }
}
