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
//! │  ├── CoreError        - Submit / Redeem failures                       │
//! │  ├── ValidationError  - Strict-mode field rejections                   │
//! │  ├── MoneyParseError  - Why an amount string is not a decimal          │
//! │  └── PurchaseDateError - Why purchaseDate is not a calendar date       │
//! │                                                                         │
//! │  receipt-api errors (separate crate)                                   │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)      │
//! │                                                                         │
//! │  Flow: field parse error → ValidationError → CoreError → ApiError     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parse failures are NOT errors while scoring: each rule falls back to a
//! neutral value instead. They only surface as errors when the service runs
//! with strict validation enabled.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the receipt service operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No receipt was ever registered under this identifier.
    ///
    /// ## When This Occurs
    /// - Redeeming an identifier that was never returned by Submit
    /// - Redeeming after a process restart (the registry is in-memory)
    #[error("No receipt found for id: {0}")]
    ReceiptNotFound(String),

    /// Receipt rejected by strict validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced when strict validation is enabled; the default lenient
/// policy scores malformed fields as zero instead.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., unparseable amount, date or time).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Field Parse Errors
// =============================================================================

/// Reasons an amount string cannot be read as a decimal.
#[derive(Debug, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount: {0}")]
    Invalid(#[from] rust_decimal::Error),
}

/// Reasons `purchaseDate` cannot be read as a calendar date.
#[derive(Debug, Error)]
pub enum PurchaseDateError {
    /// Not exactly `YYYY-MM-DD` with a zero-padded month and day.
    #[error("expected YYYY-MM-DD")]
    Layout,

    /// Right shape, but not a real date (e.g. `2022-02-31`).
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
