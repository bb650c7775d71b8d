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
//! │  │    ReceiptId    │   │     Receipt     │   │      Item       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  UUID v4 text   │──►│  retailer       │   │  short_desc     │       │
//! │  │  (opaque)       │   │  purchase_date  │   │  price (text)   │       │
//! │  └─────────────────┘   │  purchase_time  │   └─────────────────┘       │
//! │                        │  items ─────────┼──────────►  Vec<Item>       │
//! │                        │  total (text)   │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text Amounts
//! `total` and `price` stay as the strings the client sent. They are parsed
//! into a [`Decimal`] only when scored (or when strict validation is on), so
//! by default a malformed amount never prevents a receipt from being stored.

use std::borrow::Borrow;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MoneyParseError, PurchaseDateError};
use crate::money::parse_amount;

/// Wire format of `purchaseDate`.
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` is always ten bytes; chrono alone would accept `2022-1-1`.
const PURCHASE_DATE_LEN: usize = 10;

/// Wire format of `purchaseTime`.
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier handed back on submission.
///
/// Wraps the canonical hyphenated form of a UUID so it can be compared
/// directly against the path segment a client sends on redemption.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for ReceiptId {
    fn from(uuid: Uuid) -> Self {
        ReceiptId(uuid.hyphenated().to_string())
    }
}

impl From<ReceiptId> for String {
    fn from(id: ReceiptId) -> Self {
        id.0
    }
}

impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-form description; trimmed before its length is scored.
    pub short_description: String,

    /// Price as sent by the client, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    /// Parses the price text at full precision.
    pub fn parse_price(&self) -> Result<Decimal, MoneyParseError> {
        parse_amount(&self.price)
    }

    /// Length of the description after trimming surrounding whitespace,
    /// counted in UTF-8 bytes.
    pub fn trimmed_description_len(&self) -> usize {
        self.short_description.trim().len()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase submission.
///
/// All fields are required on the wire. Item order is preserved exactly as
/// submitted even though no rule depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name, free-form.
    pub retailer: String,

    /// `YYYY-MM-DD`.
    pub purchase_date: String,

    /// 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Purchased lines in submission order.
    pub items: Vec<Item>,

    /// Receipt total as sent by the client, e.g. `"35.35"`.
    pub total: String,
}

impl Receipt {
    /// Parses the total text at full precision.
    pub fn parse_total(&self) -> Result<Decimal, MoneyParseError> {
        parse_amount(&self.total)
    }

    /// Parses `purchaseDate` as `YYYY-MM-DD` with a zero-padded month and day.
    pub fn parse_purchase_date(&self) -> Result<NaiveDate, PurchaseDateError> {
        let text = self.purchase_date.as_str();
        let padded = text.len() == PURCHASE_DATE_LEN
            && text.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !padded {
            return Err(PurchaseDateError::Layout);
        }
        Ok(NaiveDate::parse_from_str(text, PURCHASE_DATE_FORMAT)?)
    }

    /// Parses `purchaseTime` as 24-hour `HH:MM`.
    pub fn parse_purchase_time(&self) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(&self.purchase_time, PURCHASE_TIME_FORMAT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
