//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! Clients submit a purchase receipt and get back an identifier; later they
//! redeem that identifier for a points score computed from fixed rules over
//! the receipt's fields. This crate holds everything except the transport.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-api (axum HTTP adapter)                 │   │
//! │  │     POST /receipts/process      GET /receipts/{id}/points       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  service  │  │  registry │  │  scoring  │  │ validation│  │   │
//! │  │   │  Submit   │─►│  Mutex<   │  │  7 rules  │  │  strict   │  │   │
//! │  │   │  Redeem   │  │  HashMap> │  │  pure fn  │  │  policy   │  │   │
//! │  │   └───────────┘  └─────┬─────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ▼                                       │   │
//! │  │                  ┌───────────┐  ┌───────────┐                  │   │
//! │  │                  │    id     │  │   money   │                  │   │
//! │  │                  │  UUID v4  │  │  decimal  │                  │   │
//! │  │                  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PROCESS-WIDE STATE                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt, Item, ReceiptId
//! - [`money`] - Exact decimal amounts (no floating point!)
//! - [`error`] - Domain error types
//! - [`id`] - Identifier allocation
//! - [`registry`] - In-memory receipt store
//! - [`scoring`] - Points rules
//! - [`validation`] - Strict-mode field validation
//! - [`service`] - Submit / Redeem
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{Item, ParsePolicy, Receipt, ReceiptService};
//!
//! let service = ReceiptService::new(ParsePolicy::Lenient);
//! let id = service
//!     .submit(Receipt {
//!         retailer: "Target".to_string(),
//!         purchase_date: "2022-01-01".to_string(),
//!         purchase_time: "13:01".to_string(),
//!         items: vec![Item {
//!             short_description: "Mountain Dew 12PK".to_string(),
//!             price: "6.49".to_string(),
//!         }],
//!         total: "6.49".to_string(),
//!     })
//!     .unwrap();
//!
//! // 6 (retailer) + 6 (odd day)
//! assert_eq!(service.redeem(id.as_str()).unwrap(), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod money;
pub mod registry;
pub mod scoring;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, MoneyParseError, PurchaseDateError, ValidationError};
pub use id::{IdGenerator, UuidV4Generator};
pub use rust_decimal::Decimal;
pub use registry::ReceiptRegistry;
pub use scoring::PointsBreakdown;
pub use service::{ParsePolicy, ReceiptService};
pub use types::*;
