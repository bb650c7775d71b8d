//! # Receipt API
//!
//! HTTP adapter that exposes Submit and Redeem from `receipt-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Surface                             │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────────┐  ┌───────────────┐ │
//! │  │  POST                │  │  GET                 │  │  GET          │ │
//! │  │  /receipts/process   │  │  /receipts/{id}/     │  │  /health      │ │
//! │  │                      │  │        points        │  │               │ │
//! │  │  JSON receipt ──►    │  │  id ──► {"points"}   │  │  "OK"         │ │
//! │  │  {"id"}              │  │  unknown ──► 404     │  │               │ │
//! │  └──────────┬───────────┘  └──────────┬───────────┘  └───────────────┘ │
//! │             │                         │                                 │
//! │  ┌──────────▼─────────────────────────▼─────────────────────────────┐  │
//! │  │                Arc<ReceiptService> (axum State)                   │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_API_STRICT_VALIDATION` - Reject unparseable fields (default: false)
//! - `RECEIPT_API_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! - `RECEIPT_API_MAX_BODY_BYTES` - Request body limit (default: 1 MiB)

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use routes::router;
