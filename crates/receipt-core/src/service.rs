//! # Receipt Service
//!
//! The two operations the transport layer calls: Submit and Redeem.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit(receipt)                                                        │
//! │    │                                                                    │
//! │    ├── ParsePolicy::Strict? ──► validate_receipt ──► Err(Validation)    │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  registry.submit ──► ReceiptId                                          │
//! │                                                                         │
//! │  redeem(id)                                                             │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  registry.lookup ──► Err(ReceiptNotFound)                               │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  scoring::score ──► points                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Points are recomputed on every redemption; nothing about a score is cached,
//! so redeeming the same id twice always yields the same result.

use tracing::debug;

use crate::error::CoreResult;
use crate::registry::ReceiptRegistry;
use crate::scoring;
use crate::types::{Receipt, ReceiptId};
use crate::validation::validate_receipt;

// =============================================================================
// Parse Policy
// =============================================================================

/// How malformed `total`, `price`, `purchaseDate` and `purchaseTime` values
/// are treated on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Accept the receipt; each affected rule falls back to zero / no bonus.
    #[default]
    Lenient,
    /// Reject the whole receipt, naming the first field that fails to parse.
    Strict,
}

// =============================================================================
// Service
// =============================================================================

/// Submit / Redeem over an owned [`ReceiptRegistry`].
pub struct ReceiptService {
    registry: ReceiptRegistry,
    policy: ParsePolicy,
}

impl ReceiptService {
    /// Creates a service with an empty registry.
    pub fn new(policy: ParsePolicy) -> Self {
        Self::with_registry(ReceiptRegistry::new(), policy)
    }

    /// Creates a service over an existing registry.
    pub fn with_registry(registry: ReceiptRegistry, policy: ParsePolicy) -> Self {
        ReceiptService { registry, policy }
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    pub fn registry(&self) -> &ReceiptRegistry {
        &self.registry
    }

    /// Stores the receipt and returns its new identifier.
    ///
    /// Under [`ParsePolicy::Strict`] a receipt with an unparseable field is
    /// rejected and the registry is left untouched.
    pub fn submit(&self, receipt: Receipt) -> CoreResult<ReceiptId> {
        if self.policy == ParsePolicy::Strict {
            validate_receipt(&receipt)?;
        }

        let items = receipt.items.len();
        let id = self.registry.submit(receipt);
        debug!(id = %id, items, "Receipt submitted");
        Ok(id)
    }

    /// Scores the receipt stored under `id`.
    pub fn redeem(&self, id: &str) -> CoreResult<u64> {
        let receipt = self.registry.lookup(id)?;
        Ok(scoring::score(&receipt))
    }
}

impl Default for ReceiptService {
    fn default() -> Self {
        Self::new(ParsePolicy::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
