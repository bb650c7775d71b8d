//! # Identifier Allocation
//!
//! Produces receipt identifiers that are not yet in use.
//!
//! ## Allocation Loop
//! ```text
//! generate() ──► is_allocated(id)? ──yes──► generate() again
//!                       │
//!                       no
//!                       ▼
//!                   return id   (caller inserts it under the same lock)
//! ```
//!
//! The allocator never reserves anything itself. [`crate::registry`] calls it
//! while holding its lock, which is what makes check-then-insert atomic.

use tracing::debug;
use uuid::Uuid;

use crate::types::ReceiptId;

// =============================================================================
// Generator Seam
// =============================================================================

/// Source of candidate identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh candidate. It may collide; [`allocate`] handles that.
    fn generate(&self) -> ReceiptId;
}

/// Random 128-bit identifiers (UUID v4).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> ReceiptId {
        ReceiptId::from(Uuid::new_v4())
    }
}

// =============================================================================
// Allocation
// =============================================================================

/// Returns an identifier for which `is_allocated` is false.
///
/// Regenerates on every collision.
pub fn allocate<G, F>(generator: &G, is_allocated: F) -> ReceiptId
where
    G: IdGenerator + ?Sized,
    F: Fn(&ReceiptId) -> bool,
{
    let mut candidate = generator.generate();
    while is_allocated(&candidate) {
        debug!(id = %candidate, "Receipt id collision, regenerating");
        candidate = generator.generate();
    }
    candidate
}

// =============================================================================
// Unit Tests
// =============================================================================
