//! # Receipt Registry
//!
//! In-memory store mapping identifiers to submitted receipts.
//!
//! ## Thread Safety
//! The map is wrapped in a single `Mutex` because:
//! 1. Submissions and redemptions arrive from concurrent request handlers
//! 2. Allocating an id and inserting under it must be one atomic step
//! 3. Every critical section is a single map operation, so no lock is held
//!    across an `.await` or any I/O
//!
//! ## Lifecycle
//! ```text
//! submit(receipt) ──► allocate id ──► insert ──► (read any number of times)
//!                     └────── one lock ──────┘
//! ```
//! Entries are never updated or removed; the dataset only grows for the
//! lifetime of the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::id::{allocate, IdGenerator, UuidV4Generator};
use crate::types::{Receipt, ReceiptId};

/// Owned registry of receipts, shared by reference between handlers.
pub struct ReceiptRegistry {
    receipts: Mutex<HashMap<ReceiptId, Receipt>>,
    generator: Arc<dyn IdGenerator>,
}

impl ReceiptRegistry {
    /// Creates an empty registry that allocates UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_generator(Arc::new(UuidV4Generator))
    }

    /// Creates an empty registry with a custom identifier source.
    pub fn with_generator(generator: Arc<dyn IdGenerator>) -> Self {
        ReceiptRegistry {
            receipts: Mutex::new(HashMap::new()),
            generator,
        }
    }

    /// Allocates a fresh identifier and stores the receipt under it.
    ///
    /// The uniqueness check and the insert happen under the same lock, so two
    /// concurrent submissions can never end up sharing an identifier.
    pub fn submit(&self, receipt: Receipt) -> ReceiptId {
        let mut receipts = self.lock();
        let id = allocate(self.generator.as_ref(), |candidate| {
            receipts.contains_key(candidate)
        });
        receipts.insert(id.clone(), receipt);
        debug!(id = %id, stored = receipts.len(), "Receipt registered");
        id
    }

    /// Stores a receipt under `id`, silently replacing any previous entry.
    pub fn insert(&self, id: ReceiptId, receipt: Receipt) {
        self.lock().insert(id, receipt);
    }

    /// Returns a copy of the receipt stored under `id`.
    pub fn lookup(&self, id: &str) -> CoreResult<Receipt> {
        self.lock()
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::ReceiptNotFound(id.to_string()))
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written entry, so
    // the map is still consistent after poisoning.
    fn lock(&self) -> MutexGuard<'_, HashMap<ReceiptId, Receipt>> {
        self.receipts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ReceiptRegistry {
    fn default() -> Self {
        Self::new()
    }
}
