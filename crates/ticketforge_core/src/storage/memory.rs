//! In-memory storage backend.
//!
//! # Responsibility
//! - Provide a file-free `DocumentStorage` for tests and smoke probes.
//!
//! # Invariants
//! - Behaves like a fresh, absent file until the first save.
//! - Single-threaded by contract, matching the store's access model.

use super::{DocumentStorage, StorageResult};
use crate::model::document::Document;
use std::cell::RefCell;

/// Document storage holding the persisted state in memory.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<Document>>,
}

impl MemoryStorage {
    /// Creates empty storage, equivalent to a not-yet-created file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with a persisted document.
    pub fn with_document(document: Document) -> Self {
        Self {
            slot: RefCell::new(Some(document)),
        }
    }

    /// Returns the last persisted document, if any save has happened.
    pub fn persisted(&self) -> Option<Document> {
        self.slot.borrow().clone()
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Document>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, document: &Document) -> StorageResult<()> {
        *self.slot.borrow_mut() = Some(document.clone());
        Ok(())
    }
}
