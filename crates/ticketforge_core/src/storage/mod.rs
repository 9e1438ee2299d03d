//! Document persistence seam.
//!
//! # Responsibility
//! - Define the storage contract used by the template store.
//! - Isolate file-format and I/O details from CRUD orchestration.
//!
//! # Invariants
//! - `load` distinguishes "storage absent" (`Ok(None)`) from unreadable or
//!   malformed storage (an error); absence is a defined default path, never
//!   silently conflated with corruption.
//! - `save` replaces the whole persisted document; there are no partial
//!   writes visible to a later `load`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::model::document::Document;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence failure for document load/save operations.
#[derive(Debug)]
pub enum StorageError {
    /// Backing storage exists but could not be read.
    Read(std::io::Error),
    /// Persisted document is not valid JSON of the expected shape.
    Malformed(serde_json::Error),
    /// Document could not be serialized.
    Serialize(serde_json::Error),
    /// Serialized document could not be written out.
    Write(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read stored document: {err}"),
            Self::Malformed(err) => write!(f, "stored document is malformed: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize document: {err}"),
            Self::Write(err) => write!(f, "failed to write document: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) | Self::Write(err) => Some(err),
            Self::Malformed(err) | Self::Serialize(err) => Some(err),
        }
    }
}

/// Storage contract for the full template document.
pub trait DocumentStorage {
    /// Loads the persisted document, or `Ok(None)` when storage is absent.
    fn load(&self) -> StorageResult<Option<Document>>;

    /// Persists the full document, replacing prior content entirely.
    fn save(&self, document: &Document) -> StorageResult<()>;
}

// Lets a store borrow a backend the caller keeps a handle to.
impl<S: DocumentStorage> DocumentStorage for &S {
    fn load(&self) -> StorageResult<Option<Document>> {
        (**self).load()
    }

    fn save(&self, document: &Document) -> StorageResult<()> {
        (**self).save(document)
    }
}
