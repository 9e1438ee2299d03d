//! Core domain logic for TicketForge.
//! This crate is the single source of truth for template business invariants.

pub mod fields;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use fields::{extract_fields, render_filled, render_preview};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Category, Document, DEFAULT_CATEGORY};
pub use service::{TemplateService, DEFAULT_TEMPLATE_BODY};
pub use storage::{DocumentStorage, JsonFileStorage, MemoryStorage, StorageError, StorageResult};
pub use store::{StoreError, StoreResult, TemplateStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
