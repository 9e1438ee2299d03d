//! Template store layer.
//!
//! # Responsibility
//! - Own the live document and every mutation path over it.
//! - Guarantee persistence-on-mutation through the storage seam.
//!
//! # Invariants
//! - Every mutation persists the full document before it becomes visible.
//! - Failed mutations leave both the live and persisted document unchanged.

pub mod template_store;

pub use template_store::{StoreError, StoreResult, TemplateStore};
