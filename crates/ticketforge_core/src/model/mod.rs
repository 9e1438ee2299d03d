//! Domain model for the template document.
//!
//! # Responsibility
//! - Define the canonical Category -> Template -> Body structure.
//! - Keep the in-memory shape identical to the persisted JSON shape.
//!
//! # Invariants
//! - Category names are unique within a document; template names are unique
//!   within a category (enforced by the map keys themselves).
//! - A template body is an arbitrary string; bracket balance is never
//!   validated at the model layer.

pub mod document;
