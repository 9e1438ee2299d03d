//! Template field extraction and rendering.
//!
//! # Responsibility
//! - Scan template bodies for `[field_name]` markers.
//! - Render filled and preview forms of a template body.
//!
//! # Invariants
//! - All functions here are pure and never error or panic.
//! - Bracket pairing is non-nesting: the next `[` pairs with the next `]`
//!   strictly after it, whatever the text between them contains.

pub mod extract;
pub mod render;

pub use extract::extract_fields;
pub use render::{render_filled, render_preview};
