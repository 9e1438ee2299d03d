//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store lookups and rendering into use-case level APIs.
//! - Keep the consuming UI layer decoupled from store and format details.

pub mod template_service;

pub use template_service::{TemplateService, DEFAULT_TEMPLATE_BODY};
