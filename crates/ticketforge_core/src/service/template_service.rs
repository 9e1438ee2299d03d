//! Template use-case service.
//!
//! # Responsibility
//! - Provide the fill/preview/field-listing flows over stored templates.
//! - Seed new templates with the starter body shown to users.
//!
//! # Invariants
//! - Service APIs never bypass store precondition checks or persistence.
//! - Rendering never mutates stored state.

use crate::fields::{extract_fields, render_filled, render_preview};
use crate::storage::DocumentStorage;
use crate::store::{StoreResult, TemplateStore};
use std::collections::BTreeMap;

/// Starter body seeded into newly created templates.
pub const DEFAULT_TEMPLATE_BODY: &str =
    "Enter your template here.\nUse [field_name] for input fields.";

/// Use-case facade over the template store.
pub struct TemplateService<S: DocumentStorage> {
    store: TemplateStore<S>,
}

impl<S: DocumentStorage> TemplateService<S> {
    /// Creates a service over an already opened store.
    pub fn new(store: TemplateStore<S>) -> Self {
        Self { store }
    }

    /// Opens the store through the given storage backend.
    pub fn open(storage: S) -> StoreResult<Self> {
        Ok(Self::new(TemplateStore::open(storage)?))
    }

    pub fn store(&self) -> &TemplateStore<S> {
        &self.store
    }

    /// Ordered field names referenced by a stored template.
    pub fn template_fields(&self, category: &str, name: &str) -> StoreResult<Vec<String>> {
        let body = self.store.template_body(category, name)?;
        Ok(extract_fields(body))
    }

    /// Renders a stored template with the supplied field values.
    ///
    /// Fields absent from `values` fill as the empty string.
    pub fn fill_template(
        &self,
        category: &str,
        name: &str,
        values: &BTreeMap<String, String>,
    ) -> StoreResult<String> {
        let body = self.store.template_body(category, name)?;
        Ok(render_filled(body, values))
    }

    /// Renders the `<field>` preview form of a stored template.
    pub fn preview_template(&self, category: &str, name: &str) -> StoreResult<String> {
        let body = self.store.template_body(category, name)?;
        Ok(render_preview(body))
    }

    /// Creates a template seeded with the starter body.
    pub fn create_template(&mut self, category: &str, name: &str) -> StoreResult<()> {
        self.store
            .create_template(category, name, DEFAULT_TEMPLATE_BODY)
    }

    /// Creates a template with an explicit body.
    pub fn create_template_with_body(
        &mut self,
        category: &str,
        name: &str,
        body: &str,
    ) -> StoreResult<()> {
        self.store.create_template(category, name, body)
    }

    pub fn create_category(&mut self, name: &str) -> StoreResult<()> {
        self.store.create_category(name)
    }

    pub fn delete_category(&mut self, name: &str) -> StoreResult<()> {
        self.store.delete_category(name)
    }

    pub fn rename_template(
        &mut self,
        category: &str,
        old_name: &str,
        new_name: &str,
    ) -> StoreResult<()> {
        self.store.rename_template(category, old_name, new_name)
    }

    pub fn update_template_body(
        &mut self,
        category: &str,
        name: &str,
        body: &str,
    ) -> StoreResult<()> {
        self.store.update_template_body(category, name, body)
    }

    pub fn delete_template(&mut self, category: &str, name: &str) -> StoreResult<()> {
        self.store.delete_template(category, name)
    }
}
