//! Template document model.
//!
//! # Responsibility
//! - Hold the full Category -> Template -> Body mapping in memory.
//! - Provide existence-checked accessors for store and service layers.
//!
//! # Invariants
//! - Serialized form is exactly `{ "<Category>": { "<Template>": "<body>" } }`.
//! - Listing order is sorted by name (lexicographic map order).
//! - The model never inspects or validates template bodies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category name seeded into every fresh document.
pub const DEFAULT_CATEGORY: &str = "General";

/// A named grouping of templates: template name -> raw body.
pub type Category = BTreeMap<String, String>;

/// The full persisted template structure.
///
/// Kept serde-transparent so the wire shape is the bare nested mapping with
/// no wrapper object, and any structurally equal serialization round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    categories: BTreeMap<String, Category>,
}

impl Document {
    /// Creates an empty document with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the initial document used when no storage exists yet:
    /// one empty `General` category.
    pub fn with_default_category() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(DEFAULT_CATEGORY.to_string(), Category::new());
        Self { categories }
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.get_mut(name)
    }

    /// Inserts an empty category. Returns `false` when the name is taken.
    pub fn insert_category(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.categories.contains_key(&name) {
            return false;
        }
        self.categories.insert(name, Category::new());
        true
    }

    /// Removes a category and all templates inside it.
    pub fn remove_category(&mut self, name: &str) -> Option<Category> {
        self.categories.remove(name)
    }

    /// Looks up one template body.
    pub fn template_body(&self, category: &str, name: &str) -> Option<&str> {
        self.categories
            .get(category)?
            .get(name)
            .map(String::as_str)
    }

    /// Category names in listing order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Template names of one category in listing order.
    pub fn template_names(&self, category: &str) -> Option<impl Iterator<Item = &str>> {
        self.categories
            .get(category)
            .map(|templates| templates.keys().map(String::as_str))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total template count across all categories.
    pub fn template_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
