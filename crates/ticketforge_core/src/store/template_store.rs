//! Category/template CRUD with persistence.
//!
//! # Responsibility
//! - Validate mutation preconditions against the live document.
//! - Apply each mutation to a working copy, persist it, then swap it in.
//!
//! # Invariants
//! - The live document always equals the last successfully persisted state
//!   (or the initial default before any mutation has happened).
//! - Mutations are synchronous; the storage write completes before return.
//! - Single-threaded access by contract; callers needing sharing must wrap
//!   the whole store in one mutual-exclusion lock.

use crate::model::document::Document;
use crate::storage::{DocumentStorage, StorageError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic error for template store operations.
#[derive(Debug)]
pub enum StoreError {
    CategoryNotFound(String),
    TemplateNotFound { category: String, name: String },
    DuplicateCategory(String),
    DuplicateTemplate { category: String, name: String },
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryNotFound(name) => write!(f, "category not found: `{name}`"),
            Self::TemplateNotFound { category, name } => {
                write!(f, "template not found: `{name}` in category `{category}`")
            }
            Self::DuplicateCategory(name) => {
                write!(f, "category already exists: `{name}`")
            }
            Self::DuplicateTemplate { category, name } => {
                write!(
                    f,
                    "template already exists: `{name}` in category `{category}`"
                )
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Persistent store for the full Category -> Template -> Body document.
pub struct TemplateStore<S: DocumentStorage> {
    storage: S,
    document: Document,
}

impl<S: DocumentStorage> TemplateStore<S> {
    /// Opens the store, loading the persisted document once.
    ///
    /// Absent storage initializes the default `{"General": {}}` document
    /// without persisting it; the first mutation writes it out.
    pub fn open(storage: S) -> StoreResult<Self> {
        let document = match storage.load()? {
            Some(document) => document,
            None => Document::with_default_category(),
        };
        info!(
            "event=store_open module=store status=ok categories={} templates={}",
            document.category_count(),
            document.template_count()
        );
        Ok(Self { storage, document })
    }

    /// Read-only view of the live document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Persists the live document as-is, replacing prior stored content.
    ///
    /// Mutations persist on their own; this exists for callers that want the
    /// initial default document on disk before any mutation happens.
    pub fn save(&self) -> StoreResult<()> {
        self.storage.save(&self.document)?;
        Ok(())
    }

    /// Category names in listing order.
    pub fn category_names(&self) -> Vec<String> {
        self.document
            .category_names()
            .map(str::to_string)
            .collect()
    }

    /// Template names of one category in listing order.
    pub fn template_names(&self, category: &str) -> StoreResult<Vec<String>> {
        self.document
            .template_names(category)
            .map(|names| names.map(str::to_string).collect())
            .ok_or_else(|| StoreError::CategoryNotFound(category.to_string()))
    }

    /// Looks up one template body.
    pub fn template_body(&self, category: &str, name: &str) -> StoreResult<&str> {
        if !self.document.contains_category(category) {
            return Err(StoreError::CategoryNotFound(category.to_string()));
        }
        self.document
            .template_body(category, name)
            .ok_or_else(|| StoreError::TemplateNotFound {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    /// Creates an empty category.
    pub fn create_category(&mut self, name: &str) -> StoreResult<()> {
        if self.document.contains_category(name) {
            return Err(StoreError::DuplicateCategory(name.to_string()));
        }

        let mut next = self.document.clone();
        next.insert_category(name);
        self.commit(next, "category_create")
    }

    /// Deletes a category and every template inside it.
    pub fn delete_category(&mut self, name: &str) -> StoreResult<()> {
        if !self.document.contains_category(name) {
            return Err(StoreError::CategoryNotFound(name.to_string()));
        }

        let mut next = self.document.clone();
        next.remove_category(name);
        self.commit(next, "category_delete")
    }

    /// Creates a template with the given body.
    pub fn create_template(&mut self, category: &str, name: &str, body: &str) -> StoreResult<()> {
        let templates = self
            .document
            .category(category)
            .ok_or_else(|| StoreError::CategoryNotFound(category.to_string()))?;
        if templates.contains_key(name) {
            return Err(StoreError::DuplicateTemplate {
                category: category.to_string(),
                name: name.to_string(),
            });
        }

        let mut next = self.document.clone();
        if let Some(templates) = next.category_mut(category) {
            templates.insert(name.to_string(), body.to_string());
        }
        self.commit(next, "template_create")
    }

    /// Moves a template body under a new name within its category.
    pub fn rename_template(
        &mut self,
        category: &str,
        old_name: &str,
        new_name: &str,
    ) -> StoreResult<()> {
        let templates = self
            .document
            .category(category)
            .ok_or_else(|| StoreError::CategoryNotFound(category.to_string()))?;
        if !templates.contains_key(old_name) {
            return Err(StoreError::TemplateNotFound {
                category: category.to_string(),
                name: old_name.to_string(),
            });
        }
        // Renaming onto a taken name, including the unchanged name, is a
        // duplicate; the caller is expected to pick a genuinely new name.
        if templates.contains_key(new_name) {
            return Err(StoreError::DuplicateTemplate {
                category: category.to_string(),
                name: new_name.to_string(),
            });
        }

        let mut next = self.document.clone();
        if let Some(templates) = next.category_mut(category) {
            if let Some(body) = templates.remove(old_name) {
                templates.insert(new_name.to_string(), body);
            }
        }
        self.commit(next, "template_rename")
    }

    /// Replaces a template body in full.
    pub fn update_template_body(
        &mut self,
        category: &str,
        name: &str,
        body: &str,
    ) -> StoreResult<()> {
        self.template_body(category, name)?;

        let mut next = self.document.clone();
        if let Some(templates) = next.category_mut(category) {
            templates.insert(name.to_string(), body.to_string());
        }
        self.commit(next, "template_update")
    }

    /// Deletes one template.
    pub fn delete_template(&mut self, category: &str, name: &str) -> StoreResult<()> {
        self.template_body(category, name)?;

        let mut next = self.document.clone();
        if let Some(templates) = next.category_mut(category) {
            templates.remove(name);
        }
        self.commit(next, "template_delete")
    }

    /// Persists the working copy, then makes it the live document.
    ///
    /// On a storage error the live document is untouched, so in-memory and
    /// persisted state never diverge.
    fn commit(&mut self, next: Document, event: &str) -> StoreResult<()> {
        self.storage.save(&next)?;
        self.document = next;
        info!(
            "event={event} module=store status=ok categories={} templates={}",
            self.document.category_count(),
            self.document.template_count()
        );
        Ok(())
    }
}
