use std::cell::Cell;
use std::collections::BTreeMap;

use ticketforge_core::{
    Document, DocumentStorage, MemoryStorage, StorageError, StorageResult, StoreError,
    TemplateStore, DEFAULT_CATEGORY,
};

fn open_empty_store() -> TemplateStore<MemoryStorage> {
    TemplateStore::open(MemoryStorage::new()).unwrap()
}

#[test]
fn absent_storage_initializes_default_document() {
    let store = open_empty_store();

    assert_eq!(store.category_names(), vec![DEFAULT_CATEGORY.to_string()]);
    assert!(store.template_names(DEFAULT_CATEGORY).unwrap().is_empty());
}

#[test]
fn default_document_is_not_persisted_before_first_mutation() {
    let storage = MemoryStorage::new();
    {
        let _store = TemplateStore::open(&storage).unwrap();
    }
    assert!(storage.persisted().is_none());
}

#[test]
fn explicit_save_persists_the_default_document() {
    let storage = MemoryStorage::new();
    let store = TemplateStore::open(&storage).unwrap();

    store.save().unwrap();

    assert_eq!(
        storage.persisted(),
        Some(Document::with_default_category())
    );
}

#[test]
fn first_mutation_persists_the_full_document() {
    let storage = MemoryStorage::new();
    let mut store = TemplateStore::open(&storage).unwrap();

    store.create_category("Support").unwrap();

    let persisted = storage.persisted().expect("mutation should persist");
    assert!(persisted.contains_category("Support"));
    assert!(persisted.contains_category(DEFAULT_CATEGORY));
}

#[test]
fn create_category_rejects_duplicates_and_leaves_state_unchanged() {
    let mut store = open_empty_store();

    let err = store.create_category(DEFAULT_CATEGORY).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateCategory(name) if name == DEFAULT_CATEGORY));
    assert_eq!(store.document(), &Document::with_default_category());
}

#[test]
fn delete_category_removes_all_its_templates() {
    let mut store = open_empty_store();
    store.create_category("Support").unwrap();
    store.create_template("Support", "greeting", "Hi [name]").unwrap();
    store.create_template("Support", "closing", "Bye").unwrap();

    store.delete_category("Support").unwrap();

    assert!(matches!(
        store.template_names("Support"),
        Err(StoreError::CategoryNotFound(_))
    ));
    assert_eq!(store.category_names(), vec![DEFAULT_CATEGORY.to_string()]);
}

#[test]
fn delete_missing_category_reports_not_found() {
    let mut store = open_empty_store();

    let err = store.delete_category("Nope").unwrap_err();
    assert!(matches!(err, StoreError::CategoryNotFound(name) if name == "Nope"));
}

#[test]
fn create_template_requires_an_existing_category() {
    let mut store = open_empty_store();

    let err = store.create_template("Nope", "greeting", "Hi").unwrap_err();
    assert!(matches!(err, StoreError::CategoryNotFound(_)));
}

#[test]
fn create_template_rejects_duplicate_names_within_a_category() {
    let mut store = open_empty_store();
    store
        .create_template(DEFAULT_CATEGORY, "greeting", "Hi [name]")
        .unwrap();

    let err = store
        .create_template(DEFAULT_CATEGORY, "greeting", "other")
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTemplate { .. }));
    assert_eq!(
        store.template_body(DEFAULT_CATEGORY, "greeting").unwrap(),
        "Hi [name]"
    );
}

#[test]
fn create_then_delete_restores_the_prior_document() {
    let mut store = open_empty_store();
    let before = store.document().clone();

    store
        .create_template(DEFAULT_CATEGORY, "greeting", "Hi [name]")
        .unwrap();
    store.delete_template(DEFAULT_CATEGORY, "greeting").unwrap();

    assert_eq!(store.document(), &before);
}

#[test]
fn rename_template_moves_the_body_under_the_new_name() {
    let mut store = open_empty_store();
    store
        .create_template(DEFAULT_CATEGORY, "old", "body text")
        .unwrap();

    store.rename_template(DEFAULT_CATEGORY, "old", "new").unwrap();

    assert_eq!(store.template_body(DEFAULT_CATEGORY, "new").unwrap(), "body text");
    assert!(matches!(
        store.template_body(DEFAULT_CATEGORY, "old"),
        Err(StoreError::TemplateNotFound { .. })
    ));
}

#[test]
fn rename_template_rejects_taken_target_names() {
    let mut store = open_empty_store();
    store.create_template(DEFAULT_CATEGORY, "a", "one").unwrap();
    store.create_template(DEFAULT_CATEGORY, "b", "two").unwrap();

    let err = store.rename_template(DEFAULT_CATEGORY, "a", "b").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTemplate { .. }));
    assert_eq!(store.template_body(DEFAULT_CATEGORY, "a").unwrap(), "one");
    assert_eq!(store.template_body(DEFAULT_CATEGORY, "b").unwrap(), "two");
}

#[test]
fn rename_missing_template_reports_not_found() {
    let mut store = open_empty_store();

    let err = store
        .rename_template(DEFAULT_CATEGORY, "missing", "new")
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::TemplateNotFound { name, .. } if name == "missing"
    ));
}

#[test]
fn update_template_body_replaces_content_in_full() {
    let mut store = open_empty_store();
    store.create_template(DEFAULT_CATEGORY, "greeting", "draft").unwrap();

    store
        .update_template_body(DEFAULT_CATEGORY, "greeting", "Hello [name]")
        .unwrap();

    assert_eq!(
        store.template_body(DEFAULT_CATEGORY, "greeting").unwrap(),
        "Hello [name]"
    );
}

#[test]
fn update_missing_template_reports_not_found() {
    let mut store = open_empty_store();

    let err = store
        .update_template_body(DEFAULT_CATEGORY, "missing", "body")
        .unwrap_err();
    assert!(matches!(err, StoreError::TemplateNotFound { .. }));
}

/// Storage that can be switched to fail every save, for write-error paths.
struct FlakyStorage {
    inner: MemoryStorage,
    fail_saves: Cell<bool>,
}

impl FlakyStorage {
    fn new() -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_saves: Cell::new(false),
        }
    }
}

impl DocumentStorage for FlakyStorage {
    fn load(&self) -> StorageResult<Option<Document>> {
        self.inner.load()
    }

    fn save(&self, document: &Document) -> StorageResult<()> {
        if self.fail_saves.get() {
            return Err(StorageError::Write(std::io::Error::other("disk full")));
        }
        self.inner.save(document)
    }
}

#[test]
fn failed_save_leaves_live_and_persisted_state_unchanged() {
    let storage = FlakyStorage::new();
    let mut store = TemplateStore::open(&storage).unwrap();
    store.create_category("Support").unwrap();
    let before = store.document().clone();

    storage.fail_saves.set(true);
    let err = store
        .create_template("Support", "greeting", "Hi [name]")
        .unwrap_err();

    assert!(matches!(err, StoreError::Storage(StorageError::Write(_))));
    assert_eq!(store.document(), &before);
    assert_eq!(storage.inner.persisted().as_ref(), Some(&before));

    // The store recovers once storage is healthy again.
    storage.fail_saves.set(false);
    store.create_template("Support", "greeting", "Hi [name]").unwrap();
    assert_eq!(
        store.template_body("Support", "greeting").unwrap(),
        "Hi [name]"
    );
}

#[test]
fn preseeded_storage_loads_as_the_live_document() {
    let mut document = Document::new();
    document.insert_category("Ops");
    let storage = MemoryStorage::with_document(document.clone());

    let store = TemplateStore::open(storage).unwrap();

    assert_eq!(store.document(), &document);
    assert!(!store.document().contains_category(DEFAULT_CATEGORY));
}

#[test]
fn fill_values_map_is_plain_string_to_string() {
    // Collaborator-facing shape check: values come from the UI as a plain
    // name -> value mapping.
    let mut values = BTreeMap::new();
    values.insert("name".to_string(), "Ada".to_string());
    assert_eq!(
        ticketforge_core::render_filled("Hi [name]!", &values),
        "Hi Ada!"
    );
}
