//! JSON file storage backend.
//!
//! # Responsibility
//! - Persist the document as one pretty-printed JSON file.
//! - Replace the target file atomically on every save.
//!
//! # Invariants
//! - A missing file loads as `Ok(None)`; any other read failure is an error.
//! - Saves write a sibling temp file first and rename it over the target, so
//!   a crashed save never leaves a truncated document behind.

use super::{DocumentStorage, StorageError, StorageResult};
use crate::model::document::Document;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File-backed document storage.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates storage over the given file path. The file and its parent
    /// directory need not exist yet; the parent is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DocumentStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Option<Document>> {
        let started_at = Instant::now();
        info!("event=document_load module=storage status=start mode=file");

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "event=document_load module=storage status=ok mode=file absent=true duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=document_load module=storage status=error mode=file error_code=read_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(StorageError::Read(err));
            }
        };

        match serde_json::from_str::<Document>(&raw) {
            Ok(document) => {
                info!(
                    "event=document_load module=storage status=ok mode=file categories={} templates={} duration_ms={}",
                    document.category_count(),
                    document.template_count(),
                    started_at.elapsed().as_millis()
                );
                Ok(Some(document))
            }
            Err(err) => {
                error!(
                    "event=document_load module=storage status=error mode=file error_code=malformed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StorageError::Malformed(err))
            }
        }
    }

    fn save(&self, document: &Document) -> StorageResult<()> {
        let started_at = Instant::now();
        info!("event=document_save module=storage status=start mode=file");

        let serialized =
            serde_json::to_string_pretty(document).map_err(StorageError::Serialize)?;

        let result = (|| {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let temp = self.temp_path();
            fs::write(&temp, serialized.as_bytes())?;
            fs::rename(&temp, &self.path)
        })();

        match result {
            Ok(()) => {
                info!(
                    "event=document_save module=storage status=ok mode=file categories={} templates={} duration_ms={}",
                    document.category_count(),
                    document.template_count(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=document_save module=storage status=error mode=file error_code=write_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StorageError::Write(err))
            }
        }
    }
}
