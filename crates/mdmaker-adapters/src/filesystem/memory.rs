//! In-memory vault adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, RwLock},
};

use mdmaker_core::{
    application::{
        ApplicationError,
        ports::{NoteHandle, SEPARATOR, Storage},
    },
    error::MdMakerResult,
};

/// In-memory vault for testing.
///
/// Clones share the same contents, so a test can hand one clone to a
/// service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    inner: Arc<RwLock<MemoryVaultInner>>,
}

#[derive(Debug, Default)]
struct MemoryVaultInner {
    notes: BTreeMap<String, String>,
    folders: BTreeSet<String>,
}

impl MemoryVault {
    /// Create a new empty vault containing only the root folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder and all of its ancestors (testing helper).
    pub fn add_folder(&self, path: &str) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        let mut current = String::new();
        for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push(SEPARATOR);
            }
            current.push_str(segment);
            inner.folders.insert(current.clone());
        }
    }

    /// Seed a note, bypassing create-if-absent (testing helper).
    pub fn add_note(&self, path: &str, content: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.notes.insert(key(path).to_string(), content.to_string());
        }
    }

    /// Read a note's content (testing helper).
    pub fn read_note(&self, path: &str) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.notes.get(key(path)).cloned()
    }

    /// All note paths, sorted.
    pub fn list_notes(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.notes.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.notes.clear();
            inner.folders.clear();
        }
    }
}

impl Storage for MemoryVault {
    fn exists(&self, identifier: &str) -> bool {
        let identifier = key(identifier);
        self.inner
            .read()
            .map(|inner| {
                inner.notes.contains_key(identifier) || inner.folders.contains(identifier)
            })
            .unwrap_or(false)
    }

    fn create(&self, identifier: &str, content: &str) -> MdMakerResult<NoteHandle> {
        // Check and insert under one write lock: create-if-absent.
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let stored = key(identifier);

        if inner.notes.contains_key(stored) || inner.folders.contains(stored) {
            return Err(ApplicationError::AlreadyExists {
                path: identifier.to_string(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some((parent, _)) = stored.rsplit_once(SEPARATOR) {
            if !parent.is_empty() && !inner.folders.contains(parent) {
                return Err(ApplicationError::StorageError {
                    path: identifier.to_string(),
                    reason: "Parent folder does not exist".into(),
                }
                .into());
            }
        }

        inner.notes.insert(stored.to_string(), content.to_string());
        Ok(identifier.to_string())
    }

    fn list_folders(&self) -> MdMakerResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.folders.iter().cloned().collect())
    }
}

/// Stored paths carry no leading separator, matching `LocalVault::resolve`.
fn key(identifier: &str) -> &str {
    identifier.trim_start_matches(SEPARATOR)
}
