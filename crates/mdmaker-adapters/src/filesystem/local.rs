//! Local vault adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use mdmaker_core::{
    application::{
        ApplicationError,
        ports::{NoteHandle, SEPARATOR, Storage},
    },
    error::{MdMakerError, MdMakerResult},
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Production storage: a directory tree on disk treated as a vault.
///
/// Vault paths are resolved beneath `root`; anything that would climb out
/// of it is refused.
#[derive(Debug, Clone)]
pub struct LocalVault {
    root: PathBuf,
}

impl LocalVault {
    /// Create a vault rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `location` names an existing folder (`/` is always one).
    pub fn is_folder(&self, location: &str) -> bool {
        if is_root(location) {
            return self.root.is_dir();
        }
        self.resolve(location)
            .map(|p| p.is_dir())
            .unwrap_or(false)
    }

    /// Map a vault path to a filesystem path under the root.
    fn resolve(&self, identifier: &str) -> MdMakerResult<PathBuf> {
        let mut path = self.root.clone();
        for segment in identifier.split(SEPARATOR).filter(|s| !s.is_empty()) {
            let escapes = Path::new(segment)
                .components()
                .any(|c| !matches!(c, Component::Normal(_)));
            if escapes {
                return Err(ApplicationError::StorageError {
                    path: identifier.to_string(),
                    reason: "path leaves the vault".into(),
                }
                .into());
            }
            path.push(segment);
        }
        Ok(path)
    }

    /// Vault path for a filesystem path under the root.
    fn to_vault_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(segments.join(&SEPARATOR.to_string()))
    }
}

impl Storage for LocalVault {
    fn exists(&self, identifier: &str) -> bool {
        self.resolve(identifier)
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    #[instrument(skip(self, content))]
    fn create(&self, identifier: &str, content: &str) -> MdMakerResult<NoteHandle> {
        let path = self.resolve(identifier)?;

        // `create_new` makes the existence check and the create one step.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| map_io_error(identifier, e, "create note"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(identifier, e, "write note"))?;

        debug!(path = %path.display(), "Wrote note");
        Ok(identifier.to_string())
    }

    fn list_folders(&self) -> MdMakerResult<Vec<String>> {
        let mut folders = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e.file_name()));

        // One unreadable entry must not hide the rest of the vault.
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable vault entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                if let Some(vault_path) = self.to_vault_path(entry.path()) {
                    folders.push(vault_path);
                }
            }
        }

        folders.sort();
        Ok(folders)
    }
}

fn is_root(location: &str) -> bool {
    location.trim_matches(SEPARATOR).is_empty()
}

/// Dot-folders (`.obsidian`, `.git`, `.trash`) are vault internals.
fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

fn map_io_error(identifier: &str, e: io::Error, operation: &str) -> MdMakerError {
    if e.kind() == io::ErrorKind::AlreadyExists {
        return ApplicationError::AlreadyExists {
            path: identifier.to_string(),
        }
        .into();
    }

    ApplicationError::StorageError {
        path: identifier.to_string(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_writes_empty_note_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let vault = LocalVault::new(dir.path());

        let handle = vault.create("memo.md", "").unwrap();

        assert_eq!(handle, "memo.md");
        assert!(vault.exists("memo.md"));
        assert_eq!(std::fs::read_to_string(dir.path().join("memo.md")).unwrap(), "");
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("memo.md"), "keep me").unwrap();
        let vault = LocalVault::new(dir.path());

        let err = vault.create("memo.md", "").unwrap_err();

        assert!(matches!(
            err,
            MdMakerError::Application(ApplicationError::AlreadyExists { .. })
        ));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("memo.md")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn create_in_missing_folder_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let vault = LocalVault::new(dir.path());

        let err = vault.create("nowhere/memo.md", "").unwrap_err();
        assert!(matches!(
            err,
            MdMakerError::Application(ApplicationError::StorageError { .. })
        ));
    }

    #[test]
    fn parent_segments_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let vault = LocalVault::new(dir.path().join("vault"));
        assert!(vault.create("../escape.md", "").is_err());
        assert!(!vault.exists("../vault"));
    }

    #[test]
    fn list_folders_is_sorted_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        for d in ["b", "a/nested", ".obsidian/plugins"] {
            std::fs::create_dir_all(dir.path().join(d)).unwrap();
        }
        std::fs::write(dir.path().join("a/file.md"), "").unwrap();
        let vault = LocalVault::new(dir.path());

        assert_eq!(vault.list_folders().unwrap(), ["a", "a/nested", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn list_folders_skips_broken_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("projects")).unwrap();
        std::os::unix::fs::symlink("missing-target", dir.path().join("broken")).unwrap();
        let vault = LocalVault::new(dir.path());

        assert_eq!(vault.list_folders().unwrap(), ["projects"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folders_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("linked")).unwrap();
        let vault = LocalVault::new(dir.path());

        assert_eq!(vault.list_folders().unwrap(), ["linked", "real"]);
    }

    #[test]
    fn root_and_nested_folders_are_folders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        let vault = LocalVault::new(dir.path());

        assert!(vault.is_folder("/"));
        assert!(vault.is_folder("a/b"));
        assert!(!vault.is_folder("missing"));
    }
}
