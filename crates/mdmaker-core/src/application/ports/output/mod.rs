//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mdmaker-adapters` crate provides implementations.

use crate::domain::ROOT_LOCATION;
use crate::error::MdMakerResult;

/// Separator between vault path segments.
pub const SEPARATOR: char = '/';

/// Vault path of a note that was just created.
pub type NoteHandle = String;

/// Port for note storage.
///
/// Identifiers are vault paths: `/`-separated, relative to the vault root,
/// with no leading separator (`memo.md`, `daily/memo.md`).
///
/// Implemented by:
/// - `mdmaker_adapters::filesystem::LocalVault` (production)
/// - `mdmaker_adapters::filesystem::MemoryVault` (testing)
///
/// ## Design Notes
///
/// - `create` is create-if-absent: it must fail with
///   `ApplicationError::AlreadyExists` rather than overwrite, so a writer
///   racing between `exists` and `create` cannot clobber a note.
/// - Synchronous; one batch runs against a vault at a time.
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send + Sync {
    /// Whether anything (note or folder) exists at `identifier`.
    fn exists(&self, identifier: &str) -> bool;

    /// Create a note at `identifier` with `content`, failing if it exists.
    fn create(&self, identifier: &str, content: &str) -> MdMakerResult<NoteHandle>;

    /// Every folder in the vault, sorted by path, root excluded.
    fn list_folders(&self) -> MdMakerResult<Vec<String>>;

    /// Join a folder location and a note name.
    ///
    /// The root contributes no separator; any other folder joins with exactly
    /// one.
    fn join_path(&self, location: &str, name: &str) -> String {
        join_vault_path(location, name)
    }
}

/// Default path-joining rule shared by all vault adapters.
pub fn join_vault_path(location: &str, name: &str) -> String {
    let location = location.trim_end_matches(SEPARATOR);
    if location.is_empty() || location == ROOT_LOCATION {
        name.to_string()
    } else {
        format!("{location}{SEPARATOR}{name}")
    }
}
