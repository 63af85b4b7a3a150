//! Application layer errors.
//!
//! These errors represent failures in orchestration and storage, not naming
//! rules. Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The storage layer could not create or read an entry.
    #[error("Storage error at {path}: {reason}")]
    StorageError { path: String, reason: String },

    /// Create-if-absent found the target already present.
    #[error("{path} already exists")]
    AlreadyExists { path: String },

    /// Storage access failed (lock poisoned, etc.).
    #[error("Storage lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Message recorded in a batch report for a failed create.
    ///
    /// Storage errors carry the path in their `Display`; the report already
    /// names the note, so only the reason is kept.
    pub fn item_message(&self) -> String {
        match self {
            Self::StorageError { reason, .. } => reason.clone(),
            Self::AlreadyExists { .. } => "already exists".into(),
            Self::StoreLockError => self.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StorageError { path, .. } => vec![
                format!("Failed to access: {}", path),
                "Check that you have write permissions".into(),
                "Ensure the target folder exists inside the vault".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("A note already exists at {}", path),
                "Choose a different base name or naming format".into(),
            ],
            Self::StoreLockError => vec![
                "The storage is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StorageError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
        }
    }
}
