//! Unified error handling for mdmaker Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for mdmaker Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MdMakerError {
    /// Errors from the domain layer (invalid requests).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (storage failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl MdMakerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether this is a malformed request rather than a runtime failure.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidConfiguration { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type MdMakerResult<T> = Result<T, MdMakerError>;
