// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A batch request or one of its parts is structurally invalid.
    ///
    /// Raised before any storage interaction; the batch is not attempted.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

impl DomainError {
    /// Shorthand for building an [`DomainError::InvalidConfiguration`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// The request field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { field, .. } => field,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration { field, reason } => {
                let mut out = vec![format!("'{}' is invalid: {}", field, reason)];
                match *field {
                    "count" => out.push(format!(
                        "Use a whole number between 1 and {}",
                        crate::domain::MAX_COUNT
                    )),
                    "pad_width" => {
                        out.push("Use 0 for no padding, or a positive digit count".into())
                    }
                    "base_name" => out.push("Provide a non-blank base name, e.g. 'memo'".into()),
                    _ => out.push("Check the value and try again".into()),
                }
                out
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
