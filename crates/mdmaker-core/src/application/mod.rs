//! Application layer for mdmaker.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BatchService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BatchService, DEFAULT_PREVIEW_LIMIT, Preview};

// Re-export port traits (for adapter implementation)
pub use ports::{NoteHandle, Storage};

pub use error::ApplicationError;
