// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for mdmaker.
//!
//! This module contains pure naming and batch-shape logic. All I/O is
//! handled via the storage port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq
pub mod digits;
pub mod error;
pub mod report;
pub mod request;
pub mod template;

/// Extension appended to every generated note name, after templating.
pub const NOTE_EXTENSION: &str = ".md";

/// Upper bound on notes per batch.
pub const MAX_COUNT: u32 = 100;

pub use digits::{normalize, parse_count};
pub use error::{DomainError, ErrorCategory};
pub use report::{BatchReport, FailedItem, FailureReason};
pub use request::{BatchRequest, ROOT_LOCATION};
pub use template::{NameTemplate, PadWidth, render};
