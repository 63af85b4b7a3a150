//! Infrastructure adapters for mdmaker.
//!
//! This crate implements the ports defined in `mdmaker-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalVault, MemoryVault};
