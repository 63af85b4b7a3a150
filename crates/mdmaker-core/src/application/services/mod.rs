//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a batch of notes".

pub mod batch_service;

pub use batch_service::{BatchService, DEFAULT_PREVIEW_LIMIT, Preview, preview, run};
