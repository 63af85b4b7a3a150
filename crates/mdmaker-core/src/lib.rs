//! mdmaker Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for mdmaker, a tool
//! that creates a batch of sequentially numbered Markdown notes from one
//! naming template.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mdmaker-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (BatchService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │               (Storage)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mdmaker-adapters (Infrastructure)    │
//! │        (LocalVault, MemoryVault)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameTemplate, BatchRequest, normalize) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mdmaker_core::prelude::*;
//!
//! # fn demo(storage: Box<dyn Storage>) -> MdMakerResult<()> {
//! let request = BatchRequest::new("daily", "memo", 3)
//!     .with_template("-n")
//!     .with_pad_width(2);
//!
//! let report = BatchService::new(storage).run(&request)?;
//! println!("{} created, {} failed", report.created.len(), report.failed.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BatchService, Preview,
        ports::{NoteHandle, Storage},
    };
    pub use crate::domain::{
        BatchReport, BatchRequest, FailedItem, FailureReason, NameTemplate, PadWidth, normalize,
        parse_count, render,
    };
    pub use crate::error::{MdMakerError, MdMakerResult};
}
