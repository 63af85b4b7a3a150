//! Batch Service - main application orchestrator.
//!
//! Drives the naming template over `1..=count` and persists one empty note
//! per index through the [`Storage`] port:
//! 1. Validate the request (the only way a run can fail)
//! 2. Render each candidate name and join it onto the target folder
//! 3. Skip names that already exist, create the rest
//! 4. Record every outcome in a [`BatchReport`]
//!
//! Items are handled strictly one after another, so the existence check for
//! index `i + 1` sees whatever index `i` created. Two indices rendering the
//! same name therefore show up as an `AlreadyExists` failure, not as a
//! silent overwrite.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Storage},
    domain::{BatchReport, BatchRequest, FailureReason},
    error::{MdMakerError, MdMakerResult},
};

/// Notes are created empty.
const EMPTY_CONTENT: &str = "";

/// Number of names the original preview pane showed.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// The first few names a batch would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub names: Vec<String>,
    /// Candidates not listed in `names`.
    pub remaining: usize,
}

/// Main batch creation service.
pub struct BatchService {
    storage: Box<dyn Storage>,
}

impl BatchService {
    /// Create a new batch service backed by `storage`.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Run a batch against this service's storage. See [`run`].
    pub fn run(&self, request: &BatchRequest) -> MdMakerResult<BatchReport> {
        run(request, self.storage.as_ref())
    }

    /// Names the batch would attempt, capped at `limit`. Storage is not
    /// consulted.
    pub fn preview(&self, request: &BatchRequest, limit: usize) -> MdMakerResult<Preview> {
        preview(request, limit)
    }

    /// Folders a batch can target, root excluded.
    pub fn folders(&self) -> MdMakerResult<Vec<String>> {
        self.storage.list_folders()
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}

/// Create `request.count` notes through `storage`.
///
/// Per-item problems (existing note, failed write) are recorded in the report
/// and never abort the loop.
///
/// # Errors
///
/// Only [`crate::domain::DomainError::InvalidConfiguration`], raised before
/// storage is touched.
#[instrument(
    skip_all,
    fields(
        folder = %request.target_location,
        base = %request.base_name,
        count = request.count,
        template = %request.template,
    )
)]
pub fn run(request: &BatchRequest, storage: &dyn Storage) -> MdMakerResult<BatchReport> {
    let pad = request.validate().map_err(MdMakerError::Domain)?;

    let mut report = BatchReport::new();

    for index in 1..=request.count {
        let name = request.candidate_name(pad, index);
        let identifier = storage.join_path(&request.target_location, &name);

        if storage.exists(&identifier) {
            debug!(%identifier, "Skipping existing note");
            report.record_failed(name, FailureReason::AlreadyExists);
            continue;
        }

        match storage.create(&identifier, EMPTY_CONTENT) {
            Ok(handle) => {
                debug!(%handle, "Note created");
                report.record_created(name);
            }
            Err(e) => {
                warn!(%identifier, error = %e, "Note creation failed");
                report.record_failed(name, failure_reason(&e));
            }
        }
    }

    info!(
        created = report.created.len(),
        failed = report.failed.len(),
        "Batch finished"
    );
    Ok(report)
}

/// Names `request` would attempt, capped at `limit`.
pub fn preview(request: &BatchRequest, limit: usize) -> MdMakerResult<Preview> {
    request.validate().map_err(MdMakerError::Domain)?;

    let names: Vec<String> = request.candidate_names().take(limit).collect();
    let remaining = (request.count as usize).saturating_sub(names.len());
    Ok(Preview { names, remaining })
}

fn failure_reason(err: &MdMakerError) -> FailureReason {
    match err {
        MdMakerError::Application(ApplicationError::AlreadyExists { .. }) => {
            FailureReason::AlreadyExists
        }
        MdMakerError::Application(app) => FailureReason::CreationFailed {
            message: app.item_message(),
        },
        other => FailureReason::CreationFailed {
            message: other.to_string(),
        },
    }
}
