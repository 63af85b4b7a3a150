//! Integration tests for the batch engine, driven through a call-counting
//! fake storage.

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use mdmaker_core::application::{ApplicationError, services::run};
use mdmaker_core::prelude::*;

#[derive(Default)]
struct CountingStorage {
    notes: Mutex<BTreeSet<String>>,
    exists_calls: AtomicUsize,
    create_calls: AtomicUsize,
    /// Identifiers whose creation is refused.
    reject: Vec<String>,
}

impl CountingStorage {
    fn with_notes(notes: &[&str]) -> Self {
        Self {
            notes: Mutex::new(notes.iter().map(|s| s.to_string()).collect()),
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst) + self.create_calls.load(Ordering::SeqCst)
    }

    fn contains(&self, id: &str) -> bool {
        self.notes.lock().unwrap().contains(id)
    }
}

impl Storage for CountingStorage {
    fn exists(&self, identifier: &str) -> bool {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.contains(identifier)
    }

    fn create(&self, identifier: &str, content: &str) -> MdMakerResult<NoteHandle> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        assert!(content.is_empty(), "notes are created empty");
        if self.reject.iter().any(|r| r == identifier) {
            return Err(ApplicationError::StorageError {
                path: identifier.to_string(),
                reason: "permission denied".into(),
            }
            .into());
        }
        let mut notes = self.notes.lock().unwrap();
        if !notes.insert(identifier.to_string()) {
            return Err(ApplicationError::AlreadyExists {
                path: identifier.to_string(),
            }
            .into());
        }
        Ok(identifier.to_string())
    }

    fn list_folders(&self) -> MdMakerResult<Vec<String>> {
        Ok(Vec::new())
    }
}

fn attempted(report: &BatchReport) -> usize {
    report.total()
}

#[test]
fn every_index_yields_exactly_one_outcome() {
    for k in [1, 2, 7, 100] {
        let storage = CountingStorage::default();
        let req = BatchRequest::new("/", "memo", k);
        let report = run(&req, &storage).unwrap();

        assert_eq!(attempted(&report), k as usize);
        assert_eq!(report.created.len(), k as usize);
        let expected: Vec<String> = req.candidate_names().collect();
        assert_eq!(report.created, expected);
    }
}

#[test]
fn collision_with_second_candidate_is_reported() {
    let storage = CountingStorage::with_notes(&["memo(2).md"]);
    let req = BatchRequest::new("/", "memo", 3)
        .with_template("(n)")
        .with_pad_width(0);

    let report = run(&req, &storage).unwrap();

    assert_eq!(report.created, ["memo(1).md", "memo(3).md"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].name, "memo(2).md");
    assert_eq!(report.failed[0].reason.to_string(), "already exists");
    // The existing note is checked but never re-created.
    assert_eq!(storage.create_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn second_identical_run_fails_everything() {
    let storage = CountingStorage::default();
    let req = BatchRequest::new("inbox", "memo", 4);

    let first = run(&req, &storage).unwrap();
    assert_eq!(first.created.len(), 4);

    let second = run(&req, &storage).unwrap();
    assert!(second.created.is_empty());
    assert_eq!(second.failed.len(), 4);
    assert!(
        second
            .failed
            .iter()
            .all(|f| f.reason == FailureReason::AlreadyExists)
    );
    let names: Vec<_> = second.failed.iter().map(|f| f.name.clone()).collect();
    assert_eq!(names, first.created);
}

#[test]
fn duplicate_names_within_one_batch_are_caught() {
    // No placeholder: all three indices render the same name.
    let storage = CountingStorage::default();
    let req = BatchRequest::new("/", "memo", 3).with_template("-copy");

    let report = run(&req, &storage).unwrap();

    assert_eq!(report.created, ["memo-copy.md"]);
    assert_eq!(report.failed.len(), 2);
    assert!(report.failed.iter().all(|f| f.name == "memo-copy.md"));
}

#[test]
fn target_folder_is_joined_with_single_separator() {
    let storage = CountingStorage::default();
    let req = BatchRequest::new("projects/alpha", "task", 2).with_pad_width(3);

    run(&req, &storage).unwrap();

    assert!(storage.contains("projects/alpha/task（001）.md"));
    assert!(storage.contains("projects/alpha/task（002）.md"));
}

#[test]
fn root_folder_contributes_no_separator() {
    let storage = CountingStorage::default();
    run(&BatchRequest::new("/", "task", 1), &storage).unwrap();
    assert!(storage.contains("task（01）.md"));
}

#[test]
fn failing_create_does_not_abort_batch() {
    let storage = CountingStorage {
        reject: vec!["memo（02）.md".into()],
        ..CountingStorage::default()
    };
    let report = run(&BatchRequest::new("/", "memo", 3), &storage).unwrap();

    assert_eq!(report.created, ["memo（01）.md", "memo（03）.md"]);
    assert_eq!(
        report.failed[0].reason,
        FailureReason::CreationFailed {
            message: "permission denied".into()
        }
    );
}

#[test]
fn invalid_requests_make_no_storage_calls() {
    let storage = CountingStorage::default();

    let zero = BatchRequest::new("/", "memo", 0);
    let err = run(&zero, &storage).unwrap_err();
    assert!(err.is_invalid_configuration());

    let negative = BatchRequest::new("/", "memo", 5).with_pad_width(-1);
    let err = run(&negative, &storage).unwrap_err();
    assert!(err.is_invalid_configuration());

    let blank = BatchRequest::new("/", "", 5);
    assert!(run(&blank, &storage).is_err());

    assert_eq!(storage.calls(), 0);
}

#[test]
fn service_wraps_storage() {
    let service = BatchService::new(Box::new(CountingStorage::default()));
    let report = service
        .run(&BatchRequest::new("/", "メモ", 2).with_template("-n").with_pad_width(0))
        .unwrap();
    assert_eq!(report.created, ["メモ-1.md", "メモ-2.md"]);
    assert!(service.storage().exists("メモ-2.md"));
    assert!(service.folders().unwrap().is_empty());
}

#[test]
fn count_from_fullwidth_input() {
    let count = parse_count("３").unwrap();
    let storage = CountingStorage::default();
    let report = run(&BatchRequest::new("/", "memo", count), &storage).unwrap();
    assert_eq!(report.created.len(), 3);
    assert_eq!(normalize("１２３"), "123");
}
