//! Per-batch outcome report.

use std::fmt;

use serde::Serialize;

/// Why one candidate note was not created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The target identifier was already taken.
    AlreadyExists,
    /// The storage layer refused the write.
    CreationFailed { message: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists => f.write_str("already exists"),
            Self::CreationFailed { message } => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedItem {
    pub name: String,
    pub reason: FailureReason,
}

impl fmt::Display for FailedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.reason)
    }
}

/// Result of one batch run.
///
/// Every index of the batch lands in exactly one of the two lists, and both
/// lists keep ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub created: Vec<String>,
    pub failed: Vec<FailedItem>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_created(&mut self, name: String) {
        self.created.push(name);
    }

    pub(crate) fn record_failed(&mut self, name: String, reason: FailureReason) {
        self.failed.push(FailedItem { name, reason });
    }

    /// Number of outcomes recorded.
    pub fn total(&self) -> usize {
        self.created.len() + self.failed.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_display_like_user_messages() {
        assert_eq!(FailureReason::AlreadyExists.to_string(), "already exists");
        let item = FailedItem {
            name: "memo（01）.md".into(),
            reason: FailureReason::CreationFailed {
                message: "permission denied".into(),
            },
        };
        assert_eq!(item.to_string(), "memo（01）.md (permission denied)");
    }

    #[test]
    fn report_serialises_reason_kind() {
        let mut report = BatchReport::new();
        report.record_created("a.md".into());
        report.record_failed("b.md".into(), FailureReason::AlreadyExists);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["created"][0], "a.md");
        assert_eq!(json["failed"][0]["reason"]["kind"], "already_exists");
        assert_eq!(report.total(), 2);
        assert!(!report.is_complete_success());
    }
}
