//! `BatchRequest`: everything one batch run needs, as plain data.

use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainError, MAX_COUNT, NOTE_EXTENSION,
    template::{NameTemplate, PadWidth},
};

/// Vault path of the root folder.
pub const ROOT_LOCATION: &str = "/";

/// Input for one batch run.
///
/// Values come straight from user input, so nothing here is trusted until
/// [`BatchRequest::validate`] succeeds. `pad_width` is signed for the same
/// reason: a negative value must be representable to be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Folder the notes go into (`/` for the vault root).
    pub target_location: String,
    pub base_name: String,
    pub count: u32,
    pub template: NameTemplate,
    pub pad_width: i64,
}

impl BatchRequest {
    /// A request using the default template `（n）` with two-digit padding.
    pub fn new(target_location: impl Into<String>, base_name: impl Into<String>, count: u32) -> Self {
        Self {
            target_location: target_location.into(),
            base_name: base_name.into(),
            count,
            template: NameTemplate::default(),
            pad_width: 2,
        }
    }

    pub fn with_template(mut self, template: impl Into<NameTemplate>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_pad_width(mut self, pad_width: i64) -> Self {
        self.pad_width = pad_width;
        self
    }

    /// Check structural validity and return the resolved pad width.
    pub fn validate(&self) -> Result<PadWidth, DomainError> {
        if self.count < 1 {
            return Err(DomainError::invalid("count", "must be at least 1"));
        }
        if self.count > MAX_COUNT {
            return Err(DomainError::invalid(
                "count",
                format!("{} exceeds the maximum of {MAX_COUNT}", self.count),
            ));
        }
        if self.base_name.trim().is_empty() {
            return Err(DomainError::invalid("base_name", "must not be blank"));
        }
        PadWidth::try_from(self.pad_width)
    }

    /// The base name as used in file names (surrounding whitespace removed).
    pub fn base_name(&self) -> &str {
        self.base_name.trim()
    }

    /// Candidate file name for `index`: base name, rendered segment, extension.
    pub fn candidate_name(&self, pad: PadWidth, index: u32) -> String {
        format!(
            "{}{}{}",
            self.base_name(),
            self.template.render(pad, index),
            NOTE_EXTENSION
        )
    }

    /// All candidate names, in index order, without touching storage.
    ///
    /// Yields nothing for a request that fails validation.
    pub fn candidate_names(&self) -> impl Iterator<Item = String> + '_ {
        let pad = self.validate().ok();
        let count = if pad.is_some() { self.count } else { 0 };
        (1..=count).map(move |i| self.candidate_name(pad.unwrap_or_default(), i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_original_defaults() {
        let req = BatchRequest::new("/", "memo", 3);
        assert_eq!(req.template.as_str(), "（n）");
        assert_eq!(req.pad_width, 2);
    }

    #[test]
    fn zero_count_is_invalid() {
        let err = BatchRequest::new("/", "memo", 0).validate().unwrap_err();
        assert_eq!(err.field(), "count");
    }

    #[test]
    fn count_above_maximum_is_invalid() {
        assert!(BatchRequest::new("/", "memo", MAX_COUNT).validate().is_ok());
        assert!(BatchRequest::new("/", "memo", MAX_COUNT + 1).validate().is_err());
    }

    #[test]
    fn blank_base_name_is_invalid() {
        let err = BatchRequest::new("/", "   ", 1).validate().unwrap_err();
        assert_eq!(err.field(), "base_name");
    }

    #[test]
    fn negative_pad_is_invalid() {
        let err = BatchRequest::new("/", "memo", 1)
            .with_pad_width(-1)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "pad_width");
    }

    #[test]
    fn candidate_names_trim_base_and_append_extension() {
        let req = BatchRequest::new("/", "  memo ", 3)
            .with_template("-n")
            .with_pad_width(0);
        let names: Vec<_> = req.candidate_names().collect();
        assert_eq!(names, ["memo-1.md", "memo-2.md", "memo-3.md"]);
    }

    #[test]
    fn invalid_request_has_no_candidates() {
        let req = BatchRequest::new("/", "memo", 3).with_pad_width(-2);
        assert_eq!(req.candidate_names().count(), 0);
    }
}
