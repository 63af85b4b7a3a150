//! Naming templates: the sequence segment appended to a note's base name.
//!
//! A template is free text in which every `n` becomes the current sequence
//! index and every `\n` becomes a literal `n`:
//!
//! ```
//! use mdmaker_core::domain::template::render;
//!
//! assert_eq!(render("(\\n-n)", 2, 3).unwrap(), "(n-03)");
//! assert_eq!(render("n", 0, 7).unwrap(), "7");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The character replaced by the sequence index.
pub const PLACEHOLDER: char = 'n';

const ESCAPED_PLACEHOLDER: &str = "\\n";

/// Stand-in for escaped placeholders while substitution runs.
///
/// Must not contain [`PLACEHOLDER`]. NUL can never occur in a file name, so
/// the marker cannot collide with anything a template legitimately renders.
const ESCAPE_MARKER: &str = "\u{0}\u{1}LITERAL\u{1}\u{0}";

// ── PadWidth ─────────────────────────────────────────────────────────────────

/// Minimum digit count an index is zero-padded to. `0` disables padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PadWidth(usize);

impl PadWidth {
    pub const fn new(width: usize) -> Self {
        Self(width)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Format `index` as decimal, left-padded with `0` to this width.
    /// Wider numbers are never truncated.
    pub fn apply(self, index: u32) -> String {
        // `format!` caps width arguments at u16::MAX, so pad by hand.
        let digits = index.to_string();
        let mut padded = "0".repeat(self.0.saturating_sub(digits.len()));
        padded.push_str(&digits);
        padded
    }
}

impl TryFrom<i64> for PadWidth {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value).map(Self).map_err(|_| {
            DomainError::invalid("pad_width", format!("must not be negative (got {value})"))
        })
    }
}

impl fmt::Display for PadWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── NameTemplate ─────────────────────────────────────────────────────────────

/// A raw naming template such as `（n）` or `-\nn`.
///
/// No validation happens here: a template without any placeholder is legal
/// and renders the same segment for every index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTemplate(String);

impl NameTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the segment for `index`.
    ///
    /// Three passes, in this order:
    /// 1. every `\n` is swapped for a marker (one left-to-right scan),
    /// 2. every remaining `n` becomes the padded index,
    /// 3. every marker becomes a literal `n`.
    pub fn render(&self, pad: PadWidth, index: u32) -> String {
        let masked = self.0.replace(ESCAPED_PLACEHOLDER, ESCAPE_MARKER);
        let substituted = masked.replace(PLACEHOLDER, &pad.apply(index));
        substituted.replace(ESCAPE_MARKER, &PLACEHOLDER.to_string())
    }
}

impl Default for NameTemplate {
    /// Full-width parentheses around the index, e.g. `メモ（01）`.
    fn default() -> Self {
        Self::new("（n）")
    }
}

impl fmt::Display for NameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NameTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NameTemplate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Render `template` for `index` with the given pad width.
///
/// # Errors
///
/// [`DomainError::InvalidConfiguration`] if `pad_width` is negative.
pub fn render(template: &str, pad_width: i64, index: u32) -> Result<String, DomainError> {
    let pad = PadWidth::try_from(pad_width)?;
    Ok(NameTemplate::new(template).render(pad, index))
}
