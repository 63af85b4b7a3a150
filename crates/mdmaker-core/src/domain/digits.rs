//! Full-width digit normalisation for free-form count input.
//!
//! IMEs commonly produce full-width digits (`１２３`) where a plain integer is
//! expected. [`normalize`] folds them to ASCII before parsing; it is never
//! applied to naming templates.

use crate::domain::{DomainError, MAX_COUNT};

const FULLWIDTH_ZERO: u32 = '０' as u32;
const FULLWIDTH_NINE: u32 = '９' as u32;

/// Map every full-width decimal digit (U+FF10..=U+FF19) to its ASCII
/// counterpart. All other characters pass through untouched.
pub fn normalize(text: &str) -> String {
    text.chars().map(to_halfwidth).collect()
}

fn to_halfwidth(c: char) -> char {
    let code = c as u32;
    if (FULLWIDTH_ZERO..=FULLWIDTH_NINE).contains(&code) {
        // Both ranges are contiguous, so the offset is exact.
        char::from(b'0' + (code - FULLWIDTH_ZERO) as u8)
    } else {
        c
    }
}

/// Parse a user-supplied note count, accepting full-width digits.
///
/// The value must be a whole number in `1..=MAX_COUNT`.
pub fn parse_count(text: &str) -> Result<u32, DomainError> {
    let normalized = normalize(text);
    let trimmed = normalized.trim();

    let count: u32 = trimmed
        .parse()
        .map_err(|_| DomainError::invalid("count", format!("'{text}' is not a whole number")))?;

    if !(1..=MAX_COUNT).contains(&count) {
        return Err(DomainError::invalid(
            "count",
            format!("{count} is outside 1..={MAX_COUNT}"),
        ));
    }

    Ok(count)
}
