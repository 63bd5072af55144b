//! Permissive CFI parsing
//!
//! Reduces a raw `epubcfi(...)` string to an [`Address`].
//!
//! Shape of a stored fragment (simplified):
//! ```text
//! fragment = "epubcfi(" body ")"
//! body     = parent-path [ "," range-start "," range-end ]
//! path     = ("/" number [ "[" id "]" ] | "!")+ [ ":" offset ]
//! ```
//!
//! Only the start boundary matters for ordering: the parent path and
//! the first range segment are concatenated, the end segment is
//! discarded. Everything that is not a `/`-step index or the character
//! offset (ID assertions, indirection marks, text assertions) is
//! skipped rather than rejected.

use thiserror::Error;

use super::types::Address;

/// Fixed scheme prefix on every well-formed fragment
const SCHEME_PREFIX: &str = "epubcfi(";

/// CFI parsing errors
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Empty location fragment")]
    Empty,

    #[error("Unrecognizable location fragment: {0}")]
    Unrecognized(String),
}

/// Parse a location fragment into an address
///
/// Extraction is best-effort: missing range segments, missing offsets
/// and decorated steps all contribute what they can. An error is
/// returned only when the fragment yields no step index and no offset
/// at all.
pub fn parse(raw: &str) -> Result<Address, AddressError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AddressError::Empty);
    }

    let body = strip_scheme(raw);

    // Reconstruct the start boundary of a range fragment: the parent
    // path concatenated with the first range segment. Non-range
    // fragments have a single segment and no end boundary to discard.
    let mut segments = body.split(',');
    let parent = segments.next().unwrap_or_default();
    let start = segments.next().unwrap_or_default();
    let boundary = format!("{parent}{start}");

    // Path before the first ':', character offset after it.
    let (path, offset) = match boundary.split_once(':') {
        Some((path, offset)) => (path, Some(offset)),
        None => (boundary.as_str(), None),
    };

    let mut components: Vec<u32> = path
        .split('/')
        .skip(1)
        .filter_map(leading_number)
        .collect();

    if let Some(offset) = offset.and_then(leading_number) {
        components.push(offset);
    }

    if components.is_empty() {
        return Err(AddressError::Unrecognized(raw.to_string()));
    }

    Ok(Address::new(components))
}

/// Parse a nullable fragment, mapping `None` to the empty address
pub fn parse_optional(raw: Option<&str>) -> Result<Address, AddressError> {
    match raw {
        Some(raw) => parse(raw),
        None => Ok(Address::empty()),
    }
}

/// Strip `epubcfi(` and the trailing `)`, tolerating their absence
fn strip_scheme(raw: &str) -> &str {
    let body = raw.strip_prefix(SCHEME_PREFIX).unwrap_or(raw);
    body.strip_suffix(')').unwrap_or(body)
}

/// Parse the run of digits at the start of a path segment
///
/// `4[chap01]!` yields 4; a segment with no leading digits (or one that
/// overflows u32) yields nothing.
fn leading_number(segment: &str) -> Option<u32> {
    let digits: &str = {
        let end = segment
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(segment.len());
        &segment[..end]
    };

    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}
