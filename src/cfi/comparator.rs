//! Reading-order comparison for addresses
//!
//! Defines the total order used to sort annotations within a book:
//! component-wise over the common prefix, with an ancestor position
//! ordering before any of its descendants.

use std::cmp::Ordering;

use super::parser::parse_optional;
use super::types::Address;

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_components(&self.components, &other.components)
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two component sequences
fn compare_components(a: &[u32], b: &[u32]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let cmp = x.cmp(y);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    // All shared components equal: a strict prefix sorts first, so an
    // ancestor position precedes its descendants.
    a.len().cmp(&b.len())
}

/// Compare two raw location fragments in reading order
///
/// This is the collaborator-facing entry point: `None` and fragments
/// that cannot be parsed degrade to the empty address (which sorts
/// first) instead of failing, so one corrupt record never aborts an
/// export. The comparison itself is total.
pub fn compare_fragments(a: Option<&str>, b: Option<&str>) -> Ordering {
    parse_lenient(a).cmp(&parse_lenient(b))
}

fn parse_lenient(raw: Option<&str>) -> Address {
    parse_optional(raw).unwrap_or_else(|err| {
        tracing::debug!("treating fragment as unpositioned: {err}");
        Address::empty()
    })
}
