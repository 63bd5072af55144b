//! CFI (Canonical Fragment Identifier) handling for EPUB locations
//!
//! Apple Books stores each annotation's position as an EPUB CFI string.
//! This module reduces such a string to a flat, comparable address and
//! defines reading order over addresses.
//!
//! # Example fragment
//!
//! ```text
//! epubcfi(/6/4[chap01]!/4/10/2,/1:10,/2:24)
//!         │  │         │       │     └── range end (discarded)
//!         │  │         │       └──────── range start: text node, offset 10
//!         │  │         └──────────────── element steps in the content doc
//!         │  └────────────────────────── spine item (ID assertion ignored)
//!         └───────────────────────────── spine element
//! ```
//!
//! The fragment above reduces to the step indices `6/4/4/10/2/1` with
//! the character offset appended: `[6, 4, 4, 10, 2, 1, 10]`.
//!
//! Parsing is deliberately permissive. Annotation stores in the wild
//! carry truncated and legacy fragments; ordering depends on extracting
//! whatever numeric position exists, not on rejecting bad input. See
//! DESIGN.md for the rationale.

mod comparator;
mod parser;
mod types;

pub use types::Address;

pub use parser::{parse, parse_optional, AddressError};

pub use comparator::compare_fragments;
