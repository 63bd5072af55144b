//! Annotation records and reading-order sequencing
//!
//! The store hands back an unordered pile of rows per export run; this
//! module filters it down to actual highlights and produces the
//! definitive per-book reading order.

mod sequencer;
mod types;

pub use types::Annotation;

pub use sequencer::{order, BookGroups};
