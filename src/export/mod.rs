//! Export of ordered book groups to Markdown documents

mod markdown;

pub use markdown::{render_book, sanitize_filename, write_book};
