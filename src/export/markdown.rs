//! Markdown document generation
//!
//! Renders one book's ordered highlights into a Markdown document and
//! writes it as `<output dir>/<title>.md`.

use std::path::{Path, PathBuf};

use crate::annotations::Annotation;
use crate::db::Book;
use crate::error::Result;

/// Render a book's ordered highlights as a Markdown document
pub fn render_book(book: &Book, highlights: &[Annotation]) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", book.display_title()));
    doc.push_str(&format!("*{}*\n\n", book.display_author()));

    for record in highlights {
        let Some(text) = record.selected_text.as_deref() else {
            continue;
        };

        doc.push_str(&blockquote(text));
        doc.push('\n');

        if let Some(chapter) = non_empty(record.chapter.as_deref()) {
            doc.push_str(&format!("— *{chapter}*\n"));
        }

        doc.push('\n');
    }

    doc
}

/// Write a rendered book under the output directory
///
/// Returns the path of the written file.
pub fn write_book(output_dir: &Path, book: &Book, highlights: &[Annotation]) -> Result<PathBuf> {
    let filename = format!("{}.md", sanitize_filename(book.display_title()));
    let path = output_dir.join(filename);

    std::fs::write(&path, render_book(book, highlights))?;

    Ok(path)
}

/// Quote a highlight, keeping multi-line text inside the blockquote
fn blockquote(text: &str) -> String {
    let mut quoted = String::new();
    for line in text.lines() {
        quoted.push_str("> ");
        quoted.push_str(line);
        quoted.push('\n');
    }
    if quoted.is_empty() {
        quoted.push_str(">\n");
    }
    quoted
}

/// Reduce a book title to a safe file name
///
/// Path separators and control characters are replaced; a title that
/// sanitizes to nothing becomes "untitled".
pub fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
