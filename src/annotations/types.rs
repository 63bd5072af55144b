//! Annotation record as stored by Apple Books
//!
//! One row of the `ZAEANNOTATION` table, read-only. Column names on the
//! Apple side are preserved in the queries (see `db::annotations`);
//! here the fields carry their meaning instead.

use serde::{Deserialize, Serialize};

/// A single annotation from the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Annotation {
    /// Identifier of the book this annotation belongs to
    pub asset_id: String,
    /// Surrounding passage captured with the highlight
    pub representative_text: Option<String>,
    /// The highlighted text itself; absent for non-highlight rows
    /// (bookmarks, orphaned notes), which are excluded from export
    pub selected_text: Option<String>,
    /// Chapter label, when the store recorded one
    pub chapter: Option<String>,
    /// Highlight style tag (color/underline) as stored
    pub style: Option<i64>,
    /// Store-assigned position hint, monotonic within one asset;
    /// primary ordering key ahead of the parsed location
    pub location_start: Option<i64>,
    /// Raw CFI location fragment; absent on malformed/legacy rows
    pub location: Option<String>,
}

impl Annotation {
    /// Whether this record is an exportable highlight
    pub fn is_highlight(&self) -> bool {
        self.selected_text.is_some()
    }
}
