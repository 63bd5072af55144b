//! Reading-order sequencing of annotation records
//!
//! Sorts the full record set by the composite key
//! `(asset id, store position hint, parsed location)` and partitions
//! it into per-book groups. The hint outranks the parsed location;
//! the location breaks hint ties (see DESIGN.md for the precedence
//! decision). The sort is stable, so exact duplicates keep their
//! input order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::cfi::compare_fragments;

use super::types::Annotation;

/// Highlights of one export run, grouped by book and ordered for reading
pub type BookGroups = BTreeMap<String, Vec<Annotation>>;

/// Order the raw record set and group it by book
///
/// Non-highlight rows (no selected text) are dropped. The union of the
/// returned groups is exactly the remaining records, each once, in
/// reading order within its book.
pub fn order(records: Vec<Annotation>) -> BookGroups {
    let mut highlights: Vec<Annotation> =
        records.into_iter().filter(Annotation::is_highlight).collect();

    highlights.sort_by(compare_records);

    let mut groups = BookGroups::new();
    for record in highlights {
        groups
            .entry(record.asset_id.clone())
            .or_default()
            .push(record);
    }

    groups
}

/// Composite three-way comparison over annotation records
fn compare_records(a: &Annotation, b: &Annotation) -> Ordering {
    a.asset_id
        .cmp(&b.asset_id)
        .then_with(|| a.location_start.cmp(&b.location_start))
        .then_with(|| compare_fragments(a.location.as_deref(), b.location.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(asset_id: &str, hint: i64, location: Option<&str>, text: &str) -> Annotation {
        Annotation {
            asset_id: asset_id.to_string(),
            representative_text: None,
            selected_text: Some(text.to_string()),
            chapter: None,
            style: Some(3),
            location_start: Some(hint),
            location: location.map(str::to_string),
        }
    }

    fn texts(group: &[Annotation]) -> Vec<&str> {
        group
            .iter()
            .map(|r| r.selected_text.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn test_hint_dominates_location() {
        // The hint-7 record sorts after hint-5 even though its
        // location is structurally earlier.
        let groups = order(vec![
            record("book", 7, Some("epubcfi(/6/2!/4/2,/1:0,/1:5)"), "late"),
            record("book", 5, Some("epubcfi(/6/8!/4/2,/1:0,/1:5)"), "early"),
        ]);

        assert_eq!(texts(&groups["book"]), vec!["early", "late"]);
    }

    #[test]
    fn test_location_breaks_hint_ties() {
        let groups = order(vec![
            record("book", 5, Some("epubcfi(/1/2)"), "second"),
            record("book", 5, Some("epubcfi(/1/1)"), "first"),
        ]);

        assert_eq!(texts(&groups["book"]), vec!["first", "second"]);
    }

    #[test]
    fn test_missing_hint_sorts_first() {
        let mut unhinted = record("book", 0, Some("epubcfi(/9/9)"), "unhinted");
        unhinted.location_start = None;

        let groups = order(vec![
            record("book", 1, Some("epubcfi(/1/1)"), "hinted"),
            unhinted,
        ]);

        assert_eq!(texts(&groups["book"]), vec!["unhinted", "hinted"]);
    }

    #[test]
    fn test_non_highlights_filtered() {
        let mut bookmark = record("book", 1, Some("epubcfi(/1/1)"), "");
        bookmark.selected_text = None;

        let groups = order(vec![bookmark, record("book", 2, None, "kept")]);

        assert_eq!(groups.len(), 1);
        assert_eq!(texts(&groups["book"]), vec!["kept"]);
    }

    #[test]
    fn test_duplicate_keys_keep_input_order() {
        let groups = order(vec![
            record("book", 3, Some("epubcfi(/2/2)"), "entered first"),
            record("book", 3, Some("epubcfi(/2/2)"), "entered second"),
        ]);

        assert_eq!(
            texts(&groups["book"]),
            vec!["entered first", "entered second"]
        );
    }

    #[test]
    fn test_records_cluster_by_book() {
        let groups = order(vec![
            record("beta", 1, Some("epubcfi(/1/1)"), "b1"),
            record("alpha", 2, Some("epubcfi(/1/2)"), "a2"),
            record("alpha", 1, Some("epubcfi(/1/1)"), "a1"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(texts(&groups["alpha"]), vec!["a1", "a2"]);
        assert_eq!(texts(&groups["beta"]), vec!["b1"]);
    }

    #[test]
    fn test_grouping_is_lossless() {
        let input = vec![
            record("a", 2, Some("epubcfi(/1/4)"), "one"),
            record("b", 1, None, "two"),
            record("a", 1, Some("epubcfi(/1/2)"), "three"),
            record("c", 9, Some("garbage"), "four"),
        ];
        let total = input.len();

        let groups = order(input);
        let grouped: usize = groups.values().map(Vec::len).sum();

        assert_eq!(grouped, total);
    }
}
