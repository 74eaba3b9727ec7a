//! Snapshot comparison logic

use crate::measure::PageSize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How a page differs between the reference and the current build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Only present in the current build
    Added,
    /// Present in both builds
    Changed,
    /// Only present in the reference build
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Changed => write!(f, "changed"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// One row of a change report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChangeInfo {
    /// Page path or module id
    pub page: String,
    /// Kind of change
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// Current size in bytes; 0 for removed pages
    pub size: u64,
    /// Size delta in bytes; the full size for added pages, 0 for removed pages
    pub diff: i64,
}

/// Compare two snapshots page by page
///
/// Pages are matched by exact string equality. Added and changed rows come
/// first in `current` order, followed by removed rows in `reference` order.
/// Removed rows do not carry the page's previous size.
pub fn page_changes(reference: &[PageSize], current: &[PageSize]) -> Vec<PageChangeInfo> {
    let mut rows: Vec<PageChangeInfo> = current
        .iter()
        .map(|entry| match reference.iter().find(|r| r.page == entry.page) {
            Some(previous) => PageChangeInfo {
                page: entry.page.clone(),
                kind: ChangeKind::Changed,
                size: entry.size,
                diff: signed(entry.size) - signed(previous.size),
            },
            None => PageChangeInfo {
                page: entry.page.clone(),
                kind: ChangeKind::Added,
                size: entry.size,
                diff: signed(entry.size),
            },
        })
        .collect();

    let current_pages: HashSet<&str> = current.iter().map(|c| c.page.as_str()).collect();
    rows.extend(
        reference
            .iter()
            .filter(|r| !current_pages.contains(r.page.as_str()))
            .map(|r| PageChangeInfo {
                page: r.page.clone(),
                kind: ChangeKind::Removed,
                size: 0,
                diff: 0,
            }),
    );

    rows
}

/// Keep structural changes and changed pages whose delta reaches `threshold`
pub fn keep_significant(rows: Vec<PageChangeInfo>, threshold: u64) -> Vec<PageChangeInfo> {
    rows.into_iter()
        .filter(|row| row.kind != ChangeKind::Changed || row.diff.unsigned_abs() >= threshold)
        .collect()
}

fn signed(size: u64) -> i64 {
    i64::try_from(size).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot(entries: &[(&str, u64)]) -> Vec<PageSize> {
        entries
            .iter()
            .map(|(page, size)| PageSize::new(*page, *size))
            .collect()
    }

    #[test]
    fn test_identical_snapshots_yield_zero_diff_changed_row() {
        let reference = snapshot(&[("/a", 100)]);
        let current = snapshot(&[("/a", 100)]);

        let rows = page_changes(&reference, &current);
        assert_eq!(
            rows,
            vec![PageChangeInfo {
                page: "/a".to_string(),
                kind: ChangeKind::Changed,
                size: 100,
                diff: 0,
            }]
        );
        assert!(keep_significant(rows, 1000).is_empty());
    }

    #[test]
    fn test_added_and_removed_pages() {
        let reference = snapshot(&[("/a", 1000)]);
        let current = snapshot(&[("/b", 1000)]);

        let rows = page_changes(&reference, &current);
        assert_eq!(
            rows,
            vec![
                PageChangeInfo {
                    page: "/b".to_string(),
                    kind: ChangeKind::Added,
                    size: 1000,
                    diff: 1000,
                },
                PageChangeInfo {
                    page: "/a".to_string(),
                    kind: ChangeKind::Removed,
                    size: 0,
                    diff: 0,
                },
            ]
        );
        assert_eq!(keep_significant(rows.clone(), 1000), rows);
    }

    #[test]
    fn test_rows_follow_current_then_reference_order() {
        let reference = snapshot(&[("/gone-1", 1), ("/kept", 5), ("/gone-2", 1)]);
        let current = snapshot(&[("/new", 3), ("/kept", 4)]);

        let rows = page_changes(&reference, &current);
        let order: Vec<(&str, ChangeKind)> =
            rows.iter().map(|r| (r.page.as_str(), r.kind)).collect();
        assert_eq!(
            order,
            vec![
                ("/new", ChangeKind::Added),
                ("/kept", ChangeKind::Changed),
                ("/gone-1", ChangeKind::Removed),
                ("/gone-2", ChangeKind::Removed),
            ]
        );
        assert_eq!(rows[1].diff, -1);
    }

    #[test]
    fn test_page_matching_is_exact() {
        let reference = snapshot(&[("/about/", 10)]);
        let current = snapshot(&[("/about", 10)]);

        let kinds: Vec<ChangeKind> = page_changes(&reference, &current)
            .iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(kinds, vec![ChangeKind::Added, ChangeKind::Removed]);
    }

    #[test]
    fn test_significance_threshold_boundaries() {
        let reference = snapshot(&[("/up", 0), ("/down", 5000), ("/small", 100)]);
        let current = snapshot(&[("/up", 1000), ("/down", 4000), ("/small", 1099)]);

        let kept = keep_significant(page_changes(&reference, &current), 1000);
        let pages: Vec<&str> = kept.iter().map(|r| r.page.as_str()).collect();
        assert_eq!(pages, vec!["/up", "/down"]);
    }

    #[test]
    fn test_added_pages_survive_regardless_of_size() {
        let rows = page_changes(&[], &snapshot(&[("/tiny", 1)]));
        assert_eq!(keep_significant(rows, 1000).len(), 1);
    }

    #[test]
    fn test_change_kind_serializes_lowercase() {
        let row = PageChangeInfo {
            page: "/".to_string(),
            kind: ChangeKind::Removed,
            size: 0,
            diff: 0,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"page":"/","type":"removed","size":0,"diff":0}"#);
    }

    proptest! {
        #[test]
        fn prop_every_page_appears_once(
            reference in proptest::collection::btree_map("/[a-z]{1,4}", 0u64..100_000, 0..8),
            current in proptest::collection::btree_map("/[a-z]{1,4}", 0u64..100_000, 0..8),
        ) {
            let reference: Vec<PageSize> = reference.into_iter().map(|(p, s)| PageSize::new(p, s)).collect();
            let current: Vec<PageSize> = current.into_iter().map(|(p, s)| PageSize::new(p, s)).collect();

            let rows = page_changes(&reference, &current);
            let removed = reference.iter().filter(|r| !current.iter().any(|c| c.page == r.page)).count();
            prop_assert_eq!(rows.len(), current.len() + removed);

            for row in &rows {
                match row.kind {
                    ChangeKind::Added => prop_assert_eq!(row.diff, row.size as i64),
                    ChangeKind::Removed => prop_assert_eq!((row.size, row.diff), (0, 0)),
                    ChangeKind::Changed => {
                        let before = reference.iter().find(|r| r.page == row.page).unwrap();
                        prop_assert_eq!(row.diff, row.size as i64 - before.size as i64);
                    }
                }
            }
        }
    }
}
