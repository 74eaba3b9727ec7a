//! Markdown table rendering

use super::diff::{ChangeKind, PageChangeInfo};
use crate::fmt::format_bytes;

const SIZE_HEADER: &str = "Size (gzipped)";

/// Two-column table: page and size
pub fn format_table_no_diff(name: &str, rows: &[PageChangeInfo]) -> String {
    let mut lines = vec![
        format!("| {} | {} |", name, SIZE_HEADER),
        "| --- | --- |".to_string(),
    ];
    lines.extend(
        rows.iter()
            .map(|row| format!("| `{}` | {} |", row.page, format_size(row.size))),
    );
    lines.join("\n")
}

/// Three-column table: page, size and signed delta (or `added` / `removed`)
pub fn format_table(name: &str, rows: &[PageChangeInfo]) -> String {
    let mut lines = vec![
        format!("| {} | {} | Diff |", name, SIZE_HEADER),
        "| --- | --- | --- |".to_string(),
    ];
    lines.extend(rows.iter().map(|row| {
        let diff = match row.kind {
            ChangeKind::Changed => format_bytes(row.diff, true),
            kind => kind.to_string(),
        };
        format!("| `{}` | {} | {} |", row.page, format_size(row.size), diff)
    }));
    lines.join("\n")
}

fn format_size(size: u64) -> String {
    format_bytes(i64::try_from(size).unwrap_or(i64::MAX), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(page: &str, kind: ChangeKind, size: u64, diff: i64) -> PageChangeInfo {
        PageChangeInfo {
            page: page.to_string(),
            kind,
            size,
            diff,
        }
    }

    #[test]
    fn test_no_diff_table_layout() {
        let rows = vec![
            row("/", ChangeKind::Added, 500, 500),
            row("/about", ChangeKind::Added, 1536, 1536),
        ];

        assert_eq!(
            format_table_no_diff("Static pages", &rows),
            "| Static pages | Size (gzipped) |\n\
             | --- | --- |\n\
             | `/` | 500 B |\n\
             | `/about` | 1.5 KB |"
        );
    }

    #[test]
    fn test_diff_table_layout() {
        let rows = vec![
            row("/grown", ChangeKind::Changed, 4096, 2048),
            row("/shrunk", ChangeKind::Changed, 1024, -2048),
            row("/new", ChangeKind::Added, 700, 700),
            row("/old", ChangeKind::Removed, 0, 0),
        ];

        assert_eq!(
            format_table("Dynamic", &rows),
            "| Dynamic | Size (gzipped) | Diff |\n\
             | --- | --- | --- |\n\
             | `/grown` | 4 KB | +2 KB |\n\
             | `/shrunk` | 1 KB | -2 KB |\n\
             | `/new` | 700 B | added |\n\
             | `/old` | no change | removed |"
        );
    }

    #[test]
    fn test_empty_tables_keep_headers() {
        assert_eq!(format_table_no_diff("X", &[]), "| X | Size (gzipped) |\n| --- | --- |");
        assert_eq!(
            format_table("X", &[]),
            "| X | Size (gzipped) | Diff |\n| --- | --- | --- |"
        );
    }
}
