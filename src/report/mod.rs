//! Size change reporting
//!
//! Turns one or two snapshots into a markdown table for a pull request
//! comment. A comparison with nothing worth mentioning renders as `None`, so
//! CI can skip posting entirely.

mod diff;
mod markdown;

pub use diff::{keep_significant, page_changes, ChangeKind, PageChangeInfo};
pub use markdown::{format_table, format_table_no_diff};

use crate::config::{ConfigFile, DEFAULT_SIGNIFICANCE_THRESHOLD};
use crate::measure::PageSize;

/// Renders snapshot comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReporter {
    threshold: u64,
}

impl SizeReporter {
    /// Create a reporter that hides changed pages below `threshold` bytes
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    /// Create with the default 1000 byte threshold
    pub fn with_default_threshold() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE_THRESHOLD)
    }

    /// Create from a loaded configuration
    pub fn from_config(config: &ConfigFile) -> Self {
        Self::new(config.significance_threshold)
    }

    /// Significance threshold in bytes
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Compare `current` against `reference`
    pub fn diff(&self, reference: &[PageSize], current: &[PageSize]) -> Vec<PageChangeInfo> {
        page_changes(reference, current)
    }

    /// Drop changed pages whose delta is below the threshold
    pub fn keep_significant(&self, rows: Vec<PageChangeInfo>) -> Vec<PageChangeInfo> {
        keep_significant(rows, self.threshold)
    }

    /// Render a single snapshot as a two-column table
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size::measure::PageSize;
    /// use bundle_size::report::SizeReporter;
    ///
    /// let table = SizeReporter::with_default_threshold()
    ///     .render_single("Pages", &[PageSize::new("/", 2048)]);
    /// assert!(table.ends_with("| `/` | 2 KB |"));
    /// ```
    pub fn render_single(&self, name: &str, sizes: &[PageSize]) -> String {
        format_table_no_diff(name, &page_changes(&[], sizes))
    }

    /// Render the comparison of two snapshots
    ///
    /// Returns `None` when nothing changed or no change is significant. An
    /// empty `reference` (first build) lists every current page without a
    /// diff column.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_size::measure::PageSize;
    /// use bundle_size::report::SizeReporter;
    ///
    /// let reporter = SizeReporter::with_default_threshold();
    /// let reference = vec![PageSize::new("/", 10_000)];
    ///
    /// let unchanged = reporter.render_comparison("Pages", &reference, &reference);
    /// assert!(unchanged.is_none());
    ///
    /// let grown = reporter
    ///     .render_comparison("Pages", &reference, &[PageSize::new("/", 12_048)])
    ///     .unwrap();
    /// assert!(grown.contains("+2 KB"));
    /// ```
    pub fn render_comparison(
        &self,
        name: &str,
        reference: &[PageSize],
        current: &[PageSize],
    ) -> Option<String> {
        let rows = self.diff(reference, current);
        if rows.is_empty() {
            return None;
        }

        if reference.is_empty() {
            return Some(format_table_no_diff(name, &rows));
        }

        let significant = self.keep_significant(rows);
        if significant.is_empty() {
            log::info!("No page of '{}' changed by {} bytes or more", name, self.threshold);
            return None;
        }

        Some(format_table(name, &significant))
    }
}

impl Default for SizeReporter {
    fn default() -> Self {
        Self::with_default_threshold()
    }
}

/// Render a single snapshot with the default reporter
pub fn render_single(name: &str, sizes: &[PageSize]) -> String {
    SizeReporter::default().render_single(name, sizes)
}

/// Render a comparison with the default reporter
pub fn render_comparison(
    name: &str,
    reference: &[PageSize],
    current: &[PageSize],
) -> Option<String> {
    SizeReporter::default().render_comparison(name, reference, current)
}
