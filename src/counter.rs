use crate::{
    error::{Error, Result},
    ignore_rules::IgnoreRules,
    line_counter::LineCounter,
    summary::Summary,
};
use ignore::{DirEntry, WalkBuilder};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, trace};

/// Walks a directory tree and totals the line counts of every file the
/// ignore rules let through.
#[derive(Debug, Clone)]
pub struct Counter {
    root_dir: PathBuf,
    rules: Arc<IgnoreRules>,
    per_category: bool,
    line_counter: LineCounter,
}

impl Counter {
    /// Creates a counter for the tree under `root_dir`.
    #[must_use]
    pub fn new(
        root_dir: impl Into<PathBuf>,
        rules: IgnoreRules,
        per_category: bool,
        line_counter: LineCounter,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            rules: Arc::new(rules),
            per_category,
            line_counter,
        }
    }

    /// Walks the tree depth-first and returns the accumulated summary.
    ///
    /// Ignored directories are pruned without being read; ignored files are
    /// skipped. The root itself is never tested against the rules.
    ///
    /// # Errors
    ///
    /// Aborts on the first walk failure ([`Error::Traversal`]) or the first
    /// file that cannot be opened or read ([`Error::FileAccess`],
    /// [`Error::Read`]). No partial summary is returned.
    pub fn count(&self) -> Result<Summary> {
        debug!("Counting lines under {}", self.root_dir.display());

        let mut summary = Summary::new(self.per_category);
        let mut files = 0usize;

        for result in self.walker().build() {
            let entry = result.map_err(|e| Error::traversal(&self.root_dir, &e))?;
            if is_dir(&entry) {
                continue;
            }

            let lines = self.line_counter.count_lines(entry.path())?;
            summary.record(entry.path(), lines);
            files += 1;
        }

        debug!(
            "Counted {} lines in {} files under {}",
            summary.total_lines(),
            files,
            self.root_dir.display()
        );
        Ok(summary)
    }

    /// A sequential walk with every built-in filter turned off, so the only
    /// exclusions are the ones in `self.rules`.
    fn walker(&self) -> WalkBuilder {
        let rules = Arc::clone(&self.rules);

        let mut builder = WalkBuilder::new(&self.root_dir);
        builder
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let dir = is_dir(entry);
                if rules.matches(entry.path(), dir) {
                    if dir {
                        debug!("Pruning ignored directory {}", entry.path().display());
                    } else {
                        trace!("Skipping ignored file {}", entry.path().display());
                    }
                    return false;
                }
                true
            });
        builder
    }
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Counts the lines under `root_dir`, skipping whatever `rules` match.
///
/// Uses the default read buffer size. When `per_category` is set the
/// summary also carries a breakdown keyed by [`crate::category_key`].
///
/// # Errors
///
/// See [`Counter::count`].
pub fn count(root_dir: &Path, rules: IgnoreRules, per_category: bool) -> Result<Summary> {
    Counter::new(root_dir, rules, per_category, LineCounter::default()).count()
}
