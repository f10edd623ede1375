use std::collections::BTreeMap;
use std::path::Path;

/// Aggregate line counts for one traversal.
///
/// `total_lines` always equals the sum of every recorded file; when the
/// per-category breakdown is enabled it also equals the sum of the
/// breakdown's values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    total_lines: u64,
    per_category: Option<BTreeMap<String, u64>>,
}

impl Summary {
    /// Creates an empty summary, with or without a per-category breakdown.
    #[must_use]
    pub fn new(per_category: bool) -> Self {
        Self {
            total_lines: 0,
            per_category: per_category.then(BTreeMap::new),
        }
    }

    /// Adds the line count of the file at `path`.
    pub fn record(&mut self, path: &Path, lines: u64) {
        self.total_lines += lines;
        if let Some(categories) = self.per_category.as_mut() {
            *categories.entry(category_key(path)).or_insert(0) += lines;
        }
    }

    /// Total lines across all counted files.
    #[must_use]
    pub const fn total_lines(&self) -> u64 {
        self.total_lines
    }

    /// Lines per category key, if the breakdown was requested.
    #[must_use]
    pub const fn per_category(&self) -> Option<&BTreeMap<String, u64>> {
        self.per_category.as_ref()
    }

    /// Categories ordered by line count, largest first; ties by key.
    ///
    /// Empty when the breakdown was not requested.
    #[must_use]
    pub fn sorted_categories(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self
            .per_category
            .iter()
            .flatten()
            .map(|(key, &lines)| (key.as_str(), lines))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }
}

/// Returns the category a file is tallied under.
///
/// That is the file name from its last `.` onwards (`.go`, `.gz` for
/// `a.tar.gz`, `.gitignore` for a dotfile), or the whole file name when it
/// has no `.` at all (`README`, `Makefile`).
#[must_use]
pub fn category_key(path: &Path) -> String {
    let name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());

    match name.rfind('.') {
        Some(dot) => name[dot..].to_string(),
        None => name.into_owned(),
    }
}
