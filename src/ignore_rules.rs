//! Gitignore-style exclusion rules.
//!
//! Patterns are anchored at the directory being counted, not at the
//! location of the pattern file, so the same `IGNORE.txt` can be reused
//! against any tree.

use crate::error::{Error, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;
use tracing::debug;

/// A compiled, immutable set of ignore patterns.
///
/// Build it once per traversal with [`IgnoreRules::compile`] and share it for
/// every path check. Precedence follows gitignore: later patterns win, and a
/// `!pattern` re-includes a path excluded by an earlier one.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Compiles the patterns in `pattern_file`, anchored at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or any pattern in
    /// it fails to parse.
    pub fn compile(pattern_file: impl AsRef<Path>, root: impl AsRef<Path>) -> Result<Self> {
        let pattern_file = pattern_file.as_ref();
        let mut builder = GitignoreBuilder::new(root.as_ref());

        if let Some(err) = builder.add(pattern_file) {
            return Err(Error::config(format!(
                "Failed to load ignore file '{}': {}",
                pattern_file.display(),
                err
            )));
        }

        let rules = Self::finish(&builder)?;
        debug!(
            "Compiled {} ignore pattern(s) from {}",
            rules.len(),
            pattern_file.display()
        );
        Ok(rules)
    }

    /// Compiles patterns supplied in memory, one gitignore line each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any pattern fails to parse.
    pub fn from_lines<I, S>(root: impl AsRef<Path>, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new(root.as_ref());
        for line in lines {
            let line = line.as_ref();
            builder.add_line(None, line).map_err(|e| {
                Error::config(format!("Invalid ignore pattern '{line}': {e}"))
            })?;
        }
        Self::finish(&builder)
    }

    /// Rules that exclude nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
        }
    }

    fn finish(builder: &GitignoreBuilder) -> Result<Self> {
        let matcher = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build ignore rules: {e}")))?;
        Ok(Self { matcher })
    }

    /// Returns true if `path` should be excluded.
    ///
    /// `is_dir` must say whether the path is a directory so that patterns
    /// with a trailing `/` only apply to directories.
    #[must_use]
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        self.matcher.matched(path, is_dir).is_ignore()
    }

    /// Number of compiled patterns, negations included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    /// Returns true if no patterns were compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn rules(lines: &[&str]) -> IgnoreRules {
        IgnoreRules::from_lines("root", lines).unwrap()
    }

    #[test]
    fn test_extension_pattern_matches_anywhere() {
        let rules = rules(&["*.md"]);
        assert!(rules.matches(Path::new("root/README.md"), false));
        assert!(rules.matches(Path::new("root/docs/guide.md"), false));
        assert!(!rules.matches(Path::new("root/main.go"), false));
    }

    #[test]
    fn test_directory_only_pattern() {
        let rules = rules(&["build/"]);
        assert!(rules.matches(Path::new("root/build"), true));
        assert!(!rules.matches(Path::new("root/build"), false));
    }

    #[test]
    fn test_anchored_pattern_is_relative_to_root() {
        let rules = rules(&["/vendor"]);
        assert!(rules.matches(Path::new("root/vendor"), true));
        assert!(!rules.matches(Path::new("root/src/vendor"), true));
    }

    #[test]
    fn test_double_star() {
        let rules = rules(&["**/generated/**"]);
        assert!(rules.matches(Path::new("root/a/generated/x.rs"), false));
        assert!(!rules.matches(Path::new("root/a/x.rs"), false));
    }

    #[test]
    fn test_negation_reincludes_later() {
        let rules = rules(&["*.log", "!keep.log"]);
        assert!(rules.matches(Path::new("root/debug.log"), false));
        assert!(!rules.matches(Path::new("root/keep.log"), false));
    }

    #[test]
    fn test_later_pattern_overrides_negation() {
        let rules = rules(&["!keep.log", "*.log"]);
        assert!(rules.matches(Path::new("root/keep.log"), false));
    }

    #[test]
    fn test_comments_and_blank_lines_are_ignored() {
        let rules = rules(&["# comment", "", "*.tmp"]);
        assert_eq!(rules.len(), 1);
        assert!(rules.matches(Path::new("root/a.tmp"), false));
    }

    #[test]
    fn test_empty_rules_match_nothing() {
        let rules = IgnoreRules::empty();
        assert!(rules.is_empty());
        assert!(!rules.matches(Path::new("anything"), true));
    }

    #[test]
    fn test_compile_from_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let ignore_file = temp.child("IGNORE.txt");
        ignore_file.write_str("*.md\ntarget/\n").unwrap();

        let root = temp.path().join("project");
        let rules = IgnoreRules::compile(ignore_file.path(), &root).unwrap();

        assert_eq!(rules.len(), 2);
        assert!(rules.matches(&root.join("notes.md"), false));
        assert!(rules.matches(&root.join("target"), true));
        assert!(!rules.matches(&root.join("src/lib.rs"), false));
    }

    #[test]
    fn test_compile_missing_file_is_config_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let err = IgnoreRules::compile(temp.path().join("nope.txt"), temp.path()).unwrap_err();

        assert!(err.is_config());
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_malformed_pattern_is_config_error() {
        let err = IgnoreRules::from_lines("root", ["src/[z-a].rs"]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_malformed_pattern_in_file_is_config_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let ignore_file = temp.child("IGNORE.txt");
        ignore_file.write_str("*.md\nsrc/[z-a].rs\n").unwrap();

        let err = IgnoreRules::compile(ignore_file.path(), temp.path()).unwrap_err();
        assert!(err.is_config());
    }
}
