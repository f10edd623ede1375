use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the line-counter library.
///
/// Every variant aborts the whole count; no partial summary is ever returned
/// alongside an error.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error: invalid settings or an unusable ignore file.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// A file could not be opened for counting.
    #[error("Cannot open '{path}': {message}")]
    FileAccess {
        /// Path of the file that failed to open
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// A read failed part way through a file.
    #[error("Failed reading '{path}': {message}")]
    Read {
        /// Path of the file being read
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// The directory walk itself failed.
    #[error("Failed to traverse '{path}': {message}")]
    Traversal {
        /// Path the walk was visiting when it failed
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// JSON serialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a file access error with path context.
    #[must_use]
    pub fn file_access(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a read error with path context.
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a traversal error from a walk failure.
    ///
    /// The offending path is taken from the walk error when it carries one,
    /// otherwise `fallback` (usually the traversal root) is reported.
    #[must_use]
    pub fn traversal(fallback: &Path, source: &ignore::Error) -> Self {
        let (path, inner) = split_walk_error(source);
        Self::Traversal {
            path: path.unwrap_or(fallback).to_path_buf(),
            message: inner.to_string(),
        }
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if this is a file access error.
    #[must_use]
    pub const fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }

    /// Returns true if this is a read error.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Returns true if this is a traversal error.
    #[must_use]
    pub const fn is_traversal(&self) -> bool {
        matches!(self, Self::Traversal { .. })
    }

    /// Returns the path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileAccess { path, .. } | Self::Read { path, .. } | Self::Traversal { path, .. } => {
                Some(path.as_path())
            }
            Self::Config { .. } | Self::Serialization { .. } => None,
        }
    }
}

/// Peels `WithPath`/`WithDepth` wrappers off a walk error.
fn split_walk_error(err: &ignore::Error) -> (Option<&Path>, &ignore::Error) {
    match err {
        ignore::Error::WithPath { path, err } => {
            let (inner_path, inner) = split_walk_error(err);
            (inner_path.or(Some(path.as_path())), inner)
        }
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            split_walk_error(err)
        }
        _ => (None, err),
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}
