use crate::error::{Error, Result};
use crate::line_counter::DEFAULT_BUFFER_SIZE;
use std::path::PathBuf;

const DEFAULT_ROOT_DIR: &str = ".";

/// Default name of the ignore-pattern file.
pub const DEFAULT_IGNORE_FILE: &str = "IGNORE.txt";

/// How the final report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `total N` followed by an optional breakdown table
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Configuration for a line count.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Directory to count
    pub root_dir: PathBuf,

    /// Gitignore-style pattern file, anchored at `root_dir`
    pub ignore_file: PathBuf,

    /// Collect a per-extension breakdown
    pub per_category: bool,

    /// Read chunk size for the line counter
    pub buffer_size: usize,

    /// Output format
    pub format: OutputFormat,

    /// Abbreviated numbers for text, indented JSON
    pub pretty: bool,

    /// Include the wall-clock runtime in the report
    pub show_runtime: bool,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use line_counter::Config;
    ///
    /// let config = Config::builder()
    ///     .root_dir(".")
    ///     .per_category(true)
    ///     .build()
    ///     .expect("valid configuration");
    /// assert!(config.per_category);
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// The ignore file is not checked here; it is read when the rules are
    /// compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Root directory doesn't exist or is not a directory
    /// - Buffer size is zero
    pub fn validate(&self) -> Result<()> {
        if !self.root_dir.exists() {
            return Err(Error::config(format!(
                "Root directory does not exist: {}",
                self.root_dir.display()
            )));
        }

        if !self.root_dir.is_dir() {
            return Err(Error::config(format!(
                "Root path is not a directory: {}",
                self.root_dir.display()
            )));
        }

        if self.buffer_size == 0 {
            return Err(Error::config("buffer_size must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
            per_category: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            format: OutputFormat::Text,
            pretty: false,
            show_runtime: false,
        }
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    root_dir: Option<PathBuf>,
    ignore_file: Option<PathBuf>,
    per_category: bool,
    buffer_size: Option<usize>,
    format: Option<OutputFormat>,
    pretty: bool,
    show_runtime: bool,
}

impl ConfigBuilder {
    /// Sets the directory to count.
    #[must_use]
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(path.into());
        self
    }

    /// Sets the ignore-pattern file.
    #[must_use]
    pub fn ignore_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore_file = Some(path.into());
        self
    }

    /// Enables or disables the per-extension breakdown.
    #[must_use]
    pub fn per_category(mut self, enabled: bool) -> Self {
        self.per_category = enabled;
        self
    }

    /// Sets the read chunk size in bytes.
    #[must_use]
    pub fn buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = Some(bytes);
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Enables or disables pretty output.
    #[must_use]
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Enables or disables the runtime line.
    #[must_use]
    pub fn show_runtime(mut self, enabled: bool) -> Self {
        self.show_runtime = enabled;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            root_dir: self
                .root_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT_DIR)),
            ignore_file: self
                .ignore_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IGNORE_FILE)),
            per_category: self.per_category,
            buffer_size: self.buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE),
            format: self.format.unwrap_or_default(),
            pretty: self.pretty,
            show_runtime: self.show_runtime,
        };

        config.validate()?;
        Ok(config)
    }
}
