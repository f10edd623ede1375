//! # line-counter
//!
//! Counts the lines in a directory tree, honoring gitignore-style exclusions
//! and optionally breaking the total down by file extension.
//!
//! ## Quick Start
//!
//! ```no_run
//! use line_counter::{Config, OutputFormat};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .root_dir("./src")
//!     .ignore_file("IGNORE.txt")
//!     .per_category(true)
//!     .format(OutputFormat::Json)
//!     .build()?;
//!
//! let report = line_counter::run(config)?;
//! println!("{}", report.render()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. **Ignore rules**: compiled once from the pattern file
//! 2. **Counter**: walks the tree, pruning ignored directories
//! 3. **Line counter**: streams each file and counts terminators
//! 4. **Report**: renders the summary as text or JSON

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod counter;
mod error;
mod ignore_rules;
mod line_counter;
mod pipeline;
mod report;
mod summary;

pub use config::{Config, ConfigBuilder, DEFAULT_IGNORE_FILE, OutputFormat};
pub use counter::{Counter, count};
pub use error::{Error, Result};
pub use ignore_rules::IgnoreRules;
pub use line_counter::{DEFAULT_BUFFER_SIZE, LineCounter};
pub use pipeline::Pipeline;
pub use report::{Report, abbreviate};
pub use summary::{Summary, category_key};

/// Runs a complete count with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The ignore file is missing or malformed
/// - The walk fails or any file cannot be opened or read
pub fn run(config: Config) -> Result<Report> {
    Pipeline::new(config)?.run()
}
