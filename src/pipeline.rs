use crate::{
    config::Config,
    counter::Counter,
    error::Result,
    ignore_rules::IgnoreRules,
    line_counter::LineCounter,
    report::Report,
};
use std::time::Instant;
use tracing::{info, instrument};

/// Runs one complete line count: rules, walk, timing.
pub struct Pipeline {
    config: Config,
    counter: Counter,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    ///
    /// The ignore file is read and compiled here, exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The ignore file is missing or contains an invalid pattern
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let rules = IgnoreRules::compile(&config.ignore_file, &config.root_dir)?;
        let counter = Counter::new(
            config.root_dir.clone(),
            rules,
            config.per_category,
            LineCounter::new(config.buffer_size),
        );

        Ok(Self { config, counter })
    }

    /// Counts the tree and returns the finished report.
    ///
    /// # Errors
    ///
    /// Returns the first traversal, open or read error encountered.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use line_counter::{Config, Pipeline};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::builder()
    ///     .root_dir("./src")
    ///     .ignore_file("IGNORE.txt")
    ///     .per_category(true)
    ///     .build()?;
    ///
    /// let report = Pipeline::new(config)?.run()?;
    /// println!("{}", report.render()?);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(root_dir = %self.config.root_dir.display()))]
    pub fn run(self) -> Result<Report> {
        let start_time = Instant::now();

        let summary = self.counter.count()?;
        let elapsed = start_time.elapsed();

        info!(
            "✓ Counted {} lines in {:.2}s",
            summary.total_lines(),
            elapsed.as_secs_f64()
        );

        Ok(Report {
            summary,
            runtime: self.config.show_runtime.then_some(elapsed),
            format: self.config.format,
            pretty: self.config.pretty,
        })
    }
}
