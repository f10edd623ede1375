use anyhow::Context;
use clap::Parser;
use line_counter::{Config, DEFAULT_IGNORE_FILE, OutputFormat, Pipeline};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "line-counter",
    version,
    author,
    about = "Count lines of code in a directory",
    long_about = "Count lines of code in a directory.\n\n\
    Every file under DIRECTORY is counted unless it matches a pattern in the \
    ignore file (gitignore syntax, anchored at DIRECTORY). Ignored directories \
    are not descended into.\n\n\
    USAGE EXAMPLES:\n  \
      # Total for a project\n  \
      line-counter ./my-project\n\n  \
      # Per-extension breakdown with timing\n  \
      line-counter -st ./my-project\n\n  \
      # Indented JSON with a custom ignore file\n  \
      line-counter -jp --ignore-file .countignore ./src"
)]
struct Cli {
    /// Directory to count
    #[arg(value_name = "DIRECTORY")]
    dir: PathBuf,

    /// Get separate per-extension count
    #[arg(short, long)]
    separate: bool,

    /// Show total execution time
    #[arg(short, long)]
    time: bool,

    /// Print output in JSON format
    #[arg(short, long)]
    json: bool,

    /// Pretty formatting: indented JSON, or abbreviated numbers (23K) for text
    #[arg(short, long)]
    pretty: bool,

    /// Gitignore-style pattern file
    #[arg(
        short,
        long,
        default_value = DEFAULT_IGNORE_FILE,
        value_name = "FILE",
        env = "LINE_COUNTER_IGNORE_FILE"
    )]
    ignore_file: PathBuf,

    /// Verbose logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let config = Config::builder()
        .root_dir(&cli.dir)
        .ignore_file(cli.ignore_file)
        .per_category(cli.separate)
        .format(format)
        .pretty(cli.pretty)
        .show_runtime(cli.time)
        .build()
        .context("Failed to build configuration")?;

    let report = Pipeline::new(config)
        .context("Failed to prepare line count")?
        .run()
        .with_context(|| format!("Failed to count lines in {}", cli.dir.display()))?;

    println!("{}", report.render().context("Failed to render report")?);

    Ok(())
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("line_counter=warn"),
        1 => EnvFilter::new("line_counter=info"),
        2 => EnvFilter::new("line_counter=debug"),
        _ => EnvFilter::new("line_counter=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}
