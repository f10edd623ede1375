//! Rendering of a finished count as text or JSON.

use crate::{config::OutputFormat, error::Result, summary::Summary};
use serde::Serialize;
use std::{collections::BTreeMap, fmt::Write as _, time::Duration};

const RULE_WIDTH: usize = 41;

/// A completed count plus what is needed to print it.
#[derive(Debug, Clone)]
pub struct Report {
    /// The aggregated line counts
    pub summary: Summary,

    /// Wall-clock time of the run, when it should be shown
    pub runtime: Option<Duration>,

    /// Output format
    pub format: OutputFormat,

    /// Abbreviated numbers for text, indented JSON
    pub pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total_lines: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<&'a BTreeMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    runtime: Option<f64>,
}

impl Report {
    /// Renders the report in its configured format, without a trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if JSON encoding fails.
    pub fn render(&self) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    /// Renders the plain-text form.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "total {}", self.number(self.summary.total_lines()));

        if self.summary.per_category().is_some() {
            let _ = write!(out, "\n{}", "-".repeat(RULE_WIDTH));
            for (key, lines) in self.summary.sorted_categories() {
                let _ = write!(out, "\n{key:<30} {:>10}", self.number(lines));
            }
        }

        if let Some(runtime) = self.runtime {
            let _ = write!(out, "\n\nruntime {:.2}s", runtime.as_secs_f64());
        }

        out
    }

    /// Renders the JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn render_json(&self) -> Result<String> {
        let json = JsonReport {
            total_lines: self.summary.total_lines(),
            counts: self.summary.per_category(),
            runtime: self.runtime.map(|d| d.as_secs_f64()),
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(rendered)
    }

    fn number(&self, n: u64) -> String {
        if self.pretty {
            abbreviate(n)
        } else {
            n.to_string()
        }
    }
}

/// Formats `n` in whole thousands with a `K` suffix once it reaches 1000.
///
/// ```
/// assert_eq!(line_counter::abbreviate(999), "999");
/// assert_eq!(line_counter::abbreviate(23_456), "23K");
/// ```
#[must_use]
pub fn abbreviate(n: u64) -> String {
    if n < 1000 {
        n.to_string()
    } else {
        format!("{}K", n / 1000)
    }
}
