//! The report flow: load the file, aggregate, render

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use logsift_core::{LevelCounts, LogLevel, LogRecord};
use logsift_report::{count_by_level, filter_by_level, load_logs, render_counts, render_details};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the report flow for one log file.
///
/// Loads and validates the whole file (aborting on the first invalid line),
/// then renders the counts table, plus the details for `level` when given.
pub fn execute(
    path: &Path,
    level: Option<LogLevel>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let records = load_logs(path)?;
    info!(records = records.len(), path = %path.display(), "log file loaded");

    let counts = count_by_level(&records);
    let details = level.map(|level| DetailsPayload {
        level,
        records: filter_by_level(&records, level),
    });

    writer.render(&ReportPayload { counts, details })
}

/// Parse the optional `[level]` positional into a canonical level.
///
/// An unknown value is a usage error (exit code 1), reported before any
/// file read happens.
pub fn parse_level(s: &str) -> Result<LogLevel, CliError> {
    LogLevel::from_str_loose(s).ok_or_else(|| {
        CliError::Usage(format!(
            "invalid level filter: {s} (expected: debug, info, warning, error)"
        ))
    })
}

/// Full report payload: counts plus optional per-level details.
#[derive(Serialize)]
struct ReportPayload {
    counts: LevelCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<DetailsPayload>,
}

/// Details block for one requested level.
#[derive(Serialize)]
struct DetailsPayload {
    level: LogLevel,
    records: Vec<LogRecord>,
}

impl Render for ReportPayload {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{}", render_counts(&self.counts))?;
        if let Some(details) = &self.details {
            writeln!(w)?;
            writeln!(w, "{}", render_details(&details.records, details.level))?;
        }
        Ok(())
    }
}
