//! Month summary log: one CSV row per processed month.

use anyhow::{Context, Result, ensure};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::debug;

use crate::stats::MonthSummary;

/// Column order of the summary log, as written by [`append_summary`].
pub const SUMMARY_COLUMNS: &[&str] = &[
    "generated_at",
    "year",
    "month",
    "source",
    "lines",
    "malformed",
    "rejected",
    "admitted",
    "spilled",
    "dropped_writes",
    "inside_inside_trips",
    "inside_outside_trips",
    "outside_inside_trips",
    "outside_outside_trips",
    "inside_inside_passengers",
    "inside_outside_passengers",
    "outside_inside_passengers",
    "outside_outside_passengers",
    "departure_trips",
    "arrival_trips",
    "flow_trips",
    "departure_passengers",
    "arrival_passengers",
    "flow_passengers",
];

/// Appends `summary` as one row of the summary log at `path`.
///
/// A missing file (and any missing parent directory) is created with a
/// header row. An existing non-empty file must carry the same header, so
/// months from an older layout are never mixed into one log.
///
/// # Errors
///
/// Returns an error on I/O failure or when the existing header differs from
/// [`SUMMARY_COLUMNS`].
pub fn append_summary(path: &Path, summary: &MonthSummary) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating '{}'", dir.display()))?;
    }

    let has_rows = path.metadata().map(|m| m.len() > 0).unwrap_or(false);
    if has_rows {
        let mut reader = ReaderBuilder::new().from_path(path)?;
        let header = reader.headers()?;
        ensure!(
            header.iter().eq(SUMMARY_COLUMNS.iter().copied()),
            "'{}' has a different column layout",
            path.display()
        );
    }
    debug!(
        path = %path.display(),
        year = summary.year,
        month = summary.month,
        has_rows,
        "Appending month summary"
    );

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening '{}'", path.display()))?;

    let mut writer = WriterBuilder::new().has_headers(!has_rows).from_writer(file);
    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}
