//! Streams raw trip lines through parse, filter and accumulate.

use std::io::BufRead;

use anyhow::{Result, ensure};
use tracing::{debug, warn};

use crate::accumulator::MonthAccumulator;
use crate::parser::{RecordContext, parse_record};
use crate::validity::{ValidityThresholds, is_valid};

/// Line counters for one ingest pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: u64,
    pub blank: u64,
    pub malformed: u64,
    pub rejected: u64,
    pub admitted: u64,
    pub spilled: u64,
    pub dropped_writes: u64,
}

/// Feeds every line of `reader` into `acc`.
///
/// Malformed lines are logged and skipped; records failing the validity
/// filter are counted silently.
///
/// # Errors
///
/// Fails on read errors, or up front when `ctx` buckets time at a different
/// resolution than the accumulator's buffers.
pub fn ingest_lines<R: BufRead>(
    reader: R,
    acc: &mut MonthAccumulator,
    ctx: &RecordContext<'_>,
    thresholds: &ValidityThresholds,
) -> Result<IngestStats> {
    let grid = acc.grid();
    ensure!(
        ctx.buckets_per_hour == grid.buckets_per_hour,
        "record context uses {} buckets per hour, month buffers use {}",
        ctx.buckets_per_hour,
        grid.buckets_per_hour
    );

    let target = acc.year_month();
    let mut stats = IngestStats::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        stats.lines += 1;

        if line.trim().is_empty() {
            stats.blank += 1;
            continue;
        }

        let record = match parse_record(&line, ctx) {
            Ok(record) => record,
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "Skipping malformed record");
                stats.malformed += 1;
                continue;
            }
        };

        if !is_valid(&record, target, thresholds) {
            stats.rejected += 1;
            continue;
        }

        let outcome = acc.update(&record);
        stats.admitted += 1;
        if outcome.spilled {
            stats.spilled += 1;
        }
        stats.dropped_writes += outcome.dropped as u64;
    }

    debug!(month = %target, ?stats, "Ingest pass complete");
    Ok(stats)
}
