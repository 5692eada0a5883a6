//! CLI entry point for the trip grid accumulator.
//!
//! Provides subcommands for accumulating one month of trip records into
//! grid histograms and for listing month ranges with their bucket counts.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use flate2::read::GzDecoder;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use trip_grid::{
    accumulator::MonthAccumulator,
    calendar::{YearMonth, month_sequence},
    config::RunConfig,
    geo::Haversine,
    ingest::ingest_lines,
    output::append_summary,
    parser::RecordContext,
    stats::MonthSummary,
};

#[derive(Parser)]
#[command(name = "trip_grid")]
#[command(about = "Accumulate trip records into monthly grid histograms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accumulate one month of trips from a CSV file (optionally .gz)
    Ingest {
        /// Trip record file
        #[arg(short, long)]
        input: String,

        /// Target month, YYYY-MM
        #[arg(short, long)]
        month: YearMonth,

        /// JSON run configuration
        #[arg(short, long)]
        config: Option<String>,

        /// CSV file to append the month summary to
        #[arg(short, long, default_value = "summary.csv")]
        summary: String,

        /// Grid width, overrides the config file
        #[arg(long)]
        width: Option<usize>,

        /// Grid height, overrides the config file
        #[arg(long)]
        height: Option<usize>,

        /// Time buckets per hour, overrides the config file
        #[arg(short = 'n', long)]
        buckets_per_hour: Option<u32>,
    },
    /// List months in a range with their day and bucket counts
    Months {
        /// First month, YYYY-MM
        #[arg(long)]
        from: YearMonth,

        /// Last month, YYYY-MM (inclusive)
        #[arg(long)]
        to: YearMonth,

        /// Time buckets per hour
        #[arg(short = 'n', long, default_value_t = 4)]
        buckets_per_hour: u32,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/trip_grid.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("trip_grid.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest {
            input,
            month,
            config,
            summary,
            width,
            height,
            buckets_per_hour,
        } => {
            let mut config = match config {
                Some(path) => RunConfig::load(&path)?,
                None => RunConfig::default(),
            };
            if let Some(width) = width {
                config.grid.width = width;
            }
            if let Some(height) = height {
                config.grid.height = height;
            }
            if let Some(n) = buckets_per_hour {
                config.grid.buckets_per_hour = n;
            }
            config.grid.validate()?;
            if config.grid.height < config.grid.width {
                warn!(
                    width = config.grid.width,
                    height = config.grid.height,
                    "Rows are scaled by the grid width; cells beyond the height will be dropped"
                );
            }

            ingest_month(&input, month, &config, &summary)?;
        }
        Commands::Months {
            from,
            to,
            buckets_per_hour,
        } => {
            ensure!(from <= to, "--to {to} precedes --from {from}");
            ensure!(
                (1..=60).contains(&buckets_per_hour),
                "buckets per hour must be within 1..=60"
            );

            for ym in month_sequence(from, to) {
                info!(
                    month = %ym,
                    days = ym.days(),
                    samples = ym.samples(buckets_per_hour),
                    "Month"
                );
            }
        }
    }

    Ok(())
}

/// Opens a trip file, decompressing `.gz` transparently.
fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("opening '{path}'"))?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Accumulates one month from `input` and appends its summary to `summary_path`.
#[tracing::instrument(skip(config))]
fn ingest_month(input: &str, month: YearMonth, config: &RunConfig, summary_path: &str) -> Result<()> {
    let grid = config.grid;
    info!(
        width = grid.width,
        height = grid.height,
        bucket_minutes = grid.bucket_minutes(),
        buckets = month.samples(grid.buckets_per_hour),
        "Allocating month buffers"
    );
    let mut acc = MonthAccumulator::new(month, grid);

    let ctx = RecordContext::new(&config.projection, &Haversine, grid.buckets_per_hour)?;

    let stats = ingest_lines(open_input(input)?, &mut acc, &ctx, &config.thresholds)?;
    if stats.malformed > 0 {
        warn!(malformed = stats.malformed, "Some records could not be parsed");
    }

    let (output, spillover) = acc.finish();
    let spill = spillover.totals();
    info!(
        next_month = %spillover.year_month(),
        arrival_trips = spill.arrival_trips,
        flow_trips = spill.flow_trips,
        "Spillover into following month"
    );

    let summary = MonthSummary::from_output(&output, &stats).with_source(input);
    debug!("{:#?}", summary);
    append_summary(Path::new(summary_path), &summary)?;

    info!(
        admitted = summary.admitted,
        rejected = summary.rejected,
        admitted_pct = summary.admitted_pct(),
        dropped_writes = summary.dropped_writes,
        "Month processed"
    );
    Ok(())
}
