use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::accumulator::{MonthOutput, PASSENGERS, TRIPS};
use crate::ingest::IngestStats;

/// One summary row per processed month.
#[derive(Debug, Default, Serialize)]
pub struct MonthSummary {
    pub generated_at: DateTime<Utc>,
    pub year: i32,
    pub month: u32,
    pub source: Option<String>,

    // ingest
    pub lines: u64,
    pub malformed: u64,
    pub rejected: u64,
    pub admitted: u64,
    pub spilled: u64,
    pub dropped_writes: u64,

    // boundary counters, trips then passengers
    pub inside_inside_trips: u64,
    pub inside_outside_trips: u64,
    pub outside_inside_trips: u64,
    pub outside_outside_trips: u64,
    pub inside_inside_passengers: u64,
    pub inside_outside_passengers: u64,
    pub outside_inside_passengers: u64,
    pub outside_outside_passengers: u64,

    // histogram totals
    pub departure_trips: u64,
    pub arrival_trips: u64,
    pub flow_trips: u64,
    pub departure_passengers: u64,
    pub arrival_passengers: u64,
    pub flow_passengers: u64,
}

impl MonthSummary {
    pub fn from_output(output: &MonthOutput, ingest: &IngestStats) -> Self {
        let ym = output.histograms.year_month();
        let totals = output.histograms.totals();
        let b = &output.boundary;

        MonthSummary {
            generated_at: Utc::now(),
            year: ym.year,
            month: ym.month,
            source: None,
            lines: ingest.lines,
            malformed: ingest.malformed,
            rejected: ingest.rejected,
            admitted: ingest.admitted,
            spilled: ingest.spilled,
            dropped_writes: output.dropped_writes,
            inside_inside_trips: b[[0, 0, TRIPS]],
            inside_outside_trips: b[[0, 1, TRIPS]],
            outside_inside_trips: b[[1, 0, TRIPS]],
            outside_outside_trips: b[[1, 1, TRIPS]],
            inside_inside_passengers: b[[0, 0, PASSENGERS]],
            inside_outside_passengers: b[[0, 1, PASSENGERS]],
            outside_inside_passengers: b[[1, 0, PASSENGERS]],
            outside_outside_passengers: b[[1, 1, PASSENGERS]],
            departure_trips: totals.departure_trips,
            arrival_trips: totals.arrival_trips,
            flow_trips: totals.flow_trips,
            departure_passengers: totals.departure_passengers,
            arrival_passengers: totals.arrival_passengers,
            flow_passengers: totals.flow_passengers,
        }
    }

    /// Share of admitted trips among parsed records, in percent.
    pub fn admitted_pct(&self) -> f64 {
        let parsed = self.admitted + self.rejected;
        if parsed == 0 {
            0.0
        } else {
            (self.admitted as f64 / parsed as f64) * 100.0
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}
