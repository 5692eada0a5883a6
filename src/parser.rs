//! Parser for raw comma-delimited trip records.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;

use crate::bucket::time_bucket;
use crate::error::{ConfigError, MalformedRecordError};
use crate::geo::{GeodesicDistance, GridPoint, Projector};

const START_TIME_FIELD: usize = 5;
const END_TIME_FIELD: usize = 6;
const PASSENGER_FIELD: usize = 7;
const DISTANCE_FIELD: usize = 9;
const START_LON_FIELD: usize = 10;
const START_LAT_FIELD: usize = 11;
const END_LON_FIELD: usize = 12;
const END_LAT_FIELD: usize = 13;
const MIN_FIELDS: usize = END_LAT_FIELD + 1;

const SECONDS_PER_DAY: i64 = 86_400;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}")
        .expect("timestamp pattern compiles")
});

/// A single trip, normalized and discretized.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_pos: GridPoint,
    pub end_pos: GridPoint,
    /// Meters, as reported by the source.
    pub reported_distance: f64,
    /// Meters, computed from the raw coordinates.
    pub geodesic_distance: f64,
    pub start_bucket: usize,
    pub end_bucket: usize,
    pub passenger_count: u32,
    /// Sub-day part of the elapsed time, in seconds. Whole days are
    /// discarded; negative when the record ends before it starts.
    pub duration_seconds: i64,
}

/// Collaborators and resolution needed to turn a raw line into a [`TripRecord`].
pub struct RecordContext<'a> {
    pub projector: &'a dyn Projector,
    pub geodesic: &'a dyn GeodesicDistance,
    pub buckets_per_hour: u32,
}

impl<'a> RecordContext<'a> {
    /// Builds a context, rejecting a resolution outside `1..=60`.
    pub fn new(
        projector: &'a dyn Projector,
        geodesic: &'a dyn GeodesicDistance,
        buckets_per_hour: u32,
    ) -> Result<Self, ConfigError> {
        if !(1..=60).contains(&buckets_per_hour) {
            return Err(ConfigError::Resolution(buckets_per_hour));
        }
        Ok(Self {
            projector,
            geodesic,
            buckets_per_hour,
        })
    }
}

/// Parses one raw record.
///
/// # Errors
///
/// Returns [`MalformedRecordError`] when a field is missing, a timestamp or
/// number does not parse, or the projector rejects a coordinate.
///
/// # Panics
///
/// Panics if `ctx.buckets_per_hour` is outside `1..=60`; contexts built with
/// [`RecordContext::new`] never are.
pub fn parse_record(line: &str, ctx: &RecordContext<'_>) -> Result<TripRecord, MalformedRecordError> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(MalformedRecordError::MissingField {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let start_time = parse_timestamp(&fields, START_TIME_FIELD)?;
    let end_time = parse_timestamp(&fields, END_TIME_FIELD)?;

    let slon: f64 = parse_field(&fields, START_LON_FIELD)?;
    let slat: f64 = parse_field(&fields, START_LAT_FIELD)?;
    let elon: f64 = parse_field(&fields, END_LON_FIELD)?;
    let elat: f64 = parse_field(&fields, END_LAT_FIELD)?;

    let start_pos = ctx.projector.project(slon, slat)?;
    let end_pos = ctx.projector.project(elon, elat)?;
    let geodesic_distance = ctx.geodesic.distance((slat, slon), (elat, elon));

    let n = ctx.buckets_per_hour;
    let start_bucket = time_bucket(start_time.day(), start_time.hour(), start_time.minute(), n);
    let end_bucket = time_bucket(end_time.day(), end_time.hour(), end_time.minute(), n);

    Ok(TripRecord {
        start_time,
        end_time,
        start_pos,
        end_pos,
        reported_distance: parse_field(&fields, DISTANCE_FIELD)?,
        geodesic_distance,
        start_bucket,
        end_bucket,
        passenger_count: parse_field(&fields, PASSENGER_FIELD)?,
        duration_seconds: sub_day_seconds((end_time - start_time).num_seconds()),
    })
}

/// Keeps the sign of `elapsed` but only its seconds within the last day.
fn sub_day_seconds(elapsed: i64) -> i64 {
    if elapsed > 0 {
        elapsed % SECONDS_PER_DAY
    } else {
        -((-elapsed) % SECONDS_PER_DAY)
    }
}

/// Finds the timestamp anywhere in the field, ignoring quotes and padding.
fn parse_timestamp(fields: &[&str], index: usize) -> Result<NaiveDateTime, MalformedRecordError> {
    let field = fields[index];
    let found = TIMESTAMP
        .find(field)
        .ok_or_else(|| MalformedRecordError::MissingTimestamp {
            index,
            field: field.to_string(),
        })?;
    NaiveDateTime::parse_from_str(found.as_str(), TIME_FORMAT).map_err(|source| {
        MalformedRecordError::InvalidTimestamp {
            value: found.as_str().to_string(),
            source,
        }
    })
}

fn parse_field<T: std::str::FromStr>(fields: &[&str], index: usize) -> Result<T, MalformedRecordError> {
    let raw = fields[index].trim();
    raw.parse().map_err(|_| MalformedRecordError::InvalidNumber {
        index,
        value: raw.to_string(),
    })
}
