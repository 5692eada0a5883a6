//! Plausibility filter applied to parsed trips before accumulation.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::parser::TripRecord;

/// Thresholds in meters and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityThresholds {
    pub min_duration_s: i64,
    pub max_speed_mps: f64,
    pub min_displacement_m: f64,
}

impl Default for ValidityThresholds {
    fn default() -> Self {
        Self {
            min_duration_s: 59,
            max_speed_mps: 36.0,
            min_displacement_m: 100.0,
        }
    }
}

/// `true` when `record` starts in `target` and is physically plausible.
///
/// Trips are keyed by their start month; where the trip ends does not matter
/// here.
pub fn is_valid(record: &TripRecord, target: YearMonth, thresholds: &ValidityThresholds) -> bool {
    if record.start_time.year() != target.year || record.start_time.month() != target.month {
        return false;
    }
    if record.geodesic_distance < thresholds.min_displacement_m {
        return false;
    }
    if record.duration_seconds < thresholds.min_duration_s {
        return false;
    }
    let speed = record.geodesic_distance / record.duration_seconds as f64;
    // NaN (0 / 0) fails this comparison and is rejected too
    speed <= thresholds.max_speed_mps
}
