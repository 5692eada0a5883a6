//! Monthly visit and flow histograms.
//!
//! A [`MonthAccumulator`] owns the buffers for one target month plus a
//! spillover buffer for the following month, which receives arrivals of
//! trips that start in the target month and end after it. [`advance`]
//! hands the finished month off and promotes the spillover buffer.
//!
//! Grid cells are `floor(coord * width)` on **both** axes, so with
//! `height > width` the upper rows are never written and with
//! `height < width` some writes land outside the buffer. Such writes are
//! dropped and counted, never clamped into a neighbouring cell.
//!
//! [`advance`]: MonthAccumulator::advance

use std::mem;

use chrono::Datelike;
use ndarray::{Array3, Array5, ArrayD, IxDyn, Zip};
use tracing::debug;

use crate::calendar::YearMonth;
use crate::config::GridConfig;
use crate::error::AccumulatorError;
use crate::parser::TripRecord;

/// Cell counter. Increments saturate.
pub type Count = u16;

/// Visit axis 3.
pub const DEPARTURE: usize = 0;
pub const ARRIVAL: usize = 1;

/// Last axis of every histogram.
pub const PASSENGERS: usize = 0;
pub const TRIPS: usize = 1;

/// Flow axis 0.
pub const SAME_BUCKET: usize = 0;
pub const CROSS_BUCKET: usize = 1;

/// Visit and flow buffers for one calendar month.
///
/// - `visits`: `[bucket, x, y, {departure, arrival}, {passengers, trips}]`
/// - `flows`: `[{same, cross} bucket, arrival bucket, ox, oy, dx, dy, {passengers, trips}]`
#[derive(Debug, Clone, PartialEq)]
pub struct Histograms {
    year_month: YearMonth,
    visits: Array5<Count>,
    flows: ArrayD<Count>,
}

/// Passenger and trip sums over a [`Histograms`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistogramTotals {
    pub departure_passengers: u64,
    pub departure_trips: u64,
    pub arrival_passengers: u64,
    pub arrival_trips: u64,
    pub flow_passengers: u64,
    pub flow_trips: u64,
}

impl Histograms {
    pub fn zeros(year_month: YearMonth, grid: &GridConfig) -> Self {
        let t = year_month.samples(grid.buckets_per_hour);
        let (w, h) = (grid.width, grid.height);
        Self {
            year_month,
            visits: Array5::zeros((t, w, h, 2, 2)),
            flows: ArrayD::zeros(IxDyn(&[2, t, w, h, w, h, 2])),
        }
    }

    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    pub fn visits(&self) -> &Array5<Count> {
        &self.visits
    }

    pub fn flows(&self) -> &ArrayD<Count> {
        &self.flows
    }

    pub fn bucket_count(&self) -> usize {
        self.visits.shape()[0]
    }

    /// Adds `other` into `self` cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`AccumulatorError::ShapeMismatch`] when the buffers were sized
    /// for different months or grids.
    pub fn merge_from(&mut self, other: &Histograms) -> Result<(), AccumulatorError> {
        if self.visits.shape() != other.visits.shape() || self.flows.shape() != other.flows.shape()
        {
            return Err(AccumulatorError::ShapeMismatch {
                left: self.flows.shape().to_vec(),
                right: other.flows.shape().to_vec(),
            });
        }
        Zip::from(&mut self.visits)
            .and(&other.visits)
            .for_each(|a, &b| *a = a.saturating_add(b));
        Zip::from(&mut self.flows)
            .and(&other.flows)
            .for_each(|a, &b| *a = a.saturating_add(b));
        Ok(())
    }

    pub fn totals(&self) -> HistogramTotals {
        let mut totals = HistogramTotals::default();
        for ((_, _, _, axis, kind), &v) in self.visits.indexed_iter() {
            let v = u64::from(v);
            match (axis, kind) {
                (DEPARTURE, PASSENGERS) => totals.departure_passengers += v,
                (DEPARTURE, _) => totals.departure_trips += v,
                (_, PASSENGERS) => totals.arrival_passengers += v,
                _ => totals.arrival_trips += v,
            }
        }
        for (idx, &v) in self.flows.indexed_iter() {
            if idx[6] == PASSENGERS {
                totals.flow_passengers += u64::from(v);
            } else {
                totals.flow_trips += u64::from(v);
            }
        }
        totals
    }

    fn add_visit(&mut self, bucket: usize, cell: (usize, usize), axis: usize, passengers: Count) -> bool {
        let (x, y) = cell;
        match self.visits.get_mut((bucket, x, y, axis, PASSENGERS)) {
            Some(c) => *c = c.saturating_add(passengers),
            None => return false,
        }
        if let Some(c) = self.visits.get_mut((bucket, x, y, axis, TRIPS)) {
            *c = c.saturating_add(1);
        }
        true
    }

    fn add_flow(
        &mut self,
        kind: usize,
        bucket: usize,
        origin: (usize, usize),
        dest: (usize, usize),
        passengers: Count,
    ) -> bool {
        let mut index = [kind, bucket, origin.0, origin.1, dest.0, dest.1, PASSENGERS];
        match self.flows.get_mut(&index[..]) {
            Some(c) => *c = c.saturating_add(passengers),
            None => return false,
        }
        index[6] = TRIPS;
        if let Some(c) = self.flows.get_mut(&index[..]) {
            *c = c.saturating_add(1);
        }
        true
    }
}

/// Result of routing a single trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// At least one write went to the next month's buffer.
    pub spilled: bool,
    /// Writes skipped because the cell or bucket lies outside the buffer.
    pub dropped: usize,
}

/// A finished month, ready for persistence.
#[derive(Debug)]
pub struct MonthOutput {
    pub histograms: Histograms,
    /// `[origin outside, destination outside, {passengers, trips}]`
    pub boundary: Array3<u64>,
    pub dropped_writes: u64,
}

/// Histograms for one target month plus the following month's spillover.
#[derive(Debug)]
pub struct MonthAccumulator {
    grid: GridConfig,
    current: Histograms,
    next: Histograms,
    boundary: Array3<u64>,
    dropped_writes: u64,
}

impl MonthAccumulator {
    pub fn new(year_month: YearMonth, grid: GridConfig) -> Self {
        Self {
            current: Histograms::zeros(year_month, &grid),
            next: Histograms::zeros(year_month.next(), &grid),
            boundary: Array3::zeros((2, 2, 2)),
            dropped_writes: 0,
            grid,
        }
    }

    pub fn year_month(&self) -> YearMonth {
        self.current.year_month
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn current(&self) -> &Histograms {
        &self.current
    }

    /// Spillover buffer for the following month.
    pub fn next(&self) -> &Histograms {
        &self.next
    }

    pub fn boundary(&self) -> &Array3<u64> {
        &self.boundary
    }

    pub fn dropped_writes(&self) -> u64 {
        self.dropped_writes
    }

    /// Routes one admitted trip into the histograms.
    ///
    /// The record must already have passed
    /// [`is_valid`](crate::validity::is_valid) for this accumulator's month.
    pub fn update(&mut self, record: &TripRecord) -> UpdateOutcome {
        let starts_inside = record.start_pos.is_inside();
        let ends_inside = record.end_pos.is_inside();
        let same_month = record.start_time.month0() == record.end_time.month0();

        let w = self.grid.width;
        let origin = (grid_cell(record.start_pos.x, w), grid_cell(record.start_pos.y, w));
        let dest = (grid_cell(record.end_pos.x, w), grid_cell(record.end_pos.y, w));
        let passengers = Count::try_from(record.passenger_count).unwrap_or(Count::MAX);
        let (st, et) = (record.start_bucket, record.end_bucket);

        let b = &mut self.boundary;
        b[[usize::from(!starts_inside), usize::from(!ends_inside), PASSENGERS]] +=
            u64::from(record.passenger_count);
        b[[usize::from(!starts_inside), usize::from(!ends_inside), TRIPS]] += 1;

        let mut outcome = UpdateOutcome::default();
        let mut written = Vec::with_capacity(3);

        if starts_inside {
            written.push(self.current.add_visit(st, origin, DEPARTURE, passengers));

            if ends_inside {
                if st == et {
                    written.push(self.current.add_flow(SAME_BUCKET, et, origin, dest, passengers));
                } else if same_month {
                    written.push(self.current.add_flow(CROSS_BUCKET, et, origin, dest, passengers));
                } else {
                    // end bucket is already relative to the next month's day numbering
                    written.push(self.next.add_flow(CROSS_BUCKET, et, origin, dest, passengers));
                    outcome.spilled = true;
                }
            }
        }

        if ends_inside {
            if same_month {
                written.push(self.current.add_visit(et, dest, ARRIVAL, passengers));
            } else {
                written.push(self.next.add_visit(et, dest, ARRIVAL, passengers));
                outcome.spilled = true;
            }
        }

        outcome.dropped = written.iter().filter(|ok| !**ok).count();
        if outcome.dropped > 0 {
            self.dropped_writes += outcome.dropped as u64;
            debug!(
                origin = ?origin,
                dest = ?dest,
                start_bucket = st,
                end_bucket = et,
                dropped = outcome.dropped,
                "Histogram write outside buffer extents"
            );
        }
        outcome
    }

    /// Returns the finished month and moves on to the next one.
    ///
    /// The spillover buffer becomes the new current month and a fresh
    /// spillover buffer is allocated for the month after it.
    pub fn advance(&mut self) -> MonthOutput {
        let following = Histograms::zeros(self.next.year_month.next(), &self.grid);
        let promoted = mem::replace(&mut self.next, following);
        let histograms = mem::replace(&mut self.current, promoted);
        MonthOutput {
            histograms,
            boundary: mem::replace(&mut self.boundary, Array3::zeros((2, 2, 2))),
            dropped_writes: mem::take(&mut self.dropped_writes),
        }
    }

    /// Consumes the accumulator, returning the last month and its spillover.
    pub fn finish(self) -> (MonthOutput, Histograms) {
        let output = MonthOutput {
            histograms: self.current,
            boundary: self.boundary,
            dropped_writes: self.dropped_writes,
        };
        (output, self.next)
    }
}

/// Grid cell along one axis. The closed upper edge belongs to the last cell.
fn grid_cell(coord: f64, cells: usize) -> usize {
    let cell = (coord * cells as f64).floor();
    if cell <= 0.0 {
        0
    } else {
        (cell as usize).min(cells.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::time_bucket;
    use crate::geo::GridPoint;
    use chrono::{Datelike, NaiveDateTime, Timelike};

    const GRID: GridConfig = GridConfig {
        width: 3,
        height: 4,
        buckets_per_hour: 1,
    };
    const JAN: YearMonth = YearMonth { year: 2013, month: 1 };

    fn trip(start: &str, end: &str, from: (f64, f64), to: (f64, f64), passengers: u32) -> TripRecord {
        let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        let (start_time, end_time) = (parse(start), parse(end));
        let bucket = |t: NaiveDateTime| time_bucket(t.day(), t.hour(), t.minute(), GRID.buckets_per_hour);
        TripRecord {
            start_time,
            end_time,
            start_pos: GridPoint::new(from.0, from.1),
            end_pos: GridPoint::new(to.0, to.1),
            reported_distance: 1000.0,
            geodesic_distance: 1000.0,
            start_bucket: bucket(start_time),
            end_bucket: bucket(end_time),
            passenger_count: passengers,
            duration_seconds: (end_time - start_time).num_seconds(),
        }
    }

    fn sum_visits(h: &Histograms) -> u64 {
        h.visits().iter().map(|&v| u64::from(v)).sum()
    }

    fn sum_flows(h: &Histograms) -> u64 {
        h.flows().iter().map(|&v| u64::from(v)).sum()
    }

    #[test]
    fn test_buffers_sized_per_month() {
        let acc = MonthAccumulator::new(JAN, GRID);
        assert_eq!(acc.current().visits().shape(), &[744, 3, 4, 2, 2]);
        assert_eq!(acc.current().flows().shape(), &[2, 744, 3, 4, 3, 4, 2]);
        assert_eq!(acc.next().year_month(), YearMonth::new(2013, 2));
        assert_eq!(acc.next().bucket_count(), 28 * 24);
    }

    #[test]
    fn test_same_bucket_trip() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let rec = trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (0.1, 0.2), (0.9, 0.5), 2);
        let outcome = acc.update(&rec);
        assert_eq!(outcome, UpdateOutcome::default());

        let st = 24 + 5;
        let h = acc.current();
        assert_eq!(h.flows()[&[SAME_BUCKET, st, 0, 0, 2, 1, PASSENGERS][..]], 2);
        assert_eq!(h.flows()[&[SAME_BUCKET, st, 0, 0, 2, 1, TRIPS][..]], 1);
        assert_eq!(sum_flows(h), 3);
        assert_eq!(h.visits()[[st, 0, 0, DEPARTURE, PASSENGERS]], 2);
        assert_eq!(h.visits()[[st, 0, 0, DEPARTURE, TRIPS]], 1);
        assert_eq!(h.visits()[[st, 2, 1, ARRIVAL, PASSENGERS]], 2);
        assert_eq!(h.visits()[[st, 2, 1, ARRIVAL, TRIPS]], 1);
        assert_eq!(sum_visits(h), 6);
        assert_eq!(acc.boundary()[[0, 0, PASSENGERS]], 2);
        assert_eq!(acc.boundary()[[0, 0, TRIPS]], 1);
        assert_eq!(sum_visits(acc.next()) + sum_flows(acc.next()), 0);
    }

    #[test]
    fn test_cross_bucket_same_month() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let rec = trip("2013-01-02 05:50:00", "2013-01-02 06:20:00", (0.5, 0.5), (0.5, 0.9), 1);
        acc.update(&rec);
        let h = acc.current();
        assert_eq!(h.flows()[&[CROSS_BUCKET, 30, 1, 1, 1, 2, TRIPS][..]], 1);
        assert_eq!(h.visits()[[29, 1, 1, DEPARTURE, TRIPS]], 1);
        assert_eq!(h.visits()[[30, 1, 2, ARRIVAL, TRIPS]], 1);
    }

    #[test]
    fn test_spillover_into_next_month() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let rec = trip("2013-01-31 23:50:00", "2013-02-01 00:20:00", (0.1, 0.1), (0.7, 0.3), 3);
        let outcome = acc.update(&rec);
        assert!(outcome.spilled);
        assert_eq!(outcome.dropped, 0);

        let last = 31 * 24 - 1;
        assert_eq!(acc.current().visits()[[last, 0, 0, DEPARTURE, PASSENGERS]], 3);
        assert_eq!(sum_flows(acc.current()), 0);
        assert_eq!(sum_visits(acc.current()), 4);

        let next = acc.next();
        assert_eq!(next.visits()[[0, 2, 0, ARRIVAL, PASSENGERS]], 3);
        assert_eq!(next.visits()[[0, 2, 0, ARRIVAL, TRIPS]], 1);
        assert_eq!(next.flows()[&[CROSS_BUCKET, 0, 0, 0, 2, 0, TRIPS][..]], 1);
        assert_eq!(sum_flows(next), 4);
    }

    #[test]
    fn test_spillover_across_year_boundary() {
        let dec = YearMonth::new(2012, 12);
        let mut acc = MonthAccumulator::new(dec, GRID);
        assert_eq!(acc.next().year_month(), YearMonth::new(2013, 1));
        assert_eq!(acc.next().bucket_count(), 31 * 24);

        let rec = trip("2012-12-31 23:50:00", "2013-01-01 00:20:00", (0.1, 0.1), (0.7, 0.3), 2);
        let outcome = acc.update(&rec);
        assert!(outcome.spilled);
        assert_eq!(outcome.dropped, 0);

        assert_eq!(acc.current().visits()[[743, 0, 0, DEPARTURE, TRIPS]], 1);
        assert_eq!(sum_visits(acc.current()), 3);
        assert_eq!(sum_flows(acc.current()), 0);
        assert_eq!(acc.next().visits()[[0, 2, 0, ARRIVAL, PASSENGERS]], 2);
        assert_eq!(acc.next().flows()[&[CROSS_BUCKET, 0, 0, 0, 2, 0, TRIPS][..]], 1);

        let december = acc.advance();
        assert_eq!(december.histograms.year_month(), dec);
        assert_eq!(acc.year_month(), YearMonth::new(2013, 1));
        assert_eq!(acc.current().visits()[[0, 2, 0, ARRIVAL, TRIPS]], 1);
        assert_eq!(acc.next().year_month(), YearMonth::new(2013, 2));
        assert_eq!(acc.next().bucket_count(), 28 * 24);
    }

    #[test]
    fn test_both_outside_only_touches_boundary() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let rec = trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (-0.1, 0.2), (1.5, 0.5), 4);
        acc.update(&rec);
        assert_eq!(acc.boundary()[[1, 1, PASSENGERS]], 4);
        assert_eq!(acc.boundary()[[1, 1, TRIPS]], 1);
        assert_eq!(acc.boundary().iter().sum::<u64>(), 5);
        assert_eq!(sum_visits(acc.current()) + sum_flows(acc.current()), 0);
    }

    #[test]
    fn test_departure_only_when_destination_outside() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let rec = trip("2013-01-02 05:10:00", "2013-01-02 06:40:00", (0.4, 0.4), (2.0, 0.5), 1);
        acc.update(&rec);
        assert_eq!(acc.boundary()[[0, 1, TRIPS]], 1);
        assert_eq!(acc.current().visits()[[29, 1, 1, DEPARTURE, TRIPS]], 1);
        assert_eq!(sum_visits(acc.current()), 2);
        assert_eq!(sum_flows(acc.current()), 0);
    }

    #[test]
    fn test_arrival_only_when_origin_outside() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let rec = trip("2013-01-02 05:10:00", "2013-01-02 06:40:00", (0.4, -3.0), (0.4, 0.4), 1);
        acc.update(&rec);
        assert_eq!(acc.boundary()[[1, 0, TRIPS]], 1);
        assert_eq!(acc.current().visits()[[30, 1, 1, ARRIVAL, TRIPS]], 1);
        assert_eq!(sum_flows(acc.current()), 0);
    }

    #[test]
    fn test_upper_edge_maps_to_last_cell() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let rec = trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (1.0, 1.0), (0.0, 0.0), 1);
        let outcome = acc.update(&rec);
        assert_eq!(outcome.dropped, 0);
        // y is scaled by the width too, so 1.0 lands in row width - 1
        assert_eq!(acc.current().visits()[[29, 2, 2, DEPARTURE, TRIPS]], 1);
    }

    #[test]
    fn test_out_of_extent_rows_are_dropped() {
        let grid = GridConfig {
            width: 4,
            height: 2,
            buckets_per_hour: 1,
        };
        let mut acc = MonthAccumulator::new(JAN, grid);
        let mut rec = trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (0.1, 0.9), (0.1, 0.1), 1);
        rec.start_bucket = 29;
        rec.end_bucket = 29;
        let outcome = acc.update(&rec);
        // departure visit and flow need row 3 of a 2-row buffer
        assert_eq!(outcome.dropped, 2);
        assert_eq!(acc.dropped_writes(), 2);
        assert_eq!(acc.current().visits()[[29, 0, 0, ARRIVAL, TRIPS]], 1);
        assert_eq!(sum_flows(acc.current()), 0);
        assert_eq!(acc.boundary()[[0, 0, TRIPS]], 1);
    }

    #[test]
    fn test_spillover_bucket_past_next_month_is_dropped() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        // Lands on March 31; February has no such bucket
        let rec = trip("2013-01-31 10:00:00", "2013-03-31 12:00:00", (0.5, 0.5), (0.5, 0.5), 1);
        let outcome = acc.update(&rec);
        assert!(outcome.spilled);
        assert_eq!(outcome.dropped, 2);
        assert_eq!(sum_visits(acc.next()) + sum_flows(acc.next()), 0);
    }

    #[test]
    fn test_accumulation_is_order_independent() {
        let trips = vec![
            trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (0.1, 0.2), (0.9, 0.5), 2),
            trip("2013-01-02 05:50:00", "2013-01-02 06:20:00", (0.5, 0.5), (0.5, 0.9), 1),
            trip("2013-01-31 23:50:00", "2013-02-01 00:20:00", (0.1, 0.1), (0.7, 0.3), 3),
            trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (-0.1, 0.2), (1.5, 0.5), 4),
            trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (0.1, 0.2), (0.9, 0.5), 5),
        ];

        let mut forward = MonthAccumulator::new(JAN, GRID);
        trips.iter().for_each(|t| {
            forward.update(t);
        });
        let mut backward = MonthAccumulator::new(JAN, GRID);
        trips.iter().rev().for_each(|t| {
            backward.update(t);
        });

        assert_eq!(forward.current(), backward.current());
        assert_eq!(forward.next(), backward.next());
        assert_eq!(forward.boundary(), backward.boundary());
    }

    #[test]
    fn test_advance_promotes_spillover() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        acc.update(&trip("2013-01-31 23:50:00", "2013-02-01 00:20:00", (0.1, 0.1), (0.7, 0.3), 3));

        let jan = acc.advance();
        assert_eq!(jan.histograms.year_month(), JAN);
        assert_eq!(jan.boundary[[0, 0, TRIPS]], 1);

        assert_eq!(acc.year_month(), YearMonth::new(2013, 2));
        assert_eq!(acc.current().visits()[[0, 2, 0, ARRIVAL, TRIPS]], 1);
        assert_eq!(acc.boundary().iter().sum::<u64>(), 0);
        assert_eq!(acc.next().year_month(), YearMonth::new(2013, 3));
        assert_eq!(acc.next().bucket_count(), 31 * 24);
        assert_eq!(sum_visits(acc.next()), 0);
    }

    #[test]
    fn test_merge_from_adds_cells() {
        let mut a = MonthAccumulator::new(JAN, GRID);
        let mut b = MonthAccumulator::new(JAN, GRID);
        let t = trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (0.1, 0.2), (0.9, 0.5), 2);
        a.update(&t);
        b.update(&t);

        let (a_out, _) = a.finish();
        let (b_out, _) = b.finish();
        let mut merged = a_out.histograms;
        merged.merge_from(&b_out.histograms).unwrap();

        let totals = merged.totals();
        assert_eq!(totals.departure_trips, 2);
        assert_eq!(totals.departure_passengers, 4);
        assert_eq!(totals.arrival_trips, 2);
        assert_eq!(totals.flow_trips, 2);
        assert_eq!(totals.flow_passengers, 4);
    }

    #[test]
    fn test_merge_from_rejects_other_month() {
        let mut jan = Histograms::zeros(JAN, &GRID);
        let feb = Histograms::zeros(JAN.next(), &GRID);
        assert!(matches!(
            jan.merge_from(&feb),
            Err(AccumulatorError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_counts_saturate() {
        let mut acc = MonthAccumulator::new(JAN, GRID);
        let t = trip("2013-01-02 05:10:00", "2013-01-02 05:40:00", (0.1, 0.2), (0.9, 0.5), 70_000);
        acc.update(&t);
        assert_eq!(acc.current().visits()[[29, 0, 0, DEPARTURE, PASSENGERS]], Count::MAX);
        assert_eq!(acc.boundary()[[0, 0, PASSENGERS]], 70_000);
    }
}
