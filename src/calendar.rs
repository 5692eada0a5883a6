//! Calendar arithmetic used to size monthly buffers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar month, `month` in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The following calendar month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn samples(self, buckets_per_hour: u32) -> usize {
        samples_in_month(self.year, self.month, buckets_per_hour)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = anyhow::Error;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("expected YYYY-MM, got '{s}'"))?;
        let year: i32 = year.trim().parse()?;
        let month: u32 = month.trim().parse()?;
        if !(1..=12).contains(&month) {
            anyhow::bail!("month out of range in '{s}'");
        }
        Ok(Self::new(year, month))
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Number of time buckets in a month at `buckets_per_hour` resolution.
pub fn samples_in_month(year: i32, month: u32, buckets_per_hour: u32) -> usize {
    days_in_month(year, month) as usize * 24 * buckets_per_hour as usize
}

/// Inclusive sequence of months from `start` to `end`.
///
/// # Panics
///
/// Panics if `end` precedes `start`.
pub fn month_sequence(start: YearMonth, end: YearMonth) -> Vec<YearMonth> {
    assert!(
        start <= end,
        "month_sequence: end {end} precedes start {start}"
    );

    let mut months = vec![start];
    let mut current = start;
    while current != end {
        current = current.next();
        months.push(current);
    }
    months
}
