/// Maps a 1-based `day` of month plus `hour`/`minute` onto an intra-month
/// time bucket at `buckets_per_hour` resolution.
///
/// Each bucket spans `60 / buckets_per_hour` minutes (integer division).
/// No bounds checking: a `day` past the month's end yields a bucket past the
/// month's sample count.
///
/// # Panics
///
/// Panics if `buckets_per_hour` is outside `1..=60`.
pub fn time_bucket(day: u32, hour: u32, minute: u32, buckets_per_hour: u32) -> usize {
    assert!(
        (1..=60).contains(&buckets_per_hour),
        "buckets_per_hour must be within 1..=60, got {buckets_per_hour}"
    );
    let minutes = (day as usize - 1) * 24 * 60 + hour as usize * 60 + minute as usize;
    minutes / (60 / buckets_per_hour as usize)
}
