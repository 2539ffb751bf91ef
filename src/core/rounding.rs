use chrono::{Duration, NaiveDateTime, Timelike};

/// Snap a timestamp to a quarter hour.
///
/// delta = ((minute + 5) / 15) * 15 - minute, so minutes 0..=9 go down to :00,
/// 10..=24 to :15, 25..=39 to :30, 40..=54 to :45 and 55..=59 to the next hour.
/// Seconds and sub-seconds are dropped.
pub fn round_to_nearest_15_minutes(dt: NaiveDateTime) -> NaiveDateTime {
    let minute = dt.minute() as i64;
    let delta = (minute + 5) / 15 * 15 - minute;
    let shifted = dt + Duration::minutes(delta);

    shifted
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(shifted)
}
