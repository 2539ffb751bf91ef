//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Parse "H:MM" / "HH:MM" into (hours, minutes).
pub fn parse_hh_mm(s: &str) -> Option<(i64, i64)> {
    let (h, m) = s.trim().split_once(':')?;
    let hours: i64 = h.trim().parse().ok()?;
    let minutes: i64 = m.trim().parse().ok()?;
    if hours < 0 || !(0..60).contains(&minutes) {
        return None;
    }
    Some((hours, minutes))
}

/// Parse a rest period such as "01:00" into a duration.
pub fn parse_rest(s: &str) -> AppResult<Duration> {
    parse_hh_mm(s)
        .map(|(h, m)| Duration::minutes(h * 60 + m))
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// HH:MM with seconds discarded.
pub fn format_duration(d: Duration) -> String {
    format_minutes(d.num_minutes())
}

/// Accept "YYYY-MM-DD HH:MM[:SS]" or "YYYY-MM-DDTHH:MM[:SS]".
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s.trim(), f).ok())
}
