use crate::utils::time::format_duration;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

pub const DEFAULT_REST: &str = "01:00";
pub const DEFAULT_CONTENT: &str = "automated entry";

/// Date format used on the wire and in the CSV files.
pub const ENTRY_DATE_FORMAT: &str = "%Y/%m/%d";

/// One recorded workday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkEntry {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub rest: Duration,
    pub work_duration: Duration, // end - start - rest, whole minutes
    pub content: String,
}

/// Flat, string-only view of a [`WorkEntry`] (CSV columns, remote properties).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkEntryRecord {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub rest: String,
    pub work_time: String,
    pub content: String,
}

impl WorkEntry {
    pub fn date_str(&self) -> String {
        self.date.format(ENTRY_DATE_FORMAT).to_string()
    }

    pub fn work_time_str(&self) -> String {
        format_duration(self.work_duration)
    }

    pub fn to_record(&self) -> WorkEntryRecord {
        WorkEntryRecord {
            date: self.date_str(),
            start_time: self.start_time.format("%H:%M").to_string(),
            end_time: self.end_time.format("%H:%M").to_string(),
            rest: format_duration(self.rest),
            work_time: self.work_time_str(),
            content: self.content.clone(),
        }
    }
}
