use crate::core::audit::ttlog_or_warn;
use crate::core::rounding::round_to_nearest_15_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::work_entry::{DEFAULT_CONTENT, DEFAULT_REST, WorkEntry};
use crate::store::RowStore;
use crate::store::csv_log::CsvLog;
use crate::ui::messages::{info, success};
use crate::utils::time::{format_duration, parse_required_time, parse_rest};
use chrono::{Duration, NaiveDate, NaiveTime};
use std::path::Path;

/// end - start - rest, in whole minutes.
pub fn compute_work_duration(
    start: NaiveTime,
    end: NaiveTime,
    rest: Duration,
) -> AppResult<Duration> {
    let worked = Duration::minutes((end - start - rest).num_minutes());

    if worked < Duration::zero() {
        return Err(AppError::InvalidTimeRange(format!(
            "{} - {} with {} rest gives a negative duration",
            start.format("%H:%M"),
            end.format("%H:%M"),
            format_duration(rest)
        )));
    }

    Ok(worked)
}

/// Snap a clock time to the quarter hour. Times that would roll past
/// midnight stay on the same day.
pub fn round_clock_time(t: NaiveTime, date: NaiveDate) -> NaiveTime {
    let rounded = round_to_nearest_15_minutes(date.and_time(t));
    if rounded.date() != date {
        return NaiveTime::from_hms_opt(23, 45, 0).unwrap_or(t);
    }
    rounded.time()
}

/// Raw user input for one workday.
#[derive(Debug, Clone)]
pub struct RecordRequest {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub rest: Option<String>,
    pub content: Option<String>,
    pub round: bool,
}

impl RecordRequest {
    pub fn new(date: NaiveDate, start_time: &str, end_time: &str) -> Self {
        Self {
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            rest: None,
            content: None,
            round: false,
        }
    }

    pub fn build_entry(&self) -> AppResult<WorkEntry> {
        let mut start = parse_required_time(&self.start_time)?;
        let mut end = parse_required_time(&self.end_time)?;
        if self.round {
            start = round_clock_time(start, self.date);
            end = round_clock_time(end, self.date);
        }

        let rest = parse_rest(self.rest.as_deref().unwrap_or(DEFAULT_REST))?;
        let work_duration = compute_work_duration(start, end, rest)?;

        Ok(WorkEntry {
            date: self.date,
            start_time: start,
            end_time: end,
            rest,
            work_duration,
            content: self
                .content
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
        })
    }
}

/// High-level business logic for the `record` command.
pub struct RecordLogic;

impl RecordLogic {
    /// Build the entry, create it in the remote store when one is given,
    /// then append it to the monthly CSV file. A failed remote call leaves
    /// the CSV file untouched.
    pub fn record(
        request: &RecordRequest,
        csv_log: &CsvLog,
        remote: Option<&mut dyn RowStore>,
        audit_log: &Path,
    ) -> AppResult<WorkEntry> {
        let entry = request.build_entry()?;
        let rec = entry.to_record();

        info(format!(
            "{} | {} - {} | rest {} | worked {} | {}",
            rec.date, rec.start_time, rec.end_time, rec.rest, rec.work_time, rec.content
        ));

        if let Some(store) = remote {
            store.create_row(&entry)?;
            success("Row created in the remote store");
        }

        let csv_path = csv_log.append(&entry)?;
        success(format!("Row appended to {}", csv_path.display()));

        ttlog_or_warn(
            audit_log,
            "record",
            &rec.date,
            &format!(
                "Recorded {}-{} rest {} worked {}",
                rec.start_time, rec.end_time, rec.rest, rec.work_time
            ),
        );

        Ok(entry)
    }
}
