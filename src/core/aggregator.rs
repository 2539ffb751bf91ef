use crate::errors::{AppError, AppResult};
use crate::models::monthly_summary::MonthlySummary;
use crate::models::stored_row::StoredRow;
use crate::store::RowStore;
use crate::utils::date::{parse_date, same_month};
use crate::utils::time::parse_hh_mm;
use chrono::{Datelike, NaiveDate};

/// A complete row with its date parsed.
#[derive(Debug, Clone)]
pub struct DatedRow {
    pub date: NaiveDate,
    pub row: StoredRow,
}

/// Drop draft rows and parse the dates of the others.
pub fn complete_rows(rows: &[StoredRow]) -> AppResult<Vec<DatedRow>> {
    rows.iter()
        .filter(|r| r.is_complete())
        .map(|r| {
            let raw = r.date.as_deref().unwrap_or_default();
            let date = parse_date(raw)
                .ok_or_else(|| AppError::DataParse(format!("invalid stored date '{}'", raw)))?;
            Ok(DatedRow {
                date,
                row: r.clone(),
            })
        })
        .collect()
}

/// Stored work time "H:MM" as minutes.
pub fn parse_work_time(s: &str) -> AppResult<i64> {
    parse_hh_mm(s)
        .map(|(h, m)| h * 60 + m)
        .ok_or_else(|| AppError::DataParse(format!("invalid work time '{}'", s)))
}

/// Totals for the calendar month containing `today`.
pub fn summarize_month(rows: &[StoredRow], today: NaiveDate) -> AppResult<MonthlySummary> {
    let in_month: Vec<DatedRow> = complete_rows(rows)?
        .into_iter()
        .filter(|r| same_month(r.date, today))
        .collect();

    if in_month.is_empty() {
        return Ok(MonthlySummary::empty(today.year(), today.month()));
    }

    let mut sum_hours = 0i64;
    let mut sum_minutes = 0i64;
    for r in &in_month {
        let minutes = parse_work_time(r.row.work_time.as_deref().unwrap_or_default())?;
        sum_hours += minutes / 60;
        sum_minutes += minutes % 60;
    }

    // hours + minutes / 60, split back into whole hours and minutes
    let total = sum_hours * 60 + sum_minutes;

    Ok(MonthlySummary {
        year: today.year(),
        month: today.month(),
        entry_count: in_month.len(),
        total_hours: total / 60,
        total_minutes: total % 60,
        last_date: in_month.iter().map(|r| r.date).max(),
    })
}

/// Fetch every row from `store` and total the month containing `today`.
pub fn summarize_current_month(
    store: &mut dyn RowStore,
    today: NaiveDate,
) -> AppResult<MonthlySummary> {
    let rows = store.query_all()?;
    summarize_month(&rows, today)
}
