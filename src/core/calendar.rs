//! Monthly working-day forecast and overtime decision.

use crate::core::holidays::HolidayProvider;
use crate::errors::{AppError, AppResult};
use crate::models::month_requirement::{MonthRequirement, Overtime};
use crate::utils::date::{all_days_of_month, days_in_month};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

pub const HOURS_PER_DAY: i64 = 8;
pub const BASELINE_WORKING_DAYS: i64 = 20;
pub const BASELINE_WORKING_HOURS: i64 = BASELINE_WORKING_DAYS * HOURS_PER_DAY;

/// Fill a missing year and/or month with today's.
pub fn resolve_target_month(
    year: Option<i32>,
    month: Option<u32>,
    today: NaiveDate,
) -> AppResult<(i32, u32)> {
    let resolved = match (year, month) {
        (None, None) => (today.year(), today.month()),
        (Some(y), None) => (y, today.month()),
        (None, Some(m)) => (today.year(), m),
        (Some(y), Some(m)) => (y, m),
    };

    if NaiveDate::from_ymd_opt(resolved.0, resolved.1, 1).is_none() {
        return Err(AppError::InvalidDate(format!(
            "{}-{:02}",
            resolved.0, resolved.1
        )));
    }

    Ok(resolved)
}

/// Saturdays and Sundays of the month.
pub fn weekends_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    all_days_of_month(year, month)
        .into_iter()
        .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// Round to one decimal place.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Overtime needed to reach the baseline with `forecast_days` working days.
pub fn overtime_for(forecast_days: i64) -> AppResult<Overtime> {
    if forecast_days <= 0 {
        return Err(AppError::InvalidSchedule(format!(
            "forecast working days must be positive, got {}",
            forecast_days
        )));
    }

    if forecast_days < BASELINE_WORKING_DAYS {
        let missing_days = BASELINE_WORKING_DAYS - forecast_days;
        let extra_hours_per_day =
            round1((missing_days * HOURS_PER_DAY) as f64 / forecast_days as f64);
        Ok(Overtime::Needed {
            extra_hours_per_day,
            extra_minutes_per_day: (extra_hours_per_day * 60.0).round() as i64,
        })
    } else {
        Ok(Overtime::NotNeeded)
    }
}

pub fn compute_month_requirement(
    year: Option<i32>,
    month: Option<u32>,
    leave_days: u32,
    today: NaiveDate,
    holidays: &dyn HolidayProvider,
) -> AppResult<MonthRequirement> {
    let (year, month) = resolve_target_month(year, month, today)?;

    let total_calendar_days = days_in_month(year, month)
        .ok_or_else(|| AppError::InvalidDate(format!("{}-{:02}", year, month)))?;

    let holiday_dates: BTreeSet<NaiveDate> = holidays
        .holidays(year, month)?
        .into_iter()
        .filter(|d| d.year() == year && d.month() == month)
        .collect();
    let weekend_dates = weekends_in_month(year, month);

    let non_working: BTreeSet<NaiveDate> = holiday_dates
        .iter()
        .copied()
        .chain(weekend_dates.iter().copied())
        .collect();

    let required_working_days = total_calendar_days as i64 - non_working.len() as i64;
    let forecast_working_days = required_working_days - leave_days as i64;
    let overtime = overtime_for(forecast_working_days)?;

    Ok(MonthRequirement {
        year,
        month,
        total_calendar_days,
        holiday_count: holiday_dates.len(),
        weekend_count: weekend_dates.len(),
        non_working_days: non_working.into_iter().collect(),
        leave_days,
        required_working_days,
        required_working_hours: required_working_days * HOURS_PER_DAY,
        forecast_working_days,
        forecast_working_hours: forecast_working_days * HOURS_PER_DAY,
        overtime,
    })
}
