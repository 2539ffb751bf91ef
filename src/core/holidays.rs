//! Public holiday calendars.
//!
//! The default calendar is the Japanese one: fixed-date holidays, "Happy Monday"
//! holidays, the two equinox days, substitute holidays and citizens' holidays.

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

pub trait HolidayProvider {
    /// Public holidays falling in the given month, in any order.
    fn holidays(&self, year: i32, month: u32) -> AppResult<Vec<NaiveDate>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseHolidays;

/// Range covered by the equinox approximation and the current holiday law.
pub const FIRST_SUPPORTED_YEAR: i32 = 2000;
pub const LAST_SUPPORTED_YEAR: i32 = 2099;

fn ymd(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::HolidayCalendar(format!("invalid date {year}-{month:02}-{day:02}")))
}

fn nth_monday(year: i32, month: u32, n: u8) -> AppResult<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, n).ok_or_else(|| {
        AppError::HolidayCalendar(format!("no Monday #{n} in {year}-{month:02}"))
    })
}

fn vernal_equinox_day(year: i32) -> u32 {
    let y = (year - 1980) as f64;
    ((20.8431 + 0.242194 * y).floor() - ((year - 1980) / 4) as f64) as u32
}

fn autumn_equinox_day(year: i32) -> u32 {
    let y = (year - 1980) as f64;
    ((23.2488 + 0.242194 * y).floor() - ((year - 1980) / 4) as f64) as u32
}

impl JapaneseHolidays {
    /// Holidays defined directly by law (no substitute/citizens' days).
    fn statutory(year: i32) -> AppResult<BTreeSet<NaiveDate>> {
        let mut days = BTreeSet::new();

        days.insert(ymd(year, 1, 1)?);
        days.insert(nth_monday(year, 1, 2)?);
        days.insert(ymd(year, 2, 11)?);
        if year >= 2020 {
            days.insert(ymd(year, 2, 23)?);
        }
        days.insert(ymd(year, 3, vernal_equinox_day(year))?);
        days.insert(ymd(year, 4, 29)?);
        days.insert(ymd(year, 5, 3)?);
        if year >= 2007 {
            days.insert(ymd(year, 5, 4)?);
        }
        days.insert(ymd(year, 5, 5)?);

        // Marine Day
        days.insert(match year {
            2020 => ymd(year, 7, 23)?,
            2021 => ymd(year, 7, 22)?,
            y if y >= 2003 => nth_monday(year, 7, 3)?,
            _ => ymd(year, 7, 20)?,
        });

        // Mountain Day
        match year {
            2020 => {
                days.insert(ymd(year, 8, 10)?);
            }
            2021 => {
                days.insert(ymd(year, 8, 8)?);
            }
            y if y >= 2016 => {
                days.insert(ymd(year, 8, 11)?);
            }
            _ => {}
        }

        // Respect for the Aged Day
        days.insert(if year >= 2003 {
            nth_monday(year, 9, 3)?
        } else {
            ymd(year, 9, 15)?
        });
        days.insert(ymd(year, 9, autumn_equinox_day(year))?);

        // Sports Day
        days.insert(match year {
            2020 => ymd(year, 7, 24)?,
            2021 => ymd(year, 7, 23)?,
            _ => nth_monday(year, 10, 2)?,
        });

        days.insert(ymd(year, 11, 3)?);
        days.insert(ymd(year, 11, 23)?);

        if year <= 2018 {
            days.insert(ymd(year, 12, 23)?);
        }

        if year == 2019 {
            // Enthronement
            for (m, d) in [(4, 30), (5, 1), (5, 2), (10, 22)] {
                days.insert(ymd(year, m, d)?);
            }
        }

        Ok(days)
    }

    /// Every holiday of the year, substitute and citizens' holidays included.
    pub fn year_holidays(&self, year: i32) -> AppResult<BTreeSet<NaiveDate>> {
        if !(FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
            return Err(AppError::HolidayCalendar(format!(
                "year {} outside supported range {}..={}",
                year, FIRST_SUPPORTED_YEAR, LAST_SUPPORTED_YEAR
            )));
        }

        let statutory = Self::statutory(year)?;
        let mut all = statutory.clone();

        // Citizens' holiday: a non-Sunday sandwiched between two statutory holidays.
        for day in &statutory {
            let gap = *day + Duration::days(1);
            let after = *day + Duration::days(2);
            if statutory.contains(&after)
                && !statutory.contains(&gap)
                && gap.weekday() != Weekday::Sun
            {
                all.insert(gap);
            }
        }

        // Substitute holiday: a statutory holiday on Sunday moves to the next free day.
        for day in &statutory {
            if day.weekday() != Weekday::Sun {
                continue;
            }
            let mut next = *day + Duration::days(1);
            while all.contains(&next) {
                next += Duration::days(1);
            }
            all.insert(next);
        }

        Ok(all)
    }
}

impl HolidayProvider for JapaneseHolidays {
    fn holidays(&self, year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
        Ok(self
            .year_holidays(year)?
            .into_iter()
            .filter(|d| d.month() == month)
            .collect())
    }
}

/// Public holidays plus company-specific days off.
pub struct WithExtraHolidays<P> {
    inner: P,
    extra: Vec<NaiveDate>,
}

impl<P: HolidayProvider> WithExtraHolidays<P> {
    pub fn new(inner: P, extra: Vec<NaiveDate>) -> Self {
        Self { inner, extra }
    }

    /// Build from the YYYY-MM-DD strings of the config file.
    pub fn from_strings(inner: P, extra: &[String]) -> AppResult<Self> {
        let dates = extra
            .iter()
            .map(|s| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self::new(inner, dates))
    }
}

impl<P: HolidayProvider> HolidayProvider for WithExtraHolidays<P> {
    fn holidays(&self, year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
        let mut days: BTreeSet<NaiveDate> = self.inner.holidays(year, month)?.into_iter().collect();
        days.extend(
            self.extra
                .iter()
                .filter(|d| d.year() == year && d.month() == month)
                .copied(),
        );
        Ok(days.into_iter().collect())
    }
}
