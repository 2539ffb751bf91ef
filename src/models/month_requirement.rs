use crate::core::calendar::{BASELINE_WORKING_DAYS, BASELINE_WORKING_HOURS};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overtime {
    NotNeeded,
    Needed {
        /// Rounded to one decimal.
        extra_hours_per_day: f64,
        extra_minutes_per_day: i64,
    },
}

/// Working-day forecast for one month. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRequirement {
    pub year: i32,
    pub month: u32,
    pub total_calendar_days: u32,
    pub holiday_count: usize,
    pub weekend_count: usize,
    /// Holidays and weekends merged, without duplicates, sorted.
    pub non_working_days: Vec<NaiveDate>,
    pub leave_days: u32,
    pub required_working_days: i64,
    pub required_working_hours: i64,
    pub forecast_working_days: i64,
    pub forecast_working_hours: i64,
    pub overtime: Overtime,
}

impl MonthRequirement {
    pub fn needs_overtime(&self) -> bool {
        matches!(self.overtime, Overtime::Needed { .. })
    }

    pub fn extra_hours_per_day(&self) -> Option<f64> {
        match self.overtime {
            Overtime::Needed {
                extra_hours_per_day,
                ..
            } => Some(extra_hours_per_day),
            Overtime::NotNeeded => None,
        }
    }

    pub fn render_summary(&self) -> String {
        let line = "-----------------------------------------------";
        let leave = if self.leave_days > 0 {
            format!("{} day(s)", self.leave_days)
        } else {
            "none".to_string()
        };

        let mut out = Vec::new();
        out.push(line.to_string());
        out.push(format!(
            "Working-day summary for {}-{:02}",
            self.year, self.month
        ));
        out.push(line.to_string());
        out.push(format!(
            "Days in month: {}, weekends/holidays: {}, leave: {}",
            self.total_calendar_days,
            self.non_working_days.len(),
            leave
        ));
        out.push(format!(
            "Required working days: {}, required working hours: {}h",
            self.required_working_days, self.required_working_hours
        ));
        if self.leave_days > 0 {
            out.push(format!(
                "Forecast working days: {}, forecast working hours: {}h",
                self.forecast_working_days, self.forecast_working_hours
            ));
        } else {
            out.push("No leave planned: the forecast equals the required hours.".to_string());
        }
        out.push(line.to_string());

        match self.overtime {
            Overtime::Needed {
                extra_hours_per_day,
                extra_minutes_per_day,
            } => {
                out.push(format!(
                    "{} working days give {}h, {}h short of the {}h baseline.",
                    self.forecast_working_days,
                    self.forecast_working_hours,
                    BASELINE_WORKING_HOURS - self.forecast_working_hours,
                    BASELINE_WORKING_HOURS
                ));
                out.push(format!(
                    "About {:.1}h ({} min) of overtime per day is needed.",
                    extra_hours_per_day, extra_minutes_per_day
                ));
            }
            Overtime::NotNeeded => {
                out.push(format!(
                    "{} working days give {}h >= {}h ({} days): no overtime needed.",
                    self.forecast_working_days,
                    self.forecast_working_hours,
                    BASELINE_WORKING_HOURS,
                    BASELINE_WORKING_DAYS
                ));
            }
        }

        out.join("\n")
    }
}
