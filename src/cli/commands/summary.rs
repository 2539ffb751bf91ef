use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::summarize_current_month;
use crate::core::calendar::BASELINE_WORKING_HOURS;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::{date, mins2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date: day, local } = cmd {
        let today = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let mut store = open_store(cfg, *local)?;
        let summary = summarize_current_month(store.as_mut(), today)?;

        header(format!("Worked time for {}-{:02}", summary.year, summary.month));

        match summary.last_date {
            None => info("No entries recorded for this month yet."),
            Some(last) => {
                println!(
                    "As of {}: {} day(s) worked, {} hours {} minutes in total.",
                    last.format("%Y/%m/%d"),
                    summary.entry_count,
                    summary.total_hours,
                    summary.total_minutes
                );

                let balance = summary.total_in_minutes() - BASELINE_WORKING_HOURS * 60;
                println!(
                    "Against the {}h baseline: {}{}{}",
                    BASELINE_WORKING_HOURS,
                    color_for_balance(balance),
                    mins2readable(balance, true, false),
                    RESET
                );
            }
        }
    }
    Ok(())
}
