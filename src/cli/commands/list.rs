use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::complete_rows;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, local } = cmd {
        let period = match month {
            Some(m) => Some(
                date::parse_year_month(m).ok_or_else(|| AppError::InvalidDate(m.to_string()))?,
            ),
            None => None,
        };

        let mut store = open_store(cfg, *local)?;
        let rows = store.query_all()?;

        let mut dated = complete_rows(&rows)?;
        if let Some((y, m)) = period {
            dated.retain(|r| r.date.year() == y && r.date.month() == m);
        }
        dated.sort_by_key(|r| r.date);

        if dated.is_empty() {
            println!("No rows recorded.");
            return Ok(());
        }

        let mut table = Table::new(
            ["date", "start", "end", "rest", "worked", "content"]
                .iter()
                .map(|h| Column::new(h))
                .collect(),
        );
        for r in &dated {
            let row = &r.row;
            table.add_row(vec![
                r.date.format("%Y/%m/%d").to_string(),
                row.start_time.clone().unwrap_or_default(),
                row.end_time.clone().unwrap_or_default(),
                row.rest.clone().unwrap_or_default(),
                row.work_time.clone().unwrap_or_default(),
                colorize_optional(row.content.as_deref().unwrap_or("")),
            ]);
        }

        print!("{}", table.render('-'));
        println!("{}", bold(&format!("{} row(s)", dated.len())));
    }
    Ok(())
}
