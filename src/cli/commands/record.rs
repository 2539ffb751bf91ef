use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder::{RecordLogic, RecordRequest};
use crate::errors::{AppError, AppResult};
use crate::store::csv_log::CsvLog;
use crate::store::notion::NotionClient;
use crate::utils::date;

/// Record one workday.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record {
        date: day,
        start,
        end,
        rest,
        content,
        round,
        local_only,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let request = RecordRequest {
            date: d,
            start_time: start.clone(),
            end_time: end.clone(),
            rest: rest.clone(),
            content: content.clone(),
            round: *round,
        };

        //
        // 2. Validate before touching any file
        //
        request.build_entry()?;

        //
        // 3. Remote store (resolved up front so a missing token fails early)
        //
        let mut remote = if *local_only {
            None
        } else {
            Some(NotionClient::new(cfg.notion_settings()?)?)
        };

        let csv_log = CsvLog::new(cfg.csv_path());
        RecordLogic::record(
            &request,
            &csv_log,
            remote.as_mut().map(|c| c as &mut dyn crate::store::RowStore),
            &cfg.audit_log_path(),
        )?;
    }

    Ok(())
}
