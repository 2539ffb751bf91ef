use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::compute_month_requirement;
use crate::core::holidays::{JapaneseHolidays, WithExtraHolidays};
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Forecast { year, month, leave } = cmd {
        let holidays = WithExtraHolidays::from_strings(JapaneseHolidays, &cfg.extra_holidays)?;
        let req = compute_month_requirement(*year, *month, *leave, date::today(), &holidays)?;

        header(format!("Working days for {}-{:02}", req.year, req.month));
        println!("{}", req.render_summary());

        if req.needs_overtime() {
            warning("Overtime needed this month.");
        } else {
            success("No overtime needed this month.");
        }
    }
    Ok(())
}
