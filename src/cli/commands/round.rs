use crate::cli::parser::Commands;
use crate::core::rounding::round_to_nearest_15_minutes;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Round { timestamp } = cmd {
        // A bare HH:MM is taken as today.
        let dt = time::parse_timestamp(timestamp)
            .or_else(|| time::parse_time(timestamp).map(|t| date::today().and_time(t)))
            .ok_or_else(|| AppError::InvalidTime(timestamp.to_string()))?;

        let rounded = round_to_nearest_15_minutes(dt);
        println!("{}", rounded.format("%Y-%m-%d %H:%M:%S"));
    }
    Ok(())
}
