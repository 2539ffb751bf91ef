use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::read_log;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let lines = read_log(&cfg.audit_log_path())?;
        if lines.is_empty() {
            println!("Audit log is empty.");
        }
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}
