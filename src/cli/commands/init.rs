use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::audit::ttlog_or_warn;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the folder of the monthly CSV files
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rWorktime…");

    let cfg = Config::init_all(cli.csv_dir.clone(), cli.test)?;

    ttlog_or_warn(
        &cfg.audit_log_path(),
        "init",
        "config",
        &format!("Initialized with CSV folder {}", cfg.csv_path().display()),
    );

    if cfg.notion_token.is_none() || cfg.database_id.is_none() {
        println!("ℹ️  Set NOTION_TOKEN and DATABASE_ID (environment or config file) to use the remote store.");
    }

    println!("🎉 rWorktime initialization completed!");
    Ok(())
}
