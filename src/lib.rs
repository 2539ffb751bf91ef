//! rWorktime library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Forecast { .. } => cli::commands::forecast::handle(&cli.command, cfg),
        Commands::Record { .. } => cli::commands::record::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Round { .. } => cli::commands::round::handle(&cli.command),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ .env in the working directory, if any
    dotenv::dotenv().ok();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ load config once
    let mut cfg = Config::load()?;

    // 4️⃣ command-line override of the CSV folder
    if let Some(custom) = &cli.csv_dir {
        cfg.csv_dir = custom.clone();
    }

    dispatch(&cli, &cfg)
}
