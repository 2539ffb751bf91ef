use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorktime
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record working hours in Notion and forecast monthly working days and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override the folder of the monthly CSV files
    #[arg(global = true, long = "csv-dir")]
    pub csv_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the CSV folder
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration (token masked)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Forecast the working days of a month and the overtime needed
    Forecast {
        #[arg(long, help = "Target year (default: current year)")]
        year: Option<i32>,

        #[arg(long, help = "Target month 1-12 (default: current month)")]
        month: Option<u32>,

        #[arg(long, default_value_t = 0, help = "Days of leave planned in the month")]
        leave: u32,
    },

    /// Record one workday (CSV file + remote store)
    Record {
        /// Work date YYYY-MM-DD (default: today)
        date: Option<String>,

        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "out", help = "End time (HH:MM)")]
        end: String,

        #[arg(long, help = "Rest time HH:MM (default 01:00)")]
        rest: Option<String>,

        #[arg(long, help = "Free-text description of the work")]
        content: Option<String>,

        #[arg(long, help = "Round start and end to the quarter hour")]
        round: bool,

        #[arg(long = "local-only", help = "Only write the CSV file, skip the remote store")]
        local_only: bool,
    },

    /// Show the hours worked in the current month
    Summary {
        #[arg(long, help = "Any day of the month to summarize (default: today)")]
        date: Option<String>,

        #[arg(long, help = "Read the local CSV files instead of the remote store")]
        local: bool,
    },

    /// List recorded rows sorted by date
    List {
        #[arg(long, help = "Only rows of this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, help = "Read the local CSV files instead of the remote store")]
        local: bool,
    },

    /// Round a timestamp (YYYY-MM-DD HH:MM[:SS] or HH:MM) to the quarter hour
    Round {
        timestamp: String,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the lines of the audit log")]
        print: bool,
    },
}
