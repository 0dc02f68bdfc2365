use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sessiontracker
#[derive(Parser)]
#[command(
    name = "sessiontracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track activity sessions, store them as JSON and report statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the sessions file path (useful for tests or custom stores)
    #[arg(global = true, long = "data", value_name = "PATH")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the sessions file and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },

    /// Start a session and stop it with Enter
    Track {
        /// Activity label (default: `default_activity` from the config)
        activity: Option<String>,

        #[arg(long = "no-timer", help = "Do not show the running timer")]
        no_timer: bool,
    },

    /// List stored sessions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, short, help = "Show only sessions with this activity")]
        activity: Option<String>,

        #[arg(long = "12h", conflicts_with = "h24", help = "Show times in 12-hour format")]
        h12: bool,

        #[arg(long = "24h", help = "Show times in 24-hour format")]
        h24: bool,
    },

    /// Show session statistics
    Stats {
        #[arg(long, help = "Add the activity distribution chart")]
        chart: bool,

        #[arg(long, conflicts_with = "chart", help = "Print statistics as JSON")]
        json: bool,
    },

    /// Edit the activity or comments of a session
    Edit {
        /// Session ID
        id: u64,

        #[arg(long, help = "New activity label")]
        activity: Option<String>,

        #[arg(long, help = "New comments")]
        comments: Option<String>,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            help = "Set a field by name (activity, comments); other keys are ignored"
        )]
        set: Vec<String>,
    },

    /// Delete one or more sessions by ID
    Del {
        /// Session IDs
        #[arg(required = true)]
        ids: Vec<u64>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the sessions file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export session data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
