use clap::{Parser, Subcommand};

/// Command-line interface definition for habitrack
/// CLI application to track habit events in a remote store
#[derive(Parser)]
#[command(
    name = "habitrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracking CLI: log events to a remote store and chart daily counts",
    long_about = None
)]
pub struct Cli {
    /// Override the store endpoint URL (useful for tests or a custom store)
    #[arg(global = true, long = "store-url")]
    pub store_url: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and check the store environment
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check configuration fields and store environment variables"
        )]
        check: bool,
    },

    /// Record one habit event now
    Track,

    /// Show the dashboard (bar chart of the most recent daily counts)
    Show {
        /// How many recent data points to chart (default from config)
        #[arg(long, short)]
        days: Option<usize>,

        #[arg(long = "table", help = "Render the full table instead of the chart")]
        table: bool,
    },

    /// List all dates with their event counts
    List,
}
