use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "tournament schedule & player-stats backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Load the match files and start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch the match files once and log an ingestion summary
    Ingest,
}
