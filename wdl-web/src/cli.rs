//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wdl-dashboard")]
#[command(about = "Message statistics dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard (config from env; flags override BIND_ADDR and DATABASE_URL).
    Serve {
        #[arg(short, long)]
        bind: Option<String>,
        #[arg(long)]
        database_url: Option<String>,
    },
    /// Insert messages from a JSON file into the store.
    Seed {
        file: PathBuf,
        #[arg(long)]
        database_url: Option<String>,
    },
}
