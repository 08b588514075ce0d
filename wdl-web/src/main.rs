//! wdl-dashboard: serve the message statistics dashboard or seed its store.

use anyhow::Result;
use clap::Parser;
use wdl_web::{init_tracing, run_server, seed_from_file, Cli, Commands, DashboardConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, database_url } => {
            let config = DashboardConfig::load()?.with_overrides(bind, database_url);
            run_server(config).await
        }
        Commands::Seed { file, database_url } => {
            init_tracing(None)?;

            let config = DashboardConfig::load()?.with_overrides(None, database_url);
            config.validate()?;

            let inserted = seed_from_file(&config, &file).await?;
            println!("Inserted {} messages from {}", inserted, file.display());
            Ok(())
        }
    }
}
