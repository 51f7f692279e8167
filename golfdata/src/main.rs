// golfdata/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use golfdata_core::domain::configuration::Pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug golfdata banestatus ... pour voir les détails
    // stderr only: stdout carries the "Wrote ..." line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let ok = match cli.command {
        Commands::Banestatus(args) => {
            commands::export::execute(Pipeline::Banestatus, config_path, args).await
        }
        Commands::Golfklubber(args) => {
            commands::export::execute(Pipeline::Golfklubber, config_path, args).await
        }
        Commands::All => commands::all::execute(config_path).await,
    };

    if !ok {
        // Exit with error code for cron / CI
        std::process::exit(1);
    }

    Ok(())
}
