// golfdata/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "golfdata")]
#[command(about = "Golf course status and NGF club registry snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML configuration file (default: ./golfdata.yaml when present)
    #[arg(long, global = true, env = "GOLFDATA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ⛳ Scrapes course open/closed status into data/banestatus.json
    Banestatus(SourceArgs),

    /// 🏌️ Downloads the NGF club registry into data/golfklubber.json
    Golfklubber(SourceArgs),

    /// 🔁 Runs both exports, one after the other
    All,
}

/// Per-run overrides. These win over the config file and GOLFDATA_* variables.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SourceArgs {
    /// Source URL
    #[arg(long)]
    pub url: Option<String>,

    /// Output file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Read the body from a local file instead of fetching it
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
