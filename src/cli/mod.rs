//! CLI interface for btc-ticker
//!
//! Provides subcommands for:
//! - `run`: Live dashboard (default)
//! - `once`: Fetch and print a single price
//! - `config`: Show effective configuration

mod once;
mod run;

pub use once::OnceArgs;
pub use run::RunArgs;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "btc-ticker")]
#[command(about = "Live BTC/IDR price from Indodax, in your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to an optional configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Subcommand to run, defaulting to the dashboard
    pub fn selected_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the live dashboard
    Run(RunArgs),
    /// Fetch the price once and print it
    Once(OnceArgs),
    /// Show configuration
    Config,
}
