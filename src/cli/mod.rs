//! CLI interface for payband
//!
//! Provides subcommands for:
//! - `compute`: Generate the full payout schedule
//! - `summary`: Per-year rollup only
//! - `config`: Show effective configuration

mod compute;
mod summary;

pub use compute::ComputeArgs;
pub use summary::SummaryArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "payband")]
#[command(about = "Token payout schedule calculator with floor/ceiling band repricing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the full payout schedule
    Compute(ComputeArgs),
    /// Per-year rollup only
    Summary(SummaryArgs),
    /// Show effective configuration
    Config,
}
