use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

pub mod commands;

#[derive(Parser)]
#[command(name = "package-lifecycle")]
#[command(about = "Walk a delivery package through its ordered/delivered/received lifecycle")]
#[command(long_about = "Tracks a package from the order, through the post office, to the client. \
                       Run without a subcommand to print the classic three-step delivery trace, \
                       or use 'package-lifecycle replay' to walk your own sequence.")]
pub struct Cli {
    /// Output format (overrides output.format from configuration)
    #[arg(long, global = true, value_enum, help = "Print traces as plain text or JSON")]
    pub format: Option<OutputFormat>,
    /// Print the advisory notice after each no-op step
    #[arg(long, global = true, help = "Show boundary notices for requests that leave the state unchanged")]
    pub notices: bool,
    /// Configuration file to read instead of ./package-lifecycle.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the status after start and after each of three advances
    Demo,
    /// Replay a sequence of advance/retreat requests against a fresh package
    Replay {
        /// Directions, separated by spaces or commas (advance|next|forward, retreat|prev|back)
        #[arg(required = true, num_args = 1.., value_name = "STEP")]
        steps: Vec<String>,
    },
    /// Print the full transition table
    Table,
}
