//! Command-line argument parsing
//!
//! Supports:
//! - Replaying a recorded event trace and printing the final layout
//! - Printing the effective configuration
//! - Locating the newest log file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layout shell controller for a desktop music player
#[derive(Parser, Debug)]
#[command(name = "player-shell", version, about = "Layout shell controller for a music player")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/player-shell/config.yaml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay an event trace and print the resulting layout as JSON
    Replay {
        /// YAML trace file, or a trace name under ~/.config/player-shell/traces/
        #[arg(value_name = "TRACE")]
        trace: PathBuf,

        /// Override the trace's window width
        #[arg(long, value_name = "PX")]
        width: Option<f32>,

        /// Override the trace's window height
        #[arg(long, value_name = "PX")]
        height: Option<f32>,

        /// Time to keep running after the last step
        #[arg(long, value_name = "MS")]
        settle_ms: Option<u64>,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the effective configuration as YAML
    Config,
    /// Print the path of the newest log file
    Logs,
}
