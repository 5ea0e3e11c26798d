//! player-shell binary: replay event traces through the layout shell

use anyhow::{Context, Result};
use clap::Parser;

use player_shell::cli::{CliArgs, Command};
use player_shell::config::ShellConfig;
use player_shell::config_paths;
use player_shell::runtime::{replay, Trace};

fn main() -> Result<()> {
    player_shell::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => ShellConfig::load_from(path),
        None => ShellConfig::load(),
    };

    match args.command {
        Command::Replay {
            trace,
            width,
            height,
            settle_ms,
            compact,
        } => {
            let trace = config_paths::resolve_trace(&trace);
            let mut script = Trace::load(&trace)?;
            if let Some(width) = width {
                script.window.0 = width;
            }
            if let Some(height) = height {
                script.window.1 = height;
            }
            if let Some(settle_ms) = settle_ms {
                script.settle_ms = settle_ms;
            }

            tracing::info!(steps = script.steps.len(), "replaying {}", trace.display());
            let report = replay(&script, &config)?;

            let json = if compact {
                serde_json::to_string(&report)
            } else {
                serde_json::to_string_pretty(&report)
            }
            .context("Failed to serialize replay report")?;
            println!("{json}");
        }
        Command::Config => {
            let yaml = serde_yaml::to_string(&config).context("Failed to serialize config")?;
            print!("{yaml}");
        }
        Command::Logs => {
            let path = config_paths::latest_log_file().context("No log file found")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
