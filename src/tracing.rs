//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! resize, drawer and slot state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=drawer=debug,resize=trace` - scoped filtering
//! - `RUST_LOG=player_shell::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/player-shell/logs/player-shell.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{PanelPhase, ShellModel, SlotItem};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/player-shell/logs/player-shell.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so replay output on stdout stays machine-readable
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_PREFIX,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub left_width: String,
    pub right_width: String,
    pub right_expanded: bool,
    pub drawer_open: bool,
    pub resizing: (bool, bool),
    pub slot: Option<(SlotItem, PanelPhase)>,
    pub show_drawer_button: bool,
    pub show_side_panel: bool,
}

impl LayoutSnapshot {
    pub fn from_model(model: &ShellModel) -> Self {
        let sidebar = model.sidebar();
        let visibility = model.visibility();
        Self {
            left_width: sidebar.left_width.to_string(),
            right_width: sidebar.right_width.to_string(),
            right_expanded: sidebar.right_expanded,
            drawer_open: model.drawer.open,
            resizing: (model.resize.left.is_some(), model.resize.right.is_some()),
            slot: model.slot.current.map(|s| (s.item, s.phase)),
            show_drawer_button: visibility.show_drawer_button,
            show_side_panel: visibility.show_side_panel,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.left_width != other.left_width {
            changes.push(format!("left: {} → {}", self.left_width, other.left_width));
        }
        if self.right_width != other.right_width {
            changes.push(format!("right: {} → {}", self.right_width, other.right_width));
        }
        if self.right_expanded != other.right_expanded {
            changes.push(format!("expanded: {}", other.right_expanded));
        }
        if self.drawer_open != other.drawer_open {
            changes.push(format!("drawer: {}", if other.drawer_open { "open" } else { "closed" }));
        }
        if self.resizing != other.resizing {
            changes.push(format!("resizing: {:?} → {:?}", self.resizing, other.resizing));
        }
        if self.slot != other.slot {
            changes.push(format!("slot: {:?} → {:?}", self.slot, other.slot));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
