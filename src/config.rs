//! Shell configuration persistence
//!
//! Stores layout policy in `~/.config/player-shell/config.yaml`: width clamp
//! ranges, reveal/close/throttle timings, transition durations and the fixed
//! heights of the shell bars. Every field has a default, so a partial file
//! only overrides what it names.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Allowed pixel range for one sidebar edge, plus the width used when the
/// persisted value cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl WidthRange {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    /// Clamp a pixel width into `[min, max]`. NaN collapses to `min`.
    pub fn clamp(&self, px: f32) -> f32 {
        if px.is_nan() {
            return self.min;
        }
        px.max(self.min).min(self.max)
    }
}

/// Clamp ranges for both sidebars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarLimits {
    #[serde(default = "default_left_range")]
    pub left: WidthRange,
    #[serde(default = "default_right_range")]
    pub right: WidthRange,
}

fn default_left_range() -> WidthRange {
    WidthRange::new(165.0, 400.0, 400.0)
}

fn default_right_range() -> WidthRange {
    WidthRange::new(250.0, 960.0, 400.0)
}

impl Default for SidebarLimits {
    fn default() -> Self {
        Self {
            left: default_left_range(),
            right: default_right_range(),
        }
    }
}

/// Delays driving the drawer and the resize throttle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Hover time on the reveal affordance before the drawer opens
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,
    /// Delay between leaving the drawer and checking whether to close it
    #[serde(default = "default_close_delay")]
    pub drawer_close_delay_ms: u64,
    /// Minimum spacing between width writes during a drag
    #[serde(default = "default_throttle")]
    pub resize_throttle_ms: u64,
}

fn default_reveal_delay() -> u64 {
    500
}

fn default_close_delay() -> u64 {
    50
}

fn default_throttle() -> u64 {
    50
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay(),
            drawer_close_delay_ms: default_close_delay(),
            resize_throttle_ms: default_throttle(),
        }
    }
}

impl TimingConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn drawer_close_delay(&self) -> Duration {
        Duration::from_millis(self.drawer_close_delay_ms)
    }

    pub fn resize_throttle(&self) -> Duration {
        Duration::from_millis(self.resize_throttle_ms)
    }
}

/// Enter/exit durations of one slot occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub enter_ms: u64,
    pub exit_ms: u64,
}

impl TransitionTiming {
    pub const fn new(enter_ms: u64, exit_ms: u64) -> Self {
        Self { enter_ms, exit_ms }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_button_timing")]
    pub drawer_button: TransitionTiming,
    #[serde(default = "default_drawer_timing")]
    pub drawer: TransitionTiming,
    #[serde(default = "default_side_panel_timing")]
    pub side_panel: TransitionTiming,
}

fn default_button_timing() -> TransitionTiming {
    TransitionTiming::new(100, 200)
}

fn default_drawer_timing() -> TransitionTiming {
    TransitionTiming::new(300, 300)
}

fn default_side_panel_timing() -> TransitionTiming {
    TransitionTiming::new(500, 500)
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            drawer_button: default_button_timing(),
            drawer: default_drawer_timing(),
            side_panel: default_side_panel_timing(),
        }
    }
}

/// Fixed chrome around the routed content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromeConfig {
    #[serde(default = "default_title_bar_height")]
    pub title_bar_height: f32,
    #[serde(default = "default_player_bar_height")]
    pub player_bar_height: f32,
    #[serde(default = "default_handle_width")]
    pub handle_width: f32,
    /// Drawer width as a fraction of the window width
    #[serde(default = "default_drawer_width_fraction")]
    pub drawer_width_fraction: f32,
    #[serde(default = "default_drawer_min_width")]
    pub drawer_min_width: f32,
    /// Vertical space the drawer leaves free inside the main row
    #[serde(default = "default_drawer_inset")]
    pub drawer_vertical_inset: f32,
}

fn default_title_bar_height() -> f32 {
    30.0
}

fn default_player_bar_height() -> f32 {
    90.0
}

fn default_handle_width() -> f32 {
    2.0
}

fn default_drawer_width_fraction() -> f32 {
    0.3
}

fn default_drawer_min_width() -> f32 {
    400.0
}

fn default_drawer_inset() -> f32 {
    120.0
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            title_bar_height: default_title_bar_height(),
            player_bar_height: default_player_bar_height(),
            handle_width: default_handle_width(),
            drawer_width_fraction: default_drawer_width_fraction(),
            drawer_min_width: default_drawer_min_width(),
            drawer_vertical_inset: default_drawer_inset(),
        }
    }
}

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub sidebar: SidebarLimits,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub chrome: ChromeConfig,
}

impl ShellConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
