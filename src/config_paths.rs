//! Centralized configuration paths for player-shell
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/player-shell/`
//! - Windows: `%APPDATA%\player-shell\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "player-shell";

/// Prefix of the daily-rolled log files (`player-shell.log.2026-10-18`)
pub const LOG_FILE_PREFIX: &str = "player-shell.log";

/// Base config directory for player-shell
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/player-shell`
///   - Else: `~/.config/player-shell`
///
/// Windows:
///   - `%APPDATA%\player-shell`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/player-shell/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/player-shell/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// `~/.config/player-shell/traces/`, searched for replay traces given by name
pub fn traces_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("traces"))
}

/// Resolve a trace argument to a file
///
/// An existing path is used as given. Otherwise the name is looked up in
/// `dir`, with `.yaml` appended when it has no extension.
pub fn resolve_trace_in(arg: &Path, dir: Option<&Path>) -> PathBuf {
    if arg.exists() {
        return arg.to_path_buf();
    }
    let Some(dir) = dir else {
        return arg.to_path_buf();
    };

    let mut candidate = dir.join(arg);
    if candidate.extension().is_none() {
        candidate.set_extension("yaml");
    }
    if candidate.is_file() {
        candidate
    } else {
        arg.to_path_buf()
    }
}

/// [`resolve_trace_in`] against [`traces_dir`]
pub fn resolve_trace(arg: &Path) -> PathBuf {
    resolve_trace_in(arg, traces_dir().as_deref())
}

/// Most recently modified log file in `dir`
pub fn latest_log_file_in(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        .filter_map(|entry| {
            let modified = entry.metadata().ok()?.modified().ok()?;
            Some((modified, entry.path()))
        })
        .max_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
        .map(|(_, path)| path)
}

/// Today's (or the newest) log file under [`logs_dir`]
pub fn latest_log_file() -> Option<PathBuf> {
    latest_log_file_in(&logs_dir()?)
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory available")
    })?;
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
