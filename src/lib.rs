//! Player shell - Elm-style layout controller for a desktop music player
//!
//! This crate provides the state and logic of the shell around a player's
//! routed content: resizable sidebars, the hover-revealed queue drawer, the
//! expanded queue panel and their route-aware visibility. Rendering is left
//! to whoever consumes the model.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod store;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use messages::Msg;
pub use model::ShellModel;
pub use runtime::ShellRuntime;
pub use store::LayoutStore;
