//! Runtime module - executes commands for the shell model
//!
//! This module contains everything between the pure update functions and
//! the outside world:
//! - `clock` - system and manual time sources
//! - `timers` - deadline-ordered timer queue
//! - `listeners` - window-wide pointer event bus
//! - `shell` - the single-threaded runtime driving `update`
//! - `trace` - scripted event replay

pub mod clock;
pub mod listeners;
pub mod shell;
pub mod timers;
pub mod trace;

pub use clock::{Clock, ManualClock, SystemClock};
pub use listeners::{ListenerId, WindowListeners, WindowPointerEvent};
pub use shell::ShellRuntime;
pub use timers::TimerQueue;
pub use trace::{replay, ReplayReport, Trace, TraceError, TraceEvent, TraceStep};
