//! View-side helpers: what is visible and where it goes
//!
//! Nothing here draws. Renderers (a GPU frame, a webview, a test) read the
//! model through these pure functions and the slot phases.

pub mod geometry;
pub mod visibility;

pub use geometry::{Rect, ShellGeometry};
pub use visibility::Visibility;
