//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod drawer;
mod layout;
mod resize;
mod slot;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::ShellModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use drawer::update_drawer;
pub use layout::{update_layout, update_nav, update_store};
pub use resize::update_resize;
pub use slot::{reconcile, settle, update_slot};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    // An unmounted shell only reacts to being mounted again
    if !model.mounted && !matches!(msg, Msg::App(_)) {
        tracing::trace!(target: "message", msg = %msg.type_name(), "ignored while unmounted");
        return None;
    }

    match msg {
        Msg::Resize(m) => resize::update_resize(model, m),
        Msg::Drawer(m) => drawer::update_drawer(model, m),
        Msg::Slot(m) => slot::update_slot(model, m),
        Msg::Nav(m) => layout::update_nav(model, m),
        Msg::Store(m) => layout::update_store(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut ShellModel, msg: Msg) -> Option<Cmd> {
    let is_noisy = msg.is_noisy();
    let msg_name = msg.type_name();
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    debug_assert!(
        !(after.show_drawer_button && after.show_side_panel),
        "drawer button and side panel both visible after {msg_name}"
    );

    result
}
