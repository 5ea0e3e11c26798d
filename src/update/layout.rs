//! Layout, navigation and store update handlers
//!
//! Everything that can change the visibility inputs from outside the shell:
//! the route, the persisted sidebar config, the window and the shell mode.

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::{LayoutMsg, NavMsg, StoreMsg};
use crate::model::{Route, ShellMode, ShellModel, SidebarPatch};

use super::drawer::enforce_drawer_policy;
use super::slot::reconcile;

/// Update function for layout messages
pub fn update_layout(model: &mut ShellModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::WindowResized { width, height } => {
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        LayoutMsg::SetMode(mode) => {
            if model.mode == mode {
                return None;
            }
            model.mode = mode;

            let mut cmd = Some(Cmd::Redraw);
            if mode == ShellMode::Shell {
                // Handles disappear with the sidebars
                model.resize.clear();
                if model.listeners_attached {
                    model.listeners_attached = false;
                    cmd = Cmd::merge(cmd, Some(Cmd::DetachWindowListeners));
                }
            }
            enforce_drawer_policy(model);
            Cmd::merge(cmd, reconcile(model))
        }

        LayoutMsg::ToggleRightExpanded => {
            let expanded = !model.sidebar().right_expanded;
            model
                .store
                .set_sidebar_config(SidebarPatch::right_expanded(expanded));
            sidebar_changed(model)
        }
    }
}

/// Update function for navigation messages
pub fn update_nav(model: &mut ShellModel, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::LocationChanged(path) => {
            let route = Route::new(path);
            if route == model.route {
                return None;
            }
            debug!(target: "slot", from = %model.route.path(), to = %route.path(), "route changed");
            model.route = route;
            enforce_drawer_policy(model);
            reconcile(model)
        }
    }
}

/// Update function for store notifications
pub fn update_store(model: &mut ShellModel, msg: StoreMsg) -> Option<Cmd> {
    match msg {
        StoreMsg::SidebarChanged => sidebar_changed(model),
    }
}

fn sidebar_changed(model: &mut ShellModel) -> Option<Cmd> {
    enforce_drawer_policy(model);
    let reconciled = reconcile(model);
    if reconciled.is_none() && model.mounted {
        // Widths may have changed even when the slot did not
        return Some(Cmd::Redraw);
    }
    reconciled
}
