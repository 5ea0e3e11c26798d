//! Lifecycle update handlers

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{PresenceSlot, ShellModel};

use super::drawer::enforce_drawer_policy;
use super::slot::settle;

/// Update function for mount/unmount
pub fn update_app(model: &mut ShellModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Mount => {
            if model.mounted {
                return None;
            }
            model.mounted = true;
            enforce_drawer_policy(model);
            // Whatever is visible at mount appears without an entry transition
            settle(model);
            debug!(target: "slot", occupant = ?model.slot.mounted(), "mounted");
            Some(Cmd::Redraw)
        }

        AppMsg::Unmount => {
            if !model.mounted {
                return None;
            }
            model.mounted = false;
            model.resize.clear();
            model.drawer.force_close();
            model.slot = PresenceSlot::default();
            debug!(target: "slot", "unmounted");

            if model.listeners_attached {
                model.listeners_attached = false;
                Some(Cmd::DetachWindowListeners)
            } else {
                None
            }
        }
    }
}
