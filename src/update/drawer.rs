//! Drawer update handlers
//!
//! Handles the hover-delayed reveal of the queue drawer and its delayed,
//! suppressible dismissal.

use tracing::{debug, trace};

use crate::commands::{Cmd, TimerId};
use crate::messages::DrawerMsg;
use crate::model::{ShellMode, ShellModel};

use super::slot::reconcile;

/// Update function for drawer messages
pub fn update_drawer(model: &mut ShellModel, msg: DrawerMsg) -> Option<Cmd> {
    match msg {
        DrawerMsg::RevealEnter => {
            if model.drawer.open || model.drawer.is_reveal_armed() {
                return None;
            }
            if !model.visibility().show_drawer_button {
                trace!(target: "drawer", "reveal affordance hidden, ignoring hover");
                return None;
            }

            let generation = model.next_generation();
            model.drawer.pending_open = Some(generation);
            debug!(target: "drawer", ?generation, "reveal armed");
            Some(Cmd::schedule(
                TimerId::DrawerReveal,
                generation,
                model.config.timing.reveal_delay(),
            ))
        }

        DrawerMsg::RevealLeave => {
            if let Some(generation) = model.drawer.pending_open.take() {
                debug!(target: "drawer", ?generation, "reveal cancelled");
            }
            None
        }

        DrawerMsg::RevealElapsed(generation) => {
            if model.drawer.pending_open != Some(generation) {
                return None;
            }
            model.drawer.pending_open = None;
            model.drawer.open = true;
            debug!(target: "drawer", "opened");
            reconcile(model)
        }

        DrawerMsg::DrawerLeave => {
            if !model.drawer.open {
                return None;
            }
            let generation = model.next_generation();
            model.drawer.pending_close = Some(generation);
            Some(Cmd::schedule(
                TimerId::DrawerCloseCheck,
                generation,
                model.config.timing.drawer_close_delay(),
            ))
        }

        DrawerMsg::CloseCheckElapsed(generation) => {
            if model.drawer.pending_close != Some(generation) {
                return None;
            }
            model.drawer.pending_close = None;
            if !model.drawer.open {
                return None;
            }
            // Read now, not when the check was scheduled: a queue drag may
            // have started in the meantime
            if model.reordering.is_reordering() {
                debug!(target: "drawer", "close suppressed while reordering queue");
                return None;
            }
            model.drawer.open = false;
            debug!(target: "drawer", "closed");
            reconcile(model)
        }

        DrawerMsg::Close => {
            let was_open = model.drawer.open;
            model.drawer.force_close();
            if was_open {
                reconcile(model)
            } else {
                None
            }
        }
    }
}

/// Close the drawer wherever the policy forbids it
///
/// The drawer cannot be open on the now-playing route, in shell mode, or
/// alongside the expanded side panel; any armed timer is dropped as well.
pub(crate) fn enforce_drawer_policy(model: &mut ShellModel) {
    let forbidden = model.mode == ShellMode::Shell
        || model.route.is_now_playing()
        || model.sidebar().right_expanded;

    if forbidden && (model.drawer.open || model.drawer.pending_open.is_some()) {
        debug!(target: "drawer", route = %model.route.path(), "drawer forced closed");
        model.drawer.force_close();
    }
}
