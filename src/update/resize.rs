//! Resize update handlers
//!
//! Pointer-driven width changes for the left sidebar and the right side panel.
//! Moves are throttled; pointer-up flushes the last pending position before
//! ending the sessions, so the committed width is always the true last one.

use tracing::{debug, trace};

use crate::commands::{Cmd, TimerId};
use crate::messages::ResizeMsg;
use crate::model::{Edge, ShellMode, ShellModel, SidebarPatch, ThrottleDecision};

/// Update function for resize messages
pub fn update_resize(model: &mut ShellModel, msg: ResizeMsg) -> Option<Cmd> {
    match msg {
        ResizeMsg::Start(edge) => {
            if model.mode == ShellMode::Shell {
                return None;
            }
            model.resize.start(edge, model.now);
            debug!(target: "resize", ?edge, "session started");

            let mut cmds = vec![Cmd::Redraw];
            if !model.listeners_attached {
                model.listeners_attached = true;
                cmds.push(Cmd::AttachWindowListeners);
            }
            Some(Cmd::batch(cmds))
        }

        ResizeMsg::PointerMove { client_x } => {
            if !model.resize.is_active() {
                return None;
            }
            match model.resize.throttle.offer(client_x, model.now) {
                ThrottleDecision::Apply(x) => apply_pointer_x(model, x),
                ThrottleDecision::ArmTrailing { wait } => {
                    let generation = model.next_generation();
                    model.resize.throttle.arm(generation);
                    Some(Cmd::schedule(TimerId::ResizeThrottle, generation, wait))
                }
                ThrottleDecision::Coalesced => None,
            }
        }

        ResizeMsg::ThrottleElapsed(generation) => {
            if !model.resize.is_active() {
                return None;
            }
            let x = model.resize.throttle.take_trailing(generation, model.now)?;
            apply_pointer_x(model, x)
        }

        ResizeMsg::Stop => {
            let was_active = model.resize.is_active();
            let mut cmd = None;
            if was_active {
                if let Some(x) = model.resize.throttle.flush() {
                    cmd = apply_pointer_x(model, x);
                }
                debug!(target: "resize", width = ?model.sidebar(), "sessions ended");
            }
            model.resize.clear();

            if model.listeners_attached {
                model.listeners_attached = false;
                cmd = Cmd::merge(cmd, Some(Cmd::DetachWindowListeners));
            }
            if was_active {
                cmd = Cmd::merge(cmd, Some(Cmd::Redraw));
            }
            cmd
        }
    }
}

/// Write the width implied by pointer position `x` for every active session
fn apply_pointer_x(model: &mut ShellModel, x: f32) -> Option<Cmd> {
    let mut changed = false;

    if model.resize.is_resizing(Edge::Left) {
        let width = model.clamp.clamp_left_width(x);
        changed |= model.store.set_sidebar_config(SidebarPatch::left_width(width));
    }

    if model.resize.is_resizing(Edge::Right) {
        // A closing panel keeps its rect until unmounted, not its handle
        let handle = model
            .visibility()
            .show_side_panel
            .then(|| model.geometry().right_handle)
            .flatten();
        match handle {
            Some(handle) => {
                // Dragging left of the handle grows the panel
                let start = model.right_width_px();
                let width = model.clamp.clamp_right_width(start + handle.x - x);
                changed |= model.store.set_sidebar_config(SidebarPatch::right_width(width));
            }
            None => trace!(target: "resize", "no live right handle, skipping tick"),
        }
    }

    changed.then_some(Cmd::Redraw)
}
