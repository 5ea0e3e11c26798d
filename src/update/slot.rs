//! Presence slot reconciliation
//!
//! Moves the right-edge slot toward whatever the visibility policy wants,
//! one transition at a time.

use tracing::debug;

use crate::commands::{Cmd, TimerId};
use crate::messages::SlotMsg;
use crate::model::{PanelPhase, ShellModel, SlotItem, SlotState};

/// Update function for slot messages
pub fn update_slot(model: &mut ShellModel, msg: SlotMsg) -> Option<Cmd> {
    match msg {
        SlotMsg::TransitionElapsed(generation) => {
            let state = model.slot.current?;
            if state.generation != Some(generation) {
                return None;
            }

            match state.phase {
                PanelPhase::Opening => {
                    debug!(target: "slot", item = ?state.item, "open");
                    model.slot.current = Some(SlotState {
                        phase: PanelPhase::Open,
                        generation: None,
                        ..state
                    });
                    Some(Cmd::Redraw)
                }
                PanelPhase::Closing => {
                    debug!(target: "slot", item = ?state.item, "unmounted");
                    model.slot.current = None;
                    Cmd::merge(Some(Cmd::Redraw), reconcile(model))
                }
                PanelPhase::Open | PanelPhase::Closed => None,
            }
        }
    }
}

/// Re-evaluate visibility and start the next transition if one is needed
///
/// An occupant that is closing always finishes before anything else mounts.
pub fn reconcile(model: &mut ShellModel) -> Option<Cmd> {
    let desired = model.visibility().slot_occupant();
    model.slot.desired = desired;

    if !model.mounted {
        return None;
    }

    let Some(state) = model.slot.current else {
        let item = desired?;
        return Some(Cmd::batch(vec![
            begin(model, item, PanelPhase::Opening),
            Cmd::Redraw,
        ]));
    };

    let cmd = match (state.phase, desired) {
        (PanelPhase::Opening | PanelPhase::Open, Some(item)) if item == state.item => return None,
        // Wanted again while leaving: turn around
        (PanelPhase::Closing, Some(item)) if item == state.item => {
            begin(model, item, PanelPhase::Opening)
        }
        // Exit in progress; the next occupant mounts when it completes
        (PanelPhase::Closing, _) => return None,
        _ => begin(model, state.item, PanelPhase::Closing),
    };
    Some(Cmd::batch(vec![cmd, Cmd::Redraw]))
}

/// Mount whatever is wanted right now, fully shown, with no transition
pub fn settle(model: &mut ShellModel) {
    let desired = model.visibility().slot_occupant();
    model.slot.desired = desired;
    model.slot.current = desired.map(|item| SlotState::settled(item, model.now));
}

fn begin(model: &mut ShellModel, item: SlotItem, phase: PanelPhase) -> Cmd {
    let timing = item.timing(&model.config.animation);
    let millis = match phase {
        PanelPhase::Closing => timing.exit_ms,
        _ => timing.enter_ms,
    };
    let duration = std::time::Duration::from_millis(millis);
    let generation = model.next_generation();

    debug!(target: "slot", ?item, ?phase, ms = millis, "transition");
    model.slot.current = Some(SlotState {
        item,
        phase,
        started_at: model.now,
        duration,
        generation: Some(generation),
    });
    Cmd::schedule(TimerId::SlotTransition, generation, duration)
}
