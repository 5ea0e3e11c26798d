//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The shell never owns a timer or a listener itself: it asks the runtime for
//! one and identifies the answer by generation.

use std::time::Duration;

use crate::messages::{DrawerMsg, Msg, ResizeMsg, SlotMsg};

/// Identity of one scheduled timer
///
/// Generations are unique for the lifetime of a model. Cancelling a timer is
/// done by forgetting its generation; when it fires, the mismatch drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerGeneration(pub u64);

/// The kinds of timers the shell schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Hover delay before the queue drawer opens
    DrawerReveal,
    /// Delayed re-check after the pointer leaves the drawer
    DrawerCloseCheck,
    /// Trailing edge of the resize throttle
    ResizeThrottle,
    /// End of the current slot enter/exit transition
    SlotTransition,
}

impl TimerId {
    /// Message delivered to `update` when this timer fires
    pub fn fired(self, generation: TimerGeneration) -> Msg {
        match self {
            TimerId::DrawerReveal => Msg::Drawer(DrawerMsg::RevealElapsed(generation)),
            TimerId::DrawerCloseCheck => Msg::Drawer(DrawerMsg::CloseCheckElapsed(generation)),
            TimerId::ResizeThrottle => Msg::Resize(ResizeMsg::ThrottleElapsed(generation)),
            TimerId::SlotTransition => Msg::Slot(SlotMsg::TransitionElapsed(generation)),
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the shell
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Deliver `timer.fired(generation)` after `delay`
    ScheduleTimer {
        timer: TimerId,
        generation: TimerGeneration,
        delay: Duration,
    },
    /// Start receiving window-wide pointer move/up events
    AttachWindowListeners,
    /// Stop receiving window-wide pointer events
    DetachWindowListeners,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn schedule(timer: TimerId, generation: TimerGeneration, delay: Duration) -> Self {
        Cmd::ScheduleTimer {
            timer,
            generation,
            delay,
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Combine two optional commands, flattening trivial cases
    pub fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
        let a = a.filter(|cmd| *cmd != Cmd::None);
        let b = b.filter(|cmd| *cmd != Cmd::None);
        match (a, b) {
            (None, other) | (other, None) => other,
            (Some(Cmd::Batch(mut left)), Some(Cmd::Batch(right))) => {
                left.extend(right);
                Some(Cmd::Batch(left))
            }
            (Some(Cmd::Batch(mut left)), Some(right)) => {
                left.push(right);
                Some(Cmd::Batch(left))
            }
            (Some(left), Some(right)) => Some(Cmd::Batch(vec![left, right])),
        }
    }

    /// Flatten nested batches into a list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_flattens_batches() {
        let merged = Cmd::merge(
            Some(Cmd::Batch(vec![Cmd::Redraw])),
            Some(Cmd::AttachWindowListeners),
        );
        assert_eq!(
            merged,
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::AttachWindowListeners]))
        );
        assert_eq!(Cmd::merge(None, Some(Cmd::Redraw)), Some(Cmd::Redraw));
        assert_eq!(Cmd::merge(Some(Cmd::None), None), None);
    }

    #[test]
    fn test_merge_drops_none_on_either_side() {
        assert_eq!(Cmd::merge(None, Some(Cmd::None)), None);
        assert_eq!(Cmd::merge(Some(Cmd::None), Some(Cmd::None)), None);
        assert_eq!(
            Cmd::merge(Some(Cmd::None), Some(Cmd::Redraw)),
            Some(Cmd::Redraw)
        );
        assert_eq!(
            Cmd::merge(Some(Cmd::DetachWindowListeners), Some(Cmd::None)),
            Some(Cmd::DetachWindowListeners)
        );
    }

    #[test]
    fn test_needs_redraw_looks_inside_batches() {
        assert!(!Cmd::AttachWindowListeners.needs_redraw());
        assert!(Cmd::batch(vec![Cmd::DetachWindowListeners, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_flatten_drops_none() {
        let cmd = Cmd::batch(vec![
            Cmd::None,
            Cmd::batch(vec![Cmd::Redraw, Cmd::None]),
            Cmd::DetachWindowListeners,
        ]);
        assert_eq!(cmd.flatten(), vec![Cmd::Redraw, Cmd::DetachWindowListeners]);
    }
}
