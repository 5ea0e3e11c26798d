//! Queue drawer reveal state

use crate::commands::TimerGeneration;

/// Hover-revealed queue drawer
///
/// Each pending timer is identified by its generation; clearing the field
/// cancels the timer, since a fired timer that no longer matches is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
    /// Delayed open armed by hovering the reveal affordance
    pub pending_open: Option<TimerGeneration>,
    /// Delayed close check armed by leaving the drawer
    pub pending_close: Option<TimerGeneration>,
}

impl DrawerState {
    pub fn is_reveal_armed(&self) -> bool {
        self.pending_open.is_some()
    }

    /// Cancel both timers without touching `open`
    pub fn cancel_timers(&mut self) {
        self.pending_open = None;
        self.pending_close = None;
    }

    /// Close immediately and cancel anything pending
    pub fn force_close(&mut self) {
        self.open = false;
        self.cancel_timers();
    }
}
