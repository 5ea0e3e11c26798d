//! Right-edge presence slot
//!
//! The drawer button, the queue drawer and the side panel share one slot.
//! Only one occupant is ever mounted; when the wanted occupant changes, the
//! current one finishes its exit before the next one starts entering.
//!
//! ```text
//! Closed ──mount──▶ Opening ──enter elapsed──▶ Open
//!    ▲                                           │
//!    └──exit elapsed── Closing ◀──unwanted───────┘
//! ```
//!
//! Renderers read `SlotState::progress` to tween; timing never feeds back
//! into which occupant is logically shown.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::commands::TimerGeneration;
use crate::config::{AnimationConfig, TransitionTiming};

/// Things that can occupy the right-edge slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotItem {
    DrawerButton,
    Drawer,
    SidePanel,
}

impl SlotItem {
    pub const ALL: [SlotItem; 3] = [SlotItem::DrawerButton, SlotItem::Drawer, SlotItem::SidePanel];

    pub fn timing(&self, animation: &AnimationConfig) -> TransitionTiming {
        match self {
            SlotItem::DrawerButton => animation.drawer_button,
            SlotItem::Drawer => animation.drawer,
            SlotItem::SidePanel => animation.side_panel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// The mounted occupant and where it is in its transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotState {
    pub item: SlotItem,
    pub phase: PanelPhase,
    pub started_at: Instant,
    pub duration: Duration,
    /// Generation of the timer ending the current phase (None when `Open`)
    pub generation: Option<TimerGeneration>,
}

impl SlotState {
    pub fn settled(item: SlotItem, now: Instant) -> Self {
        Self {
            item,
            phase: PanelPhase::Open,
            started_at: now,
            duration: Duration::ZERO,
            generation: None,
        }
    }

    /// Visibility of the occupant from 0.0 (hidden) to 1.0 (fully shown)
    pub fn progress(&self, now: Instant) -> f32 {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(self.started_at);
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        match self.phase {
            PanelPhase::Open => 1.0,
            PanelPhase::Closed => 0.0,
            PanelPhase::Opening => t,
            PanelPhase::Closing => 1.0 - t,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresenceSlot {
    pub current: Option<SlotState>,
    /// Occupant the visibility policy asked for at the last reconcile
    pub desired: Option<SlotItem>,
}

impl PresenceSlot {
    pub fn phase_of(&self, item: SlotItem) -> PanelPhase {
        match self.current {
            Some(state) if state.item == item => state.phase,
            _ => PanelPhase::Closed,
        }
    }

    /// The occupant currently mounted, in any phase
    pub fn mounted(&self) -> Option<SlotItem> {
        self.current.map(|s| s.item)
    }

    pub fn is_settled(&self) -> bool {
        match self.current {
            None => self.desired.is_none(),
            Some(state) => state.phase == PanelPhase::Open && self.desired == Some(state.item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_follows_phase() {
        let t0 = Instant::now();
        let mut state = SlotState {
            item: SlotItem::Drawer,
            phase: PanelPhase::Opening,
            started_at: t0,
            duration: Duration::from_millis(300),
            generation: Some(TimerGeneration(1)),
        };
        assert_eq!(state.progress(t0), 0.0);
        assert!((state.progress(t0 + Duration::from_millis(150)) - 0.5).abs() < 1e-3);
        assert_eq!(state.progress(t0 + Duration::from_secs(5)), 1.0);

        state.phase = PanelPhase::Closing;
        assert_eq!(state.progress(t0), 1.0);
        assert_eq!(state.progress(t0 + Duration::from_millis(300)), 0.0);
    }

    #[test]
    fn test_phase_of_unmounted_item_is_closed() {
        let slot = PresenceSlot {
            current: Some(SlotState::settled(SlotItem::SidePanel, Instant::now())),
            desired: Some(SlotItem::SidePanel),
        };
        assert_eq!(slot.phase_of(SlotItem::SidePanel), PanelPhase::Open);
        assert_eq!(slot.phase_of(SlotItem::Drawer), PanelPhase::Closed);
        assert!(slot.is_settled());
    }
}
