//! Route-aware visibility policy
//!
//! Pure function of shell mode, route, the persisted expanded flag and the
//! drawer flag; re-evaluated on every reconcile.

use serde::Serialize;

use crate::model::{Route, ShellMode, SlotItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Visibility {
    pub show_drawer_button: bool,
    pub show_drawer: bool,
    pub show_side_panel: bool,
}

pub fn compute(
    mode: ShellMode,
    route: &Route,
    right_expanded: bool,
    drawer_open: bool,
) -> Visibility {
    if mode == ShellMode::Shell || route.is_now_playing() {
        return Visibility::default();
    }

    Visibility {
        show_drawer_button: !right_expanded && !drawer_open,
        show_drawer: drawer_open && !right_expanded,
        show_side_panel: right_expanded,
    }
}

impl Visibility {
    /// What the right-edge slot should hold
    ///
    /// At most one flag is set by construction; the order only matters if a
    /// caller builds an inconsistent value by hand.
    pub fn slot_occupant(&self) -> Option<SlotItem> {
        if self.show_side_panel {
            Some(SlotItem::SidePanel)
        } else if self.show_drawer {
            Some(SlotItem::Drawer)
        } else if self.show_drawer_button {
            Some(SlotItem::DrawerButton)
        } else {
            None
        }
    }
}
