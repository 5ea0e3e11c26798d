//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use player_shell::config::ShellConfig;
use player_shell::messages::{DrawerMsg, Msg, NavMsg, ResizeMsg};
use player_shell::model::{
    Dimension, Edge, PanelPhase, Route, ShellModel, SidebarConfig, SidebarPatch, SlotItem,
};
use player_shell::runtime::{ManualClock, ShellRuntime, WindowPointerEvent};
use player_shell::store::LayoutStore;

pub const WINDOW: (f32, f32) = (1280.0, 800.0);
pub const LIBRARY: &str = "/library/albums";

/// A mounted shell on a manual clock
pub struct Harness {
    pub rt: ShellRuntime<ManualClock>,
    pub clock: ManualClock,
    pub store: LayoutStore,
}

/// Mounted shell with default widths, collapsed right panel, on a library route
pub fn harness() -> Harness {
    harness_with(SidebarConfig::default(), LIBRARY)
}

/// Mounted shell with the right panel expanded
pub fn expanded_harness() -> Harness {
    let sidebar = SidebarConfig {
        right_expanded: true,
        ..SidebarConfig::default()
    };
    harness_with(sidebar, LIBRARY)
}

pub fn harness_with(sidebar: SidebarConfig, route: &str) -> Harness {
    let store = LayoutStore::new(sidebar);
    let model = ShellModel::new(store.clone(), ShellConfig::default(), WINDOW)
        .with_route(Route::new(route));
    let clock = ManualClock::new();
    let mut rt = ShellRuntime::new(model, clock.clone());
    rt.mount();
    Harness { rt, clock, store }
}

impl Harness {
    /// Let `ms` milliseconds pass, firing due timers
    pub fn advance(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.rt.pump();
    }

    /// Advance one millisecond at a time, calling `check` after each step
    pub fn advance_checked(&mut self, ms: u64, mut check: impl FnMut(&Harness)) {
        for _ in 0..ms {
            self.advance(1);
            check(self);
        }
    }

    pub fn send(&mut self, msg: Msg) {
        self.rt.dispatch(msg);
    }

    pub fn press_handle(&mut self, edge: Edge) {
        self.send(Msg::Resize(ResizeMsg::Start(edge)));
    }

    pub fn move_pointer(&mut self, x: f32) {
        self.rt.window_event(WindowPointerEvent::Move {
            client_x: x,
            client_y: 400.0,
        });
    }

    pub fn release_pointer(&mut self) {
        self.rt.window_event(WindowPointerEvent::Up);
    }

    pub fn hover_reveal(&mut self) {
        self.send(Msg::Drawer(DrawerMsg::RevealEnter));
    }

    pub fn leave_reveal(&mut self) {
        self.send(Msg::Drawer(DrawerMsg::RevealLeave));
    }

    pub fn leave_drawer(&mut self) {
        self.send(Msg::Drawer(DrawerMsg::DrawerLeave));
    }

    pub fn navigate(&mut self, path: &str) {
        self.send(Msg::Nav(NavMsg::LocationChanged(path.to_string())));
    }

    /// Write the expanded flag as another component would
    pub fn set_expanded_externally(&mut self, expanded: bool) {
        self.store
            .set_sidebar_config(SidebarPatch::right_expanded(expanded));
        self.rt.pump();
    }

    pub fn left_width(&self) -> String {
        self.store.sidebar_config().left_width.as_str().to_string()
    }

    pub fn right_width(&self) -> String {
        self.store.sidebar_config().right_width.as_str().to_string()
    }

    pub fn drawer_open(&self) -> bool {
        self.rt.model().drawer.open
    }

    pub fn slot(&self) -> Option<(SlotItem, PanelPhase)> {
        self.rt.model().slot.current.map(|s| (s.item, s.phase))
    }

    /// Number of slot occupants not fully closed
    pub fn live_occupants(&self) -> usize {
        SlotItem::ALL
            .iter()
            .filter(|item| self.rt.model().slot.phase_of(**item) != PanelPhase::Closed)
            .count()
    }
}

/// Expected stored text for a pixel width
pub fn px(width: f32) -> String {
    Dimension::px(width).as_str().to_string()
}

/// Small deterministic generator for pointer sequences
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Integer in `[lo, hi)`
    pub fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }
}
