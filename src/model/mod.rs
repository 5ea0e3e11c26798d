//! Application model - the complete state of the layout shell
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drawer;
pub mod resize;
pub mod route;
pub mod sidebar;
pub mod slot;

pub use drawer::DrawerState;
pub use resize::{Edge, ResizeSession, ResizeState, Throttle, ThrottleDecision};
pub use route::{Route, HOME, NOW_PLAYING};
pub use sidebar::{ClampPolicy, Dimension, DimensionError, SidebarConfig, SidebarPatch};
pub use slot::{PanelPhase, PresenceSlot, SlotItem, SlotState};

use std::rc::Rc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::commands::TimerGeneration;
use crate::config::ShellConfig;
use crate::store::{LayoutStore, ReorderingSignal};
use crate::view::geometry::ShellGeometry;
use crate::view::visibility::{self, Visibility};

/// Whether the shell hosts sidebars around the content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellMode {
    /// Title bar, left sidebar, content, right slot, player bar
    #[default]
    Full,
    /// Title bar, content and player bar only
    Shell,
}

/// The complete layout shell model
pub struct ShellModel {
    /// Shared sidebar geometry, also written by other components
    pub store: LayoutStore,
    /// Consulted when a delayed drawer close comes due
    pub reordering: Rc<dyn ReorderingSignal>,
    pub config: ShellConfig,
    pub clamp: ClampPolicy,
    pub route: Route,
    pub mode: ShellMode,
    /// Window size in logical pixels
    pub window_size: (f32, f32),
    pub resize: ResizeState,
    pub drawer: DrawerState,
    pub slot: PresenceSlot,
    pub mounted: bool,
    pub listeners_attached: bool,
    /// Time of the message being processed; set by the runtime before each update
    pub now: Instant,
    next_generation: u64,
}

impl std::fmt::Debug for ShellModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellModel")
            .field("store", &self.store)
            .field("route", &self.route)
            .field("mode", &self.mode)
            .field("window_size", &self.window_size)
            .field("resize", &self.resize)
            .field("drawer", &self.drawer)
            .field("slot", &self.slot)
            .field("mounted", &self.mounted)
            .field("listeners_attached", &self.listeners_attached)
            .finish_non_exhaustive()
    }
}

impl ShellModel {
    /// Create a model over `store`. The store doubles as the reordering signal.
    pub fn new(store: LayoutStore, config: ShellConfig, window_size: (f32, f32)) -> Self {
        let reordering: Rc<dyn ReorderingSignal> = Rc::new(store.clone());
        Self {
            store,
            reordering,
            clamp: ClampPolicy::new(&config.sidebar),
            resize: ResizeState::new(config.timing.resize_throttle()),
            config,
            route: Route::default(),
            mode: ShellMode::default(),
            window_size,
            drawer: DrawerState::default(),
            slot: PresenceSlot::default(),
            mounted: false,
            listeners_attached: false,
            now: Instant::now(),
            next_generation: 1,
        }
    }

    pub fn with_reordering_signal(mut self, signal: Rc<dyn ReorderingSignal>) -> Self {
        self.reordering = signal;
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    pub fn with_mode(mut self, mode: ShellMode) -> Self {
        self.mode = mode;
        self
    }

    /// Allocate a fresh timer generation
    pub fn next_generation(&mut self) -> TimerGeneration {
        let generation = TimerGeneration(self.next_generation);
        self.next_generation += 1;
        generation
    }

    pub fn sidebar(&self) -> SidebarConfig {
        self.store.sidebar_config()
    }

    pub fn left_width_px(&self) -> f32 {
        self.sidebar().left_px(&self.config.sidebar)
    }

    pub fn right_width_px(&self) -> f32 {
        self.sidebar().right_px(&self.config.sidebar)
    }

    /// Visibility policy evaluated against the current route and store
    pub fn visibility(&self) -> Visibility {
        visibility::compute(
            self.mode,
            &self.route,
            self.sidebar().right_expanded,
            self.drawer.open,
        )
    }

    /// Rectangles of every shell region, given what is currently mounted
    pub fn geometry(&self) -> ShellGeometry {
        ShellGeometry::compute(
            self.window_size,
            self.left_width_px(),
            self.right_width_px(),
            self.mode,
            self.slot.mounted(),
            &self.config.chrome,
        )
    }
}
