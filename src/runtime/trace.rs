//! Scripted event traces
//!
//! A trace is a YAML list of timestamped UI events. Replaying it drives a
//! `ShellRuntime` on a manual clock and reports the resulting layout, which
//! makes interaction bugs reproducible outside a window system.
//!
//! ```yaml
//! route: /library/albums
//! steps:
//!   - at_ms: 0
//!     event: { type: pointer_down, edge: left }
//!   - at_ms: 16
//!     event: { type: pointer_move, x: 240 }
//!   - at_ms: 40
//!     event: { type: pointer_up }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ShellConfig;
use crate::messages::{DrawerMsg, LayoutMsg, Msg, NavMsg, ResizeMsg};
use crate::model::{
    Edge, PanelPhase, Route, ShellMode, ShellModel, SidebarConfig, SidebarPatch, SlotItem,
};
use crate::store::LayoutStore;
use crate::view::{ShellGeometry, Visibility};

use super::clock::{Clock, ManualClock};
use super::listeners::WindowPointerEvent;
use super::shell::ShellRuntime;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid trace: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("step {index} at {at_ms}ms comes before the previous step at {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}

/// One UI event in a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Pointer pressed on a resize handle
    PointerDown { edge: Edge },
    PointerMove {
        x: f32,
        #[serde(default)]
        y: f32,
    },
    PointerUp,
    RevealEnter,
    RevealLeave,
    DrawerLeave,
    CloseDrawer,
    Navigate { path: String },
    /// The play queue starts or stops a drag-reorder
    SetReordering { value: bool },
    /// Another component writes the expanded flag
    SetRightExpanded { value: bool },
    ToggleRightExpanded,
    ResizeWindow { width: f32, height: f32 },
    SetMode { mode: ShellMode },
    Mount,
    Unmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub at_ms: u64,
    pub event: TraceEvent,
}

fn default_window() -> (f32, f32) {
    (1280.0, 800.0)
}

fn default_settle_ms() -> u64 {
    1_000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default = "default_window")]
    pub window: (f32, f32),
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub mode: ShellMode,
    /// Initial store contents; defaults come from the config limits
    #[serde(default)]
    pub sidebar: Option<SidebarConfig>,
    /// Extra time to run after the last step so transitions finish
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    #[serde(default)]
    pub steps: Vec<TraceStep>,
}

impl Trace {
    pub fn from_yaml(text: &str) -> Result<Self, TraceError> {
        let trace: Trace = serde_yaml::from_str(text)?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn load(path: &Path) -> Result<Self, TraceError> {
        let text = std::fs::read_to_string(path).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    fn validate(&self) -> Result<(), TraceError> {
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(TraceError::OutOfOrder {
                    index: index + 1,
                    at_ms: pair[1].at_ms,
                    previous_ms: pair[0].at_ms,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotReport {
    pub item: SlotItem,
    pub phase: PanelPhase,
}

/// Final state after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub sidebar: SidebarConfig,
    pub left_width_px: f32,
    pub right_width_px: f32,
    pub route: Route,
    pub drawer_open: bool,
    pub visibility: Visibility,
    pub slot: Option<SlotReport>,
    pub geometry: ShellGeometry,
    pub store_revision: u64,
    pub redraws: u64,
    pub window_listeners: usize,
}

/// Replay `trace` against a fresh store and model built from `config`
pub fn replay(trace: &Trace, config: &ShellConfig) -> Result<ReplayReport, TraceError> {
    trace.validate()?;

    let sidebar = trace
        .sidebar
        .clone()
        .unwrap_or_else(|| SidebarConfig::from_limits(&config.sidebar));
    let store = LayoutStore::new(sidebar);
    let mut model =
        ShellModel::new(store.clone(), config.clone(), trace.window).with_mode(trace.mode);
    if let Some(path) = &trace.route {
        model = model.with_route(Route::new(path.clone()));
    }

    let clock = ManualClock::new();
    let start = clock.now();
    let mut runtime = ShellRuntime::new(model, clock.clone());
    runtime.mount();

    for step in &trace.steps {
        clock.set(start + Duration::from_millis(step.at_ms));
        runtime.run_due_timers();
        apply_event(&mut runtime, &store, &step.event);
    }

    clock.advance(Duration::from_millis(trace.settle_ms));
    runtime.pump();

    let model = runtime.model();
    Ok(ReplayReport {
        sidebar: model.sidebar(),
        left_width_px: model.left_width_px(),
        right_width_px: model.right_width_px(),
        route: model.route.clone(),
        drawer_open: model.drawer.open,
        visibility: model.visibility(),
        slot: model.slot.current.map(|s| SlotReport {
            item: s.item,
            phase: s.phase,
        }),
        geometry: model.geometry(),
        store_revision: store.revision(),
        redraws: runtime.redraw_count(),
        window_listeners: runtime.listener_count(),
    })
}

fn apply_event(runtime: &mut ShellRuntime<ManualClock>, store: &LayoutStore, event: &TraceEvent) {
    match event {
        TraceEvent::PointerDown { edge } => runtime.dispatch(Msg::Resize(ResizeMsg::Start(*edge))),
        TraceEvent::PointerMove { x, y } => runtime.window_event(WindowPointerEvent::Move {
            client_x: *x,
            client_y: *y,
        }),
        TraceEvent::PointerUp => runtime.window_event(WindowPointerEvent::Up),
        TraceEvent::RevealEnter => runtime.dispatch(Msg::Drawer(DrawerMsg::RevealEnter)),
        TraceEvent::RevealLeave => runtime.dispatch(Msg::Drawer(DrawerMsg::RevealLeave)),
        TraceEvent::DrawerLeave => runtime.dispatch(Msg::Drawer(DrawerMsg::DrawerLeave)),
        TraceEvent::CloseDrawer => runtime.dispatch(Msg::Drawer(DrawerMsg::Close)),
        TraceEvent::Navigate { path } => {
            runtime.dispatch(Msg::Nav(NavMsg::LocationChanged(path.clone())))
        }
        TraceEvent::SetReordering { value } => store.set_reordering_queue(*value),
        TraceEvent::SetRightExpanded { value } => {
            store.set_sidebar_config(SidebarPatch::right_expanded(*value));
            runtime.pump();
        }
        TraceEvent::ToggleRightExpanded => {
            runtime.dispatch(Msg::Layout(LayoutMsg::ToggleRightExpanded))
        }
        TraceEvent::ResizeWindow { width, height } => {
            runtime.dispatch(Msg::Layout(LayoutMsg::WindowResized {
                width: *width,
                height: *height,
            }))
        }
        TraceEvent::SetMode { mode } => runtime.dispatch(Msg::Layout(LayoutMsg::SetMode(*mode))),
        TraceEvent::Mount => runtime.mount(),
        TraceEvent::Unmount => runtime.unmount(),
    }
}
