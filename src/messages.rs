//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::commands::TimerGeneration;
use crate::model::{Edge, ShellMode};

/// Resize handle drags
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeMsg {
    /// Pointer pressed on a resize handle
    Start(Edge),
    /// Window-level pointer move (horizontal position in window coordinates)
    PointerMove { client_x: f32 },
    /// Window-level pointer release; ends every session
    Stop,
    /// Trailing edge of the move throttle
    ThrottleElapsed(TimerGeneration),
}

/// Queue drawer reveal and dismissal
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerMsg {
    /// Pointer entered the reveal affordance (drawer button)
    RevealEnter,
    /// Pointer left the reveal affordance
    RevealLeave,
    /// Pointer left the open drawer
    DrawerLeave,
    /// Hover delay elapsed
    RevealElapsed(TimerGeneration),
    /// Delayed close check is due
    CloseCheckElapsed(TimerGeneration),
    /// Close the drawer right away (e.g. Escape)
    Close,
}

/// Presence slot transitions
#[derive(Debug, Clone, PartialEq)]
pub enum SlotMsg {
    TransitionElapsed(TimerGeneration),
}

/// Navigation provider updates
#[derive(Debug, Clone, PartialEq)]
pub enum NavMsg {
    LocationChanged(String),
}

/// Layout store notifications
#[derive(Debug, Clone, PartialEq)]
pub enum StoreMsg {
    /// Another writer (or this controller) changed the sidebar config
    SidebarChanged,
}

/// Window and shell-level layout changes
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    WindowResized { width: f32, height: f32 },
    SetMode(ShellMode),
    /// Flip the persisted expanded flag of the right panel
    ToggleRightExpanded,
}

/// Lifecycle of the shell component
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    Mount,
    Unmount,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Resize(ResizeMsg),
    Drawer(DrawerMsg),
    Slot(SlotMsg),
    Nav(NavMsg),
    Store(StoreMsg),
    Layout(LayoutMsg),
    App(AppMsg),
}

impl Msg {
    /// Short name for logging, e.g. `Resize::PointerMove`
    pub fn type_name(&self) -> String {
        let (group, inner) = match self {
            Msg::Resize(m) => ("Resize", format!("{m:?}")),
            Msg::Drawer(m) => ("Drawer", format!("{m:?}")),
            Msg::Slot(m) => ("Slot", format!("{m:?}")),
            Msg::Nav(m) => ("Nav", format!("{m:?}")),
            Msg::Store(m) => ("Store", format!("{m:?}")),
            Msg::Layout(m) => ("Layout", format!("{m:?}")),
            Msg::App(m) => ("App", format!("{m:?}")),
        };
        let variant = inner
            .split(|c: char| c == '(' || c == ' ' || c == '{')
            .next()
            .unwrap_or_default();
        format!("{group}::{variant}")
    }

    /// Messages too frequent to log at debug level
    pub fn is_noisy(&self) -> bool {
        matches!(
            self,
            Msg::Resize(ResizeMsg::PointerMove { .. } | ResizeMsg::ThrottleElapsed(_))
        )
    }
}
