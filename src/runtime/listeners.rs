//! Window-wide pointer event bus
//!
//! Shared by every component that needs pointer events outside its own
//! bounds. A listener stays registered until explicitly detached, so owners
//! must detach on teardown or keep receiving events against stale state.

use serde::{Deserialize, Serialize};

/// Pointer events delivered to window-level listeners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindowPointerEvent {
    Move { client_x: f32, client_y: f32 },
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&WindowPointerEvent)>;

#[derive(Default)]
pub struct WindowListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl std::fmt::Debug for WindowListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

impl WindowListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, listener: impl FnMut(&WindowPointerEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn detach(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener in attach order
    pub fn dispatch(&mut self, event: &WindowPointerEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
