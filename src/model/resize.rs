//! Resize sessions and the throttle that coalesces pointer moves

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::commands::TimerGeneration;

/// Which resize handle a drag started on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Handle on the right border of the left sidebar
    Left,
    /// Handle on the left border of the right side panel
    Right,
}

/// An active drag on one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: Edge,
    pub started_at: Instant,
}

/// What to do with a pointer position offered to the throttle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Outside the window: write this position now
    Apply(f32),
    /// Inside the window, first deferral: arm a trailing timer for `wait`
    ArmTrailing { wait: Duration },
    /// Inside the window, trailing timer already armed: position replaced
    Coalesced,
}

/// Leading + trailing throttle over pointer positions
///
/// The latest deferred position is kept in `pending_x` so the trailing update
/// (or a flush on pointer-up) always writes the true last position.
#[derive(Debug, Clone, Default)]
pub struct Throttle {
    pub window: Duration,
    pub last_applied_at: Option<Instant>,
    pub pending_x: Option<f32>,
    pub trailing: Option<TimerGeneration>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn offer(&mut self, x: f32, now: Instant) -> ThrottleDecision {
        let elapsed = self
            .last_applied_at
            .map(|last| now.saturating_duration_since(last));

        match elapsed {
            Some(elapsed) if elapsed < self.window => {
                self.pending_x = Some(x);
                if self.trailing.is_some() {
                    ThrottleDecision::Coalesced
                } else {
                    ThrottleDecision::ArmTrailing {
                        wait: self.window - elapsed,
                    }
                }
            }
            _ => {
                self.last_applied_at = Some(now);
                self.pending_x = None;
                self.trailing = None;
                ThrottleDecision::Apply(x)
            }
        }
    }

    /// Record the generation of the trailing timer just armed
    pub fn arm(&mut self, generation: TimerGeneration) {
        self.trailing = Some(generation);
    }

    /// Trailing timer fired. Returns the position to write if the timer is current.
    pub fn take_trailing(&mut self, generation: TimerGeneration, now: Instant) -> Option<f32> {
        if self.trailing != Some(generation) {
            return None;
        }
        self.trailing = None;
        let x = self.pending_x.take()?;
        self.last_applied_at = Some(now);
        Some(x)
    }

    /// Drop the trailing timer and hand back whatever was still pending
    pub fn flush(&mut self) -> Option<f32> {
        self.trailing = None;
        self.pending_x.take()
    }

    pub fn reset(&mut self) {
        self.last_applied_at = None;
        self.pending_x = None;
        self.trailing = None;
    }
}

/// Resize state for both edges
///
/// Sessions are independent flags, but they always end together.
#[derive(Debug, Clone, Default)]
pub struct ResizeState {
    pub left: Option<ResizeSession>,
    pub right: Option<ResizeSession>,
    pub throttle: Throttle,
}

impl ResizeState {
    pub fn new(throttle_window: Duration) -> Self {
        Self {
            left: None,
            right: None,
            throttle: Throttle::new(throttle_window),
        }
    }

    pub fn session(&self, edge: Edge) -> Option<&ResizeSession> {
        match edge {
            Edge::Left => self.left.as_ref(),
            Edge::Right => self.right.as_ref(),
        }
    }

    pub fn is_resizing(&self, edge: Edge) -> bool {
        self.session(edge).is_some()
    }

    pub fn is_active(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }

    pub fn start(&mut self, edge: Edge, now: Instant) {
        let session = Some(ResizeSession {
            edge,
            started_at: now,
        });
        match edge {
            Edge::Left => self.left = session,
            Edge::Right => self.right = session,
        }
    }

    /// End both sessions and forget throttle state
    pub fn clear(&mut self) {
        self.left = None;
        self.right = None;
        self.throttle.reset();
    }
}
