//! Deadline-ordered timer queue

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::commands::{TimerGeneration, TimerId};

#[derive(Debug, Clone, Copy)]
pub struct ScheduledTimer {
    pub deadline: Instant,
    pub timer: TimerId,
    pub generation: TimerGeneration,
    seq: u64,
}

// Ordered by deadline, then by scheduling order
impl PartialEq for ScheduledTimer {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for ScheduledTimer {}

impl PartialOrd for ScheduledTimer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTimer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<ScheduledTimer>>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Instant, timer: TimerId, generation: TimerGeneration) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledTimer {
            deadline,
            timer,
            generation,
            seq,
        }));
    }

    /// Remove and return the earliest timer due at `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<ScheduledTimer> {
        match self.heap.peek() {
            Some(Reverse(next)) if next.deadline <= now => self.heap.pop().map(|Reverse(t)| t),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse(t)| t.deadline)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pops_in_deadline_then_schedule_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0 + Duration::from_millis(50), TimerId::ResizeThrottle, TimerGeneration(1));
        queue.schedule(t0 + Duration::from_millis(10), TimerId::DrawerReveal, TimerGeneration(2));
        queue.schedule(t0 + Duration::from_millis(10), TimerId::SlotTransition, TimerGeneration(3));

        let now = t0 + Duration::from_millis(100);
        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(now))
            .map(|t| t.generation)
            .collect();
        assert_eq!(order, vec![TimerGeneration(2), TimerGeneration(3), TimerGeneration(1)]);
    }

    #[test]
    fn test_future_timers_stay_queued() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0 + Duration::from_millis(500), TimerId::DrawerReveal, TimerGeneration(1));

        assert!(queue.pop_due(t0 + Duration::from_millis(499)).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(t0 + Duration::from_millis(500)).is_some());
        assert!(queue.is_empty());
    }
}
