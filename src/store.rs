//! Shared layout store
//!
//! The sidebar geometry is read and written by several components (layout
//! shell, play queue, settings). Instead of an ambient global, each of them
//! holds a clone of the same `LayoutStore` handle. Writes bump a revision
//! counter and notify subscribers synchronously on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{SidebarConfig, SidebarPatch};

/// Read access to the "a queue reorder drag is in progress" signal
pub trait ReorderingSignal {
    fn is_reordering(&self) -> bool;
}

impl ReorderingSignal for std::cell::Cell<bool> {
    fn is_reordering(&self) -> bool {
        self.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&SidebarConfig)>;

#[derive(Default)]
struct StoreInner {
    sidebar: SidebarConfig,
    reordering_queue: bool,
    revision: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

/// Cloneable handle to the process-wide layout state
#[derive(Clone, Default)]
pub struct LayoutStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LayoutStore")
            .field("sidebar", &inner.sidebar)
            .field("reordering_queue", &inner.reordering_queue)
            .field("revision", &inner.revision)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl LayoutStore {
    pub fn new(sidebar: SidebarConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                sidebar,
                ..StoreInner::default()
            })),
        }
    }

    pub fn sidebar_config(&self) -> SidebarConfig {
        self.inner.borrow().sidebar.clone()
    }

    /// Apply a partial update. Subscribers run only if something changed.
    pub fn set_sidebar_config(&self, patch: SidebarPatch) -> bool {
        let (snapshot, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            if !inner.sidebar.apply(patch) {
                return false;
            }
            inner.revision += 1;
            tracing::trace!(
                target: "store",
                revision = inner.revision,
                sidebar = ?inner.sidebar,
                "sidebar updated"
            );
            let subscribers: Vec<Subscriber> =
                inner.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect();
            (inner.sidebar.clone(), subscribers)
        };

        // Borrow released: subscribers may read or write the store again
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
        true
    }

    /// Number of sidebar writes that changed something
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    pub fn subscribe(&self, callback: impl Fn(&SidebarConfig) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Set by the play queue while a drag-reorder gesture is in progress
    pub fn set_reordering_queue(&self, reordering: bool) {
        self.inner.borrow_mut().reordering_queue = reordering;
    }

    pub fn reordering_queue(&self) -> bool {
        self.inner.borrow().reordering_queue
    }
}

impl ReorderingSignal for LayoutStore {
    fn is_reordering(&self) -> bool {
        self.reordering_queue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_write_notifies_subscribers_and_bumps_revision() {
        let store = LayoutStore::default();
        let seen = Rc::new(Cell::new(0));
        let seen_in_cb = Rc::clone(&seen);
        store.subscribe(move |_| seen_in_cb.set(seen_in_cb.get() + 1));

        assert!(store.set_sidebar_config(SidebarPatch::right_expanded(true)));
        assert_eq!(store.revision(), 1);
        assert_eq!(seen.get(), 1);
        assert!(store.sidebar_config().right_expanded);
    }

    #[test]
    fn test_noop_write_is_silent() {
        let store = LayoutStore::default();
        let seen = Rc::new(Cell::new(0));
        let seen_in_cb = Rc::clone(&seen);
        store.subscribe(move |_| seen_in_cb.set(seen_in_cb.get() + 1));

        assert!(!store.set_sidebar_config(SidebarPatch::right_expanded(false)));
        assert_eq!(store.revision(), 0);
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn test_subscriber_may_reenter_store() {
        let store = LayoutStore::default();
        let handle = store.clone();
        store.subscribe(move |config| {
            if config.right_expanded {
                handle.set_sidebar_config(SidebarPatch::right_width(500.0));
            }
        });

        store.set_sidebar_config(SidebarPatch::right_expanded(true));
        assert_eq!(store.sidebar_config().right_width.as_str(), "500px");
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = LayoutStore::default();
        let seen = Rc::new(Cell::new(0));
        let seen_in_cb = Rc::clone(&seen);
        let id = store.subscribe(move |_| seen_in_cb.set(seen_in_cb.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_sidebar_config(SidebarPatch::left_width(200.0));
        assert_eq!(seen.get(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_store_is_a_reordering_signal() {
        let store = LayoutStore::default();
        assert!(!store.is_reordering());
        store.set_reordering_queue(true);
        assert!(store.is_reordering());
    }
}
