//! Headless shell runtime
//!
//! Owns the model and executes the commands `update` returns: timers go into
//! a deadline queue, listener commands attach or detach the controller on the
//! window pointer bus, and store writes come back in as messages. Everything
//! runs on the calling thread.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg, ResizeMsg, StoreMsg};
use crate::model::ShellModel;
use crate::store::SubscriptionId;
use crate::update::update;

use super::clock::{Clock, SystemClock};
use super::listeners::{ListenerId, WindowListeners, WindowPointerEvent};
use super::timers::TimerQueue;

type Inbox = Rc<RefCell<VecDeque<Msg>>>;

pub struct ShellRuntime<C: Clock = SystemClock> {
    model: ShellModel,
    clock: C,
    timers: TimerQueue,
    listeners: WindowListeners,
    inbox: Inbox,
    controller_listener: Option<ListenerId>,
    store_subscription: Option<SubscriptionId>,
    redraws: u64,
}

impl<C: Clock> std::fmt::Debug for ShellRuntime<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellRuntime")
            .field("model", &self.model)
            .field("timers", &self.timers.len())
            .field("listeners", &self.listeners)
            .field("redraws", &self.redraws)
            .finish()
    }
}

impl<C: Clock> ShellRuntime<C> {
    pub fn new(model: ShellModel, clock: C) -> Self {
        Self {
            model,
            clock,
            timers: TimerQueue::new(),
            listeners: WindowListeners::new(),
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            controller_listener: None,
            store_subscription: None,
            redraws: 0,
        }
    }

    pub fn model(&self) -> &ShellModel {
        &self.model
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The window pointer bus, for other components that want global events
    pub fn listeners_mut(&mut self) -> &mut WindowListeners {
        &mut self.listeners
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn controller_listening(&self) -> bool {
        self.controller_listener.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Subscribe to the store and mount the shell
    pub fn mount(&mut self) {
        if self.store_subscription.is_none() {
            let inbox = Rc::clone(&self.inbox);
            let id = self.model.store.subscribe(move |_| {
                inbox
                    .borrow_mut()
                    .push_back(Msg::Store(StoreMsg::SidebarChanged));
            });
            self.store_subscription = Some(id);
        }
        self.dispatch(Msg::App(AppMsg::Mount));
    }

    /// Unmount the shell and release every listener, subscription and timer
    pub fn unmount(&mut self) {
        self.dispatch(Msg::App(AppMsg::Unmount));
        // The model already asked for its window listener to go; make sure
        // nothing else it owned survives either
        if let Some(id) = self.controller_listener.take() {
            self.listeners.detach(id);
        }
        if let Some(id) = self.store_subscription.take() {
            self.model.store.unsubscribe(id);
        }
        self.timers.clear();
        self.inbox.borrow_mut().clear();
    }

    /// Deliver a message from a component event (hover, navigation, ...)
    pub fn dispatch(&mut self, msg: Msg) {
        self.run_due_timers();
        self.inbox.borrow_mut().push_back(msg);
        let now = self.clock.now();
        self.drain(now);
    }

    /// Deliver a window-level pointer event to every attached listener
    pub fn window_event(&mut self, event: WindowPointerEvent) {
        self.run_due_timers();
        self.listeners.dispatch(&event);
        let now = self.clock.now();
        self.drain(now);
    }

    /// Fire due timers and process queued messages (e.g. external store writes)
    pub fn pump(&mut self) {
        self.run_due_timers();
        let now = self.clock.now();
        self.drain(now);
    }

    /// Fire every timer due at the current clock time, each at its own deadline
    pub fn run_due_timers(&mut self) {
        let now = self.clock.now();
        while let Some(fired) = self.timers.pop_due(now) {
            // Anything queued before the timer was due goes first
            self.drain(fired.deadline);
            self.inbox
                .borrow_mut()
                .push_back(fired.timer.fired(fired.generation));
            self.drain(fired.deadline);
        }
    }

    fn drain(&mut self, at: Instant) {
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            let Some(msg) = next else {
                break;
            };
            self.model.now = at;
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd, at);
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, at: Instant) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.redraws += 1,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, at);
                }
            }
            Cmd::ScheduleTimer {
                timer,
                generation,
                delay,
            } => {
                self.timers.schedule(at + delay, timer, generation);
            }
            Cmd::AttachWindowListeners => {
                if self.controller_listener.is_none() {
                    let inbox = Rc::clone(&self.inbox);
                    let id = self.listeners.attach(move |event| {
                        let msg = match *event {
                            WindowPointerEvent::Move { client_x, .. } => {
                                Msg::Resize(ResizeMsg::PointerMove { client_x })
                            }
                            WindowPointerEvent::Up => Msg::Resize(ResizeMsg::Stop),
                        };
                        inbox.borrow_mut().push_back(msg);
                    });
                    self.controller_listener = Some(id);
                }
            }
            Cmd::DetachWindowListeners => {
                if let Some(id) = self.controller_listener.take() {
                    self.listeners.detach(id);
                }
            }
        }
    }
}

impl<C: Clock> Drop for ShellRuntime<C> {
    fn drop(&mut self) {
        if let Some(id) = self.store_subscription.take() {
            self.model.store.unsubscribe(id);
        }
    }
}
