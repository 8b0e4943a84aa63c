//! Change-notification registry shared by the robot model and the journal.
//!
//! Publishers snapshot the subscriber list before dispatch, so no lock is
//! held while callbacks run. A callback may register or unregister listeners
//! on the same set without deadlocking.

use std::sync::{Arc, Mutex};

/// A registered change callback. Identity is the `Arc` allocation, so the
/// same handle can be cloned for registration and later removal.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
pub struct ListenerSet {
    inner: Mutex<Vec<Listener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        ListenerSet {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Registers a listener. Registering the same handle twice is a no-op,
    /// so a listener never fires more than once per notification.
    pub fn register(&self, listener: &Listener) {
        let mut listeners = self.inner.lock().unwrap();
        if !listeners.iter().any(|l| Arc::ptr_eq(l, listener)) {
            listeners.push(Arc::clone(listener));
        }
    }

    /// Removes a listener. Unknown handles are ignored. Safe to call from
    /// inside a callback: an in-flight notification keeps dispatching its
    /// snapshot, and the removal takes effect from the next one.
    pub fn unregister(&self, listener: &Listener) {
        self.inner
            .lock()
            .unwrap()
            .retain(|l| !Arc::ptr_eq(l, listener));
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every currently registered listener. Invocation order is
    /// unspecified. Panics from a callback propagate to the caller.
    pub fn notify(&self) {
        let snapshot: Vec<Listener> = self.inner.lock().unwrap().clone();
        for listener in snapshot {
            listener();
        }
    }
}
