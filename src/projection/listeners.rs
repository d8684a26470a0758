//! Change notification plumbing.
//!
//! Notifications are coarse: a listener learns that the rows may have changed
//! and why, never what changed. Consumers re-resolve whatever they hold by
//! node value.

use std::fmt;

/// Why the projection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// Expansion membership changed (expand, collapse, toggle, expand/collapse all).
    Expansion,
    /// The source replaced the whole top-level sequence.
    SourceReplaced,
}

/// Payload delivered to change listeners after the row cache was rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// What triggered the rebuild.
    pub cause: ChangeCause,
    /// Row count after the change.
    pub row_count: usize,
}

/// Handle returned by `add_change_listener`, used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw id value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

type Listener = Box<dyn FnMut(&ChangeEvent)>;

/// Ordered list of change listeners.
#[derive(Default)]
pub struct ChangeListeners {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl ChangeListeners {
    /// Create an empty listener list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`, returning the id used to remove it.
    pub fn add(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Invoke every listener once, in registration order.
    pub fn notify(&mut self, event: &ChangeEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
