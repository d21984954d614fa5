//! Observable values
//!
//! A [`Signal`] owns one value and notifies subscribers when it changes.
//! Controllers publish presentation-facing state (cursor mode, selection
//! locks) through signals instead of reaching into global style state;
//! the presentation layer subscribes and decides how to reflect it.
//!
//! Signals are single-threaded: subscribers run synchronously inside
//! [`Signal::set`], in subscription order.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Signal::subscribe`]
    pub struct SubscriptionId;
}

/// Subscriber callback type
pub type Subscriber<T> = Box<dyn FnMut(&T)>;

/// An observable value with change notification
pub struct Signal<T> {
    value: T,
    version: u64,
    subscribers: SlotMap<SubscriptionId, Subscriber<T>>,
}

impl<T: PartialEq> Signal<T> {
    /// Create a signal holding `value`
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            subscribers: SlotMap::with_key(),
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of committed changes since creation
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the value, notifying subscribers if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
        true
    }

    /// Register a callback invoked after every change
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribers.insert(Box::new(subscriber))
    }

    /// Remove a subscription. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    /// Drop every subscription (used on teardown)
    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: PartialEq + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
