//! Observer registry
//!
//! Rendering layers subscribe a callback and get every event together with
//! a snapshot of the state it produced.

use crate::events::{PlayerEvent, PlayerSnapshot};
use std::fmt;

/// Callback invoked after each state change
pub type Observer = Box<dyn FnMut(&PlayerEvent, &PlayerSnapshot) + Send>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered observers, called in subscription order
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer
    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer
    ///
    /// Returns false if the id was never registered or is already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Deliver one event to every observer
    pub fn notify(&mut self, event: &PlayerEvent, snapshot: &PlayerSnapshot) {
        for (_, observer) in &mut self.observers {
            observer(event, snapshot);
        }
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observer is registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn empty_snapshot() -> PlayerSnapshot {
        PlayerSnapshot {
            current_episode: None,
            current_index: None,
            queue_len: 0,
            is_playing: false,
            is_looping: false,
            is_shuffling: false,
            has_next: false,
            has_previous: false,
            progress: 0,
        }
    }

    #[test]
    fn notifies_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();

        for name in ["first", "second"] {
            let log = Arc::clone(&log);
            registry.subscribe(Box::new(move |_, _| log.lock().unwrap().push(name)));
        }

        registry.notify(&PlayerEvent::Cleared, &empty_snapshot());
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0));
        let mut registry = ObserverRegistry::new();

        let counter = Arc::clone(&count);
        let id = registry.subscribe(Box::new(move |_, _| *counter.lock().unwrap() += 1));

        registry.notify(&PlayerEvent::Cleared, &empty_snapshot());
        assert!(registry.unsubscribe(id));
        registry.notify(&PlayerEvent::Cleared, &empty_snapshot());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn unsubscribe_unknown_id() {
        let mut registry = ObserverRegistry::new();
        let id = registry.subscribe(Box::new(|_, _| {}));

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut registry = ObserverRegistry::new();
        let first = registry.subscribe(Box::new(|_, _| {}));
        registry.unsubscribe(first);
        let second = registry.subscribe(Box::new(|_, _| {}));

        assert_ne!(first, second);
        assert_eq!(registry.len(), 1);
    }
}
