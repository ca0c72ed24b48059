//! Subscribers and subscription handles
//!
//! A subscriber is notified synchronously after every dispatch, once the new
//! state is in place. Registering one hands back a [`Subscription`] that can
//! remove it again.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Listener notified after each dispatch with the freshly reduced state.
pub trait Subscriber<S> {
    fn notify(&mut self, state: &S);
}

impl<S, F> Subscriber<S> for F
where
    F: FnMut(&S),
{
    fn notify(&mut self, state: &S) {
        self(state)
    }
}

/// Identifies one registration in a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SubscriptionId(u64);

pub(crate) type SharedSubscriber<S> = Rc<RefCell<dyn Subscriber<S>>>;

/// Ordered set of registered subscribers, shared between a store and the
/// handles it gave out.
pub(crate) struct Registry<S> {
    next_id: u64,
    entries: Vec<(SubscriptionId, SharedSubscriber<S>)>,
}

impl<S> Registry<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, subscriber: SharedSubscriber<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    /// Copy of the current entries, in registration order
    pub(crate) fn snapshot(&self) -> Vec<(SubscriptionId, SharedSubscriber<S>)> {
        self.entries
            .iter()
            .map(|(id, subscriber)| (*id, Rc::clone(subscriber)))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Type-erased side of the registry used by [`Subscription`]
pub(crate) trait Unregister {
    fn remove(&mut self, id: SubscriptionId) -> bool;
    fn contains(&self, id: SubscriptionId) -> bool;
}

impl<S> Unregister for Registry<S> {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Handle returned by `Store::subscribe`.
///
/// Dropping the handle does not unsubscribe. Calling [`Subscription::unsubscribe`]
/// more than once, or after the store is gone, does nothing.
#[derive(Clone)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<dyn Unregister>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, registry: Weak<RefCell<dyn Unregister>>) -> Self {
        Self { id, registry }
    }

    /// Remove the subscriber from its store.
    ///
    /// Returns `true` if it was still registered.
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let removed = registry.borrow_mut().remove(self.id);
        if removed {
            log::trace!("Unsubscribed {:?}", self.id);
        }
        removed
    }

    /// Whether the subscriber is still registered
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id.0)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> SharedSubscriber<u8> {
        Rc::new(RefCell::new(|_: &u8| {}))
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let mut registry = Registry::new();
        let first = registry.insert(noop());
        let second = registry.insert(noop());
        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_remove_is_idempotent() {
        let mut registry = Registry::new();
        let id = registry.insert(noop());
        assert!(registry.contains(id));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(!registry.contains(id));
    }

    #[test]
    fn test_subscription_outlives_registry() {
        let registry: Rc<RefCell<Registry<u8>>> = Rc::new(RefCell::new(Registry::new()));
        let id = registry.borrow_mut().insert(noop());
        let weak: Weak<RefCell<dyn Unregister>> = Rc::downgrade(&registry) as _;
        let subscription = Subscription::new(id, weak);

        assert!(subscription.is_active());
        drop(registry);
        assert!(!subscription.is_active());
        assert!(!subscription.unsubscribe());
    }
}
