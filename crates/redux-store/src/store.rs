use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::reducer::Reducer;
use crate::subscriber::{Registry, Subscriber, Subscription, Unregister};

/// Redux-style Store that holds application state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Single source of truth: the store exclusively owns the state
/// - State is read-only: callers only ever get a shared borrow
/// - Changes happen through a pure reducer, applied by `dispatch`
///
/// # Example
/// ```rust
/// use redux_store::Store;
///
/// fn reduce(state: i64, action: &i64) -> i64 {
///     state + action
/// }
///
/// let mut store = Store::new(reduce, 5);
/// let subscription = store.subscribe(|state: &i64| println!("state: {state}"));
///
/// store.dispatch(5);
/// assert_eq!(*store.state(), 10);
///
/// subscription.unsubscribe();
/// ```
///
/// The store is single-threaded: subscribers are shared through `Rc`, so a
/// `Store` can not cross threads.
pub struct Store<S, A, R> {
    state: S,
    reducer: R,
    subscribers: Rc<RefCell<Registry<S>>>,
    _action: PhantomData<fn(&A)>,
}

impl<S, A, R> Store<S, A, R>
where
    R: Reducer<S, A>,
{
    /// Create a new store with initial state
    pub fn new(reducer: R, initial_state: S) -> Self {
        Self {
            state: initial_state,
            reducer,
            subscribers: Rc::new(RefCell::new(Registry::new())),
            _action: PhantomData,
        }
    }

    /// Create a new store starting from the state type's default
    pub fn with_default_state(reducer: R) -> Self
    where
        S: Default,
    {
        Self::new(reducer, S::default())
    }

    /// Get immutable reference to current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of currently registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Dispatch an action: reduce, replace the state, then notify subscribers
    ///
    /// The reducer works on a copy of the current state, so a panicking
    /// reducer leaves the store untouched. Panics are not caught.
    pub fn dispatch(&mut self, action: A)
    where
        S: Clone,
        A: fmt::Debug,
    {
        log::debug!("Dispatching {:?}", action);

        self.state = self.reducer.reduce(self.state.clone(), &action);

        self.notify_subscribers();
    }

    /// Call every subscriber registered when the pass started, in order.
    /// One removed mid-pass is skipped if it has not been called yet.
    fn notify_subscribers(&self) {
        let snapshot = self.subscribers.borrow().snapshot();
        if snapshot.is_empty() {
            return;
        }

        log::trace!("Notifying {} subscriber(s)", snapshot.len());
        for (id, subscriber) in snapshot {
            if !self.subscribers.borrow().contains(id) {
                continue;
            }
            subscriber.borrow_mut().notify(&self.state);
        }
    }
}

impl<S, A, R> Store<S, A, R>
where
    S: 'static,
    R: Reducer<S, A>,
{
    /// Register a subscriber, notified after every dispatch
    ///
    /// Subscribers are called in the order they were added.
    pub fn subscribe<L>(&mut self, subscriber: L) -> Subscription
    where
        L: Subscriber<S> + 'static,
    {
        let id = self
            .subscribers
            .borrow_mut()
            .insert(Rc::new(RefCell::new(subscriber)));
        log::trace!("Subscribed {:?}", id);

        let registry: Rc<RefCell<dyn Unregister>> = self.subscribers.clone();
        Subscription::new(id, Rc::downgrade(&registry))
    }
}

impl<S: fmt::Debug, A, R> fmt::Debug for Store<S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
