//! Counter walkthroughs
//!
//! Two runs of the same counter:
//! - an explicitly initialized store, inspected after every dispatch
//! - a store starting from the default state, observed through a subscriber

use anyhow::{Context, Result};
use redux_store::{Action, Reducer, Store};
use std::cell::RefCell;
use std::rc::Rc;

use crate::actions::CounterAction;
use crate::reducer::reduce;

/// Decode raw actions into counter actions, failing on the first bad one
pub fn decode_actions(actions: &[Action]) -> Result<Vec<CounterAction>> {
    actions
        .iter()
        .enumerate()
        .map(|(index, action)| {
            CounterAction::try_from(action)
                .with_context(|| format!("Invalid action #{} ({})", index + 1, action.action_type()))
        })
        .collect()
}

/// Dispatch each action in turn and record the state seen after it.
///
/// The first entry is the state before any dispatch.
pub fn replay<R>(store: &mut Store<i64, CounterAction, R>, actions: &[CounterAction]) -> Vec<i64>
where
    R: Reducer<i64, CounterAction>,
{
    let mut states = Vec::with_capacity(actions.len() + 1);

    log::info!("init {}", store.state());
    states.push(*store.state());

    for action in actions {
        store.dispatch(action.clone());
        log::info!("{:?} {}", action, store.state());
        states.push(*store.state());
    }

    states
}

/// Walkthrough with an explicit initial state.
///
/// Returns the states recorded by [`replay`].
pub fn run_with_initial_state(initial_state: i64, actions: &[CounterAction]) -> Vec<i64> {
    let mut store = Store::new(reduce, initial_state);
    replay(&mut store, actions)
}

/// Walkthrough starting from the default state with a logging subscriber.
///
/// Returns the states the subscriber was notified with.
pub fn run_with_subscriber(actions: &[CounterAction]) -> Vec<i64> {
    let mut store: Store<i64, CounterAction, _> = Store::with_default_state(reduce);
    log::info!("init {}", store.state());

    let observed = Rc::new(RefCell::new(Vec::new()));
    let subscription = {
        let observed = Rc::clone(&observed);
        store.subscribe(move |state: &i64| {
            log::info!("subscribe {}", state);
            observed.borrow_mut().push(*state);
        })
    };

    for action in actions {
        store.dispatch(action.clone());
    }
    subscription.unsubscribe();

    observed.take()
}
