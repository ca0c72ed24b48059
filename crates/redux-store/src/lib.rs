//! Redux-style state container
//!
//! This crate provides:
//! - `Store`: the single owner of application state
//! - `Reducer`: pure `(state, action) -> state` transitions
//! - `Subscriber` / `Subscription`: synchronous change notification
//! - `Action`: the untyped `{ type, payload }` action shape, for decoding at
//!   the edges of an application
//!
//! ```text
//! dispatch(action) → reducer(state, action) → new state → subscribers
//! ```
//!
//! # Example
//!
//! ```rust
//! use redux_store::Store;
//!
//! #[derive(Debug)]
//! enum Toggle {
//!     Flip,
//! }
//!
//! fn reduce(state: bool, action: &Toggle) -> bool {
//!     match action {
//!         Toggle::Flip => !state,
//!     }
//! }
//!
//! let mut store: Store<bool, Toggle, _> = Store::with_default_state(reduce);
//! store.dispatch(Toggle::Flip);
//! assert!(*store.state());
//! ```

pub mod action;
pub mod reducer;
pub mod store;
pub mod subscriber;

pub use action::{Action, ActionError, ActionType};
pub use reducer::Reducer;
pub use store::Store;
pub use subscriber::{Subscriber, Subscription};
