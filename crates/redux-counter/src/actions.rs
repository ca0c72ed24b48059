//! Counter actions
//!
//! Typed actions for the counter. Raw `{ type, payload }` actions coming from
//! configuration are decoded here, so the reducer only ever sees well-formed
//! variants.

use redux_store::{Action, ActionError, ActionType};

pub const INCREMENT: &str = "INCREMENT";
pub const DECREMENT: &str = "DECREMENT";
pub const PLUS: &str = "PLUS";

/// Actions understood by the counter reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Add one
    Increment,
    /// Subtract one
    Decrement,
    /// Add the given amount
    Plus(i64),
    /// Any other action type, left for the reducer to ignore
    Unrecognized(ActionType),
}

impl CounterAction {
    /// Name of the raw action type this variant maps to
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::Increment => ActionType::from_static(INCREMENT),
            Self::Decrement => ActionType::from_static(DECREMENT),
            Self::Plus(_) => ActionType::from_static(PLUS),
            Self::Unrecognized(action_type) => action_type.clone(),
        }
    }
}

impl TryFrom<&Action> for CounterAction {
    type Error = ActionError;

    fn try_from(action: &Action) -> Result<Self, Self::Error> {
        let decoded = match action.action_type().as_str() {
            INCREMENT => Self::Increment,
            DECREMENT => Self::Decrement,
            PLUS => Self::Plus(action.payload_as::<i64>()?),
            _ => Self::Unrecognized(action.action_type().clone()),
        };
        Ok(decoded)
    }
}

impl TryFrom<Action> for CounterAction {
    type Error = ActionError;

    fn try_from(action: Action) -> Result<Self, Self::Error> {
        Self::try_from(&action)
    }
}

impl From<CounterAction> for Action {
    fn from(action: CounterAction) -> Self {
        match action {
            CounterAction::Plus(amount) => {
                Action::with_payload(ActionType::from_static(PLUS), amount)
            }
            other => Action::new(other.action_type()),
        }
    }
}
