//! Actions
//!
//! An action is plain data describing an intended state change: a non-empty
//! type name plus an optional payload the reducer interprets. Actions never
//! carry behavior and cannot be changed once built.
//!
//! The serialized form matches the classic Redux shape:
//!
//! ```text
//! { "type": "PLUS", "payload": 5 }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Errors raised while building or decoding actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action type was empty or whitespace only.
    #[error("Action type must not be empty")]
    EmptyType,

    /// The action requires a payload but none was given.
    #[error("Action {action_type} requires a payload")]
    MissingPayload { action_type: String },

    /// The payload could not be decoded into the expected shape.
    #[error("Invalid payload for action {action_type}: {reason}")]
    InvalidPayload { action_type: String, reason: String },
}

/// Newtype wrapper for action type names.
/// Can only hold a non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionType(String);

impl ActionType {
    /// Create an action type, rejecting blank names
    pub fn new(name: impl Into<String>) -> Result<Self, ActionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ActionError::EmptyType);
        }
        Ok(Self(name))
    }

    /// Create an action type from a compile-time constant
    ///
    /// # Panics
    /// Panics if `name` is blank. Only use with literals.
    pub fn from_static(name: &'static str) -> Self {
        assert!(!name.trim().is_empty(), "action type must not be empty");
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ActionType {
    type Error = ActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ActionType {
    type Error = ActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActionType> for String {
    fn from(value: ActionType) -> Self {
        value.0
    }
}

impl PartialEq<str> for ActionType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActionType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An untyped action: a type name and an optional payload of any shape.
///
/// Applications usually decode these into their own action enum at the
/// boundary and dispatch the typed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: ActionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl Action {
    /// Create an action without payload
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            payload: None,
        }
    }

    /// Create an action carrying a payload
    pub fn with_payload(action_type: ActionType, payload: impl Into<Value>) -> Self {
        Self {
            action_type,
            payload: Some(payload.into()),
        }
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Decode the payload into a concrete type.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, ActionError> {
        let payload = self
            .payload
            .as_ref()
            .ok_or_else(|| ActionError::MissingPayload {
                action_type: self.action_type.to_string(),
            })?;

        T::deserialize(payload).map_err(|e| ActionError::InvalidPayload {
            action_type: self.action_type.to_string(),
            reason: e.to_string(),
        })
    }
}
