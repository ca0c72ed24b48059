//! Demo configuration
//!
//! Loaded from `.redux-counter.toml` in the current directory, then from the
//! home directory, falling back to defaults that replay the classic counter
//! walkthrough.
//!
//! ```toml
//! initial_state = 5
//!
//! [[actions]]
//! type = "INCREMENT"
//!
//! [[actions]]
//! type = "PLUS"
//! payload = 5
//! ```

use redux_store::Action;
use serde::Deserialize;
use std::path::PathBuf;

use crate::actions::CounterAction;

const CONFIG_FILE: &str = ".redux-counter.toml";

/// Configuration for the counter walkthrough
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CounterConfig {
    /// Starting value for the store built with an explicit initial state
    #[serde(default = "default_initial_state")]
    pub initial_state: i64,

    /// Actions replayed against the explicitly initialized store
    #[serde(default = "default_actions")]
    pub actions: Vec<Action>,

    /// Actions replayed against the default-state store with a subscriber
    #[serde(default = "default_subscriber_actions")]
    pub subscriber_actions: Vec<Action>,
}

fn default_initial_state() -> i64 {
    5
}

fn default_actions() -> Vec<Action> {
    vec![
        CounterAction::Increment.into(),
        CounterAction::Decrement.into(),
        CounterAction::Plus(5).into(),
    ]
}

fn default_subscriber_actions() -> Vec<Action> {
    vec![
        CounterAction::Increment.into(),
        CounterAction::Plus(5).into(),
        CounterAction::Decrement.into(),
    ]
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_state: default_initial_state(),
            actions: default_actions(),
            subscriber_actions: default_subscriber_actions(),
        }
    }
}

impl CounterConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded counter config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default counter config");
        Self::default()
    }
}

/// Load config file content from CWD first, then home directory
fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    let home_config = home_config_path()?;
    match std::fs::read_to_string(&home_config) {
        Ok(content) => {
            log::debug!("Loaded config from {}", home_config.display());
            Some(content)
        }
        Err(_) => None,
    }
}

fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = CounterConfig::default();
        assert_eq!(config.initial_state, 5);
        assert_eq!(config.actions.len(), 3);
        assert_eq!(config.subscriber_actions.len(), 3);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: CounterConfig = toml::from_str("").unwrap();
        assert_eq!(config, CounterConfig::default());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: CounterConfig = toml::from_str("initial_state = -3").unwrap();
        assert_eq!(config.initial_state, -3);
        assert_eq!(config.actions, default_actions());
    }

    #[test]
    fn test_config_deserialize_actions() {
        let toml = r#"
            [[actions]]
            type = "PLUS"
            payload = 2

            [[actions]]
            type = "RESET"

            [[subscriber_actions]]
            type = "DECREMENT"
        "#;
        let config: CounterConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.initial_state, 5);
        assert_eq!(config.actions.len(), 2);
        assert_eq!(config.actions[0].action_type().as_str(), "PLUS");
        assert_eq!(config.actions[0].payload(), Some(&json!(2)));
        assert_eq!(config.actions[1].action_type().as_str(), "RESET");
        assert_eq!(config.actions[1].payload(), None);
        assert_eq!(config.subscriber_actions.len(), 1);
    }

    #[test]
    fn test_config_rejects_empty_action_type() {
        let toml = r#"
            [[actions]]
            type = ""
        "#;
        assert!(toml::from_str::<CounterConfig>(toml).is_err());
    }

    #[test]
    fn test_home_config_path() {
        if let Some(path) = home_config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
