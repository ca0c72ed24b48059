use crate::actions::CounterAction;

/// Reducer - pure function that produces the next count from the current count + action
///
/// Unrecognized actions return the state unchanged. Arithmetic saturates at
/// the bounds of `i64`.
pub fn reduce(state: i64, action: &CounterAction) -> i64 {
    match action {
        CounterAction::Increment => state.saturating_add(1),
        CounterAction::Decrement => state.saturating_sub(1),
        CounterAction::Plus(amount) => state.saturating_add(*amount),
        CounterAction::Unrecognized(action_type) => {
            log::trace!("Counter reducer ignoring {}", action_type);
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redux_store::ActionType;

    const STATES: [i64; 7] = [i64::MIN, -42, -1, 0, 1, 5, i64::MAX];

    #[test]
    fn test_increment_then_decrement_round_trips() {
        let state = reduce(5, &CounterAction::Increment);
        assert_eq!(state, 6);
        assert_eq!(reduce(state, &CounterAction::Decrement), 5);
    }

    #[test]
    fn test_plus_adds_payload() {
        assert_eq!(reduce(5, &CounterAction::Plus(5)), 10);
        assert_eq!(reduce(5, &CounterAction::Plus(-7)), -2);
    }

    #[test]
    fn test_unrecognized_action_is_identity() {
        let actions = [
            CounterAction::Unrecognized(ActionType::from_static("RESET")),
            CounterAction::Unrecognized(ActionType::from_static("increment")),
            CounterAction::Unrecognized(ActionType::from_static("@@INIT")),
        ];
        for state in STATES {
            for action in &actions {
                assert_eq!(reduce(state, action), state, "{action:?} changed {state}");
            }
        }
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let actions = [
            CounterAction::Increment,
            CounterAction::Decrement,
            CounterAction::Plus(3),
            CounterAction::Unrecognized(ActionType::from_static("NOOP")),
        ];
        for state in STATES {
            for action in &actions {
                assert_eq!(reduce(state, action), reduce(state, action));
            }
        }
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(reduce(i64::MAX, &CounterAction::Increment), i64::MAX);
        assert_eq!(reduce(i64::MIN, &CounterAction::Decrement), i64::MIN);
        assert_eq!(reduce(i64::MAX - 1, &CounterAction::Plus(10)), i64::MAX);
    }
}
