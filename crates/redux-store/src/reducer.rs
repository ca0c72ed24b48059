//! Reducers
//!
//! A reducer is a pure function that produces the next state from the current
//! state and an action. It must not have side effects, and it must hand back
//! the state unchanged for any action it does not recognize.

/// Reducer - computes the next state from the current state + action
///
/// Any `Fn(S, &A) -> S` is a reducer, so plain functions work directly:
///
/// ```rust
/// use redux_store::Reducer;
///
/// fn reduce(state: u32, action: &bool) -> u32 {
///     if *action { state + 1 } else { state }
/// }
///
/// assert_eq!(reduce.reduce(1, &true), 2);
/// ```
pub trait Reducer<S, A> {
    fn reduce(&self, state: S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl Reducer<i32, ()> for Doubler {
        fn reduce(&self, state: i32, _action: &()) -> i32 {
            state * 2
        }
    }

    #[test]
    fn test_struct_reducer() {
        assert_eq!(Doubler.reduce(21, &()), 42);
    }

    #[test]
    fn test_closure_reducer() {
        let append = |mut state: Vec<char>, action: &char| {
            state.push(*action);
            state
        };
        assert_eq!(append.reduce(vec!['a'], &'b'), vec!['a', 'b']);
    }
}
