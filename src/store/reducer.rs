//! Reducer trait for unidirectional data flow.

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects. Taking the
    /// previous state by value means the input can never be mutated in
    /// place behind a live reference: the store swaps in whatever this
    /// returns, and snapshots handed out earlier stay untouched.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
