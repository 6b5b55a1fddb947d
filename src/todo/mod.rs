//! To-do domain: state, actions, reducer, and the visibility projection.

mod action;
mod reducer;
mod state;
mod visibility;

pub use action::TodoAction;
pub use reducer::TodoReducer;
pub use state::{Todo, TodoState, VisibilityFilter};
pub use visibility::visible_todos;
