use crate::todo::state::{Todo, VisibilityFilter};

/// Projects the subset of `todos` the current filter shows, preserving
/// original order.
///
/// Pure and recomputed from scratch on every call; the source list may
/// have been replaced since the last one.
pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<&Todo> {
    todos
        .iter()
        .filter(|todo| match filter {
            VisibilityFilter::All => true,
            VisibilityFilter::Active => !todo.completed,
            VisibilityFilter::Completed => todo.completed,
        })
        .collect()
}
