use crate::store::Action;
use crate::todo::state::VisibilityFilter;

/// State changes the to-do views can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new todo. The caller assigns the id; the container
    /// component owns the monotonic counter.
    Add { id: u64, text: String },
    /// Flip `completed` on the todo with this id. Unknown ids are a
    /// silent no-op.
    Toggle { id: u64 },
    /// Select which subset the list view shows.
    SetFilter { filter: VisibilityFilter },
}

impl Action for TodoAction {}
