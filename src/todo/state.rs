use serde::{Deserialize, Serialize};

use crate::store::State;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Unique within the list for the lifetime of the store.
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Which subset of todos the list view shows.
///
/// Display-only: switching the filter never touches the stored todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl VisibilityFilter {
    /// Next filter in the Tab-cycle order: All → Active → Completed → All.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Label shown in the footer filter links.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

/// Root application state: the ordered to-do list plus the current
/// visibility filter. New todos append; order is never reshuffled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub filter: VisibilityFilter,
}

impl State for TodoState {}

impl TodoState {
    /// Count of todos not yet completed, for the header.
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }
}
