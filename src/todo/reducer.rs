use crate::store::Reducer;
use crate::todo::action::TodoAction;
use crate::todo::state::{Todo, TodoState};

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            TodoAction::Add { id, text } => {
                let mut todos = state.todos;
                todos.push(Todo {
                    id,
                    text,
                    completed: false,
                });
                TodoState {
                    todos,
                    filter: state.filter,
                }
            }
            TodoAction::Toggle { id } => {
                // Absent id falls through untouched: dispatch is total
                // and never reports an error.
                let todos = state
                    .todos
                    .into_iter()
                    .map(|todo| {
                        if todo.id == id {
                            Todo {
                                completed: !todo.completed,
                                ..todo
                            }
                        } else {
                            todo
                        }
                    })
                    .collect();
                TodoState {
                    todos,
                    filter: state.filter,
                }
            }
            TodoAction::SetFilter { filter } => TodoState {
                todos: state.todos,
                filter,
            },
        }
    }
}
