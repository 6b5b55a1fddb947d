use std::sync::mpsc;

use crate::store::{Store, Subscription};
use crate::todo::{visible_todos, Todo, TodoAction, TodoReducer, TodoState};
use crate::ui::events::AppEvent;

/// The container component: subscribes to the store, issues dispatches,
/// and owns the bits of view state that are not application state (the
/// draft input, the list selection, the next-id counter).
pub struct App {
    store: Store<TodoReducer>,
    /// Held for the lifetime of the app; dropping it would stop
    /// [`AppEvent::StateChanged`] notifications.
    _subscription: Subscription<TodoReducer>,
    /// Last state read from the store, refreshed on every change
    /// notification. Render reads only this snapshot.
    snapshot: TodoState,
    /// Draft text for the add-todo input field.
    input: String,
    /// Monotonic id for the next added todo.
    next_id: u64,
    /// Selection index into the visible subset.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Wires the store to the event channel: every dispatch ends up as a
    /// `StateChanged` event, and the loop calls [`App::refresh`] to
    /// re-read state.
    pub fn new(store: Store<TodoReducer>, events: mpsc::Sender<AppEvent>) -> Self {
        let subscription = store.subscribe(move || {
            // Receiver gone means the UI loop is shutting down.
            let _ = events.send(AppEvent::StateChanged);
        });
        let snapshot = store.state();
        let next_id = snapshot.todos.iter().map(|t| t.id + 1).max().unwrap_or(0);
        Self {
            store,
            _subscription: subscription,
            snapshot,
            input: String::new(),
            next_id,
            selected: 0,
            should_quit: false,
        }
    }

    /// Re-reads the store after a change notification.
    pub fn refresh(&mut self) {
        self.snapshot = self.store.state();
        self.clamp_selection();
    }

    pub fn snapshot(&self) -> &TodoState {
        &self.snapshot
    }

    /// The subset of todos the current filter shows.
    pub fn visible(&self) -> Vec<&Todo> {
        visible_todos(&self.snapshot.todos, self.snapshot.filter)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace_input(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Dispatches `Add` for the draft text, if any. Whitespace-only
    /// drafts are discarded without a dispatch.
    pub fn submit_input(&mut self) {
        let text = self.input.trim();
        if text.is_empty() {
            self.input.clear();
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(target: "app", id, "adding todo");
        self.store.dispatch(TodoAction::Add {
            id,
            text: text.to_string(),
        });
        self.input.clear();
    }

    /// Dispatches `Toggle` for the selected visible todo, if any.
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.visible().get(self.selected).map(|todo| todo.id) else {
            return;
        };
        self.store.dispatch(TodoAction::Toggle { id });
    }

    /// Dispatches `SetFilter` with the next filter in the cycle.
    pub fn cycle_filter(&mut self) {
        let filter = self.snapshot.filter.next();
        self.store.dispatch(TodoAction::SetFilter { filter });
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as i32;
        let next = (current + delta).clamp(0, len as i32 - 1);
        self.selected = next as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::VisibilityFilter;

    fn make_app() -> (App, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let app = App::new(Store::<TodoReducer>::new(), tx);
        (app, rx)
    }

    #[test]
    fn submit_assigns_monotonic_ids_and_clears_draft() {
        let (mut app, _rx) = make_app();
        app.push_input('a');
        app.submit_input();
        app.push_input('b');
        app.submit_input();
        app.refresh();

        assert_eq!(app.input(), "");
        let ids: Vec<u64> = app.snapshot().todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn whitespace_draft_is_discarded_without_dispatch() {
        let (mut app, rx) = make_app();
        app.push_input(' ');
        app.submit_input();
        app.refresh();

        assert!(app.snapshot().todos.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dispatch_posts_state_changed_event() {
        let (mut app, rx) = make_app();
        app.push_input('x');
        app.submit_input();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::StateChanged)));
    }

    #[test]
    fn selection_clamps_when_visible_set_shrinks() {
        let (mut app, _rx) = make_app();
        for c in ['a', 'b'] {
            app.push_input(c);
            app.submit_input();
        }
        app.refresh();
        app.move_selection(1);
        assert_eq!(app.selected(), 1);

        // Completing the selected todo and filtering to Active removes
        // it from the visible set.
        app.toggle_selected();
        app.cycle_filter();
        app.refresh();
        assert_eq!(app.snapshot().filter, VisibilityFilter::Active);
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected(), 0);
    }
}
