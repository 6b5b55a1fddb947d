use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

/// Routes a key event to the container component.
///
/// Plain characters edit the draft input; everything that changes
/// application state goes through a dispatch on the store.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_selected();
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.backspace_input(),
        KeyCode::Esc => app.clear_input(),
        KeyCode::Tab => app.cycle_filter(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_input(c);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::todo::TodoReducer;
    use std::sync::mpsc;

    fn make_app() -> App {
        let (tx, _rx) = mpsc::channel();
        // Keep the receiver alive long enough for construction only;
        // listeners tolerate a closed channel.
        App::new(Store::<TodoReducer>::new(), tx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typed_chars_edit_the_draft() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('i')));
        assert_eq!(app.input(), "hi");
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.input(), "h");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.input(), "");
    }

    #[test]
    fn ctrl_q_requests_quit() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_chars_do_not_leak_into_the_draft() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('t'));
        assert_eq!(app.input(), "");
    }

    #[test]
    fn enter_submits_the_draft() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Enter));
        app.refresh();
        assert_eq!(app.snapshot().todos.len(), 1);
        assert_eq!(app.snapshot().todos[0].text, "a");
    }
}
