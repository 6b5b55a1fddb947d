use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::store::Store;
use crate::todo::TodoReducer;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the UI event loop until quit.
///
/// The loop is the only place state flows: input events turn into
/// dispatches inside `handle_key`, the store's change notification comes
/// back as [`AppEvent::StateChanged`], and the next iteration redraws
/// from the refreshed snapshot.
pub fn run(store: Store<TodoReducer>, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(store, events.sender());

    tracing::info!(target: "runtime", "ui started");
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::StateChanged) => app.refresh(),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {
                // Redraw on the next loop iteration picks up the new size.
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(target: "runtime", "ui stopped");
    drop(guard);
    Ok(())
}
