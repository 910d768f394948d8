use crate::catalog::CatalogSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Store transitions are forwarded into the event loop so that responses
/// resolving in the background trigger a redraw.
pub fn run<S: CatalogSource>(mut app: App<S>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let mut changes = app.store().subscribe();
    let change_tx = events.sender();
    let forwarder = runtime.spawn(async move {
        while changes.changed().await.is_ok() {
            if change_tx.send(AppEvent::StoreChanged).is_err() {
                break;
            }
        }
    });

    let mut input_error = None;
    loop {
        let snapshot = app.snapshot();
        terminal.draw(|frame| draw(frame, &app, &snapshot))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Anything else only needs the redraw at the top of the loop.
            Ok(AppEvent::Tick | AppEvent::StoreChanged | AppEvent::Resize(..)) => {}
            Ok(AppEvent::InputClosed(err)) => {
                input_error = Some(err);
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("Input channel closed");
                break;
            }
        }
    }

    forwarder.abort();
    drop(guard);
    tracing::info!("UI exited");
    match input_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
