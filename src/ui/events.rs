use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Everything the UI loop reacts to, funneled through one channel.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The catalog store applied a transition.
    StoreChanged,
    /// The input thread stopped; no further keys will arrive.
    InputClosed(io::Error),
}

impl AppEvent {
    fn from_terminal(event: Event) -> Option<Self> {
        match event {
            // Windows reports releases too.
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            Event::Resize(cols, rows) => Some(Self::Resize(cols, rows)),
            _ => None,
        }
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_input(move |tx| pump_terminal(tx, tick_rate))
    }

    /// Run `input` on its own thread. If it fails, the error is delivered as
    /// [`AppEvent::InputClosed`] so the UI loop can stop.
    fn with_input<F>(input: F) -> Self
    where
        F: FnOnce(&Sender<AppEvent>) -> io::Result<()> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();
        thread::spawn(move || {
            if let Err(err) = input(&input_tx) {
                tracing::error!(error = %err, "Terminal input thread stopped");
                let _ = input_tx.send(AppEvent::InputClosed(err));
            }
        });
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Extra producer for events that do not come from the terminal.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Blocks reading terminal input until the receiver goes away or crossterm
/// fails. A closed channel is a normal exit.
fn pump_terminal(tx: &Sender<AppEvent>, tick_rate: Duration) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Some(app_event) = AppEvent::from_terminal(event::read()?) {
                if tx.send(app_event).is_err() {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return Ok(());
            }
            last_tick = Instant::now();
        }
    }
}
