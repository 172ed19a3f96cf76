//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Service calls run as tokio
//! tasks and report back over a channel.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use stagebook_app::{App, AppAction, AppEvent, Bridge, Driver, KeyInput};
use stagebook_core::{AuthService, FeedService};
use thiserror::Error;
use tokio::{
    sync::mpsc,
    task::JoinSet,
    time::{Instant, Interval, MissedTickBehavior},
};

use crate::ui;

/// Period of [`AppEvent::Tick`].
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal event stream ended.
    #[error("terminal input closed")]
    InputClosed,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Service actions
/// are spawned on the tokio runtime with a clone of the [`Bridge`]; their
/// completions are delivered through [`Driver::poll_event`] like any other
/// input.
pub struct TerminalDriver<A, F> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    ticker: Interval,
    bridge: Bridge<A, F>,
    completions_tx: mpsc::UnboundedSender<AppEvent>,
    completions_rx: mpsc::UnboundedReceiver<AppEvent>,
    tasks: JoinSet<()>,
}

impl<A: AuthService, F: FeedService> TerminalDriver<A, F> {
    /// Take over the terminal.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode.
    pub fn new(bridge: Bridge<A, F>) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        let mut ticker = tokio::time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            event_stream,
            ticker,
            bridge,
            completions_tx,
            completions_rx,
            tasks: JoinSet::new(),
        })
    }

    /// Number of service calls still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }
}

/// Convert a crossterm event into an App event.
///
/// Key releases and repeats, focus changes and mouse input are dropped.
pub fn convert_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => convert_key(key).map(AppEvent::Key),
        Event::Paste(text) => Some(AppEvent::Paste(text)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}

/// Convert a crossterm key press to [`KeyInput`].
pub fn convert_key(key: KeyEvent) -> Option<KeyInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => Some(KeyInput::Interrupt),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::BackTab => Some(KeyInput::BackTab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

impl<A: AuthService, F: FeedService> Driver for TerminalDriver<A, F> {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        while self.tasks.try_join_next().is_some() {}

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => match maybe_event {
                Some(Ok(event)) => Ok(convert_event(event)),
                Some(Err(e)) => Err(TerminalError::Io(e)),
                None => Err(TerminalError::InputClosed),
            },

            // Service completions
            Some(event) = self.completions_rx.recv() => Ok(Some(event)),

            // Cooldown clock
            _ = self.ticker.tick() => Ok(Some(AppEvent::Tick)),
        }
    }

    async fn dispatch(&mut self, action: AppAction) -> Result<(), Self::Error> {
        let bridge = self.bridge.clone();
        let completions = self.completions_tx.clone();

        self.tasks.spawn(async move {
            if let Some(event) = bridge.execute(action).await {
                // The receiver lives as long as the driver.
                let _ = completions.send(event);
            }
        });
        Ok(())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!(in_flight = self.tasks.len(), "abandoning service calls");
        }
        self.tasks.abort_all();
    }
}

impl<A, F> Drop for TerminalDriver<A, F> {
    fn drop(&mut self) {
        self.tasks.abort_all();
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen, Show);
    }
}
