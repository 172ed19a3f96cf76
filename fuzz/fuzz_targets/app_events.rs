//! Fuzz target for the App state machine
//!
//! Feeds arbitrary input and unsolicited service completions to the App and
//! checks the standard invariants after every event.
//!
//! # Invariants
//!
//! - Every registered invariant holds after every event
//! - Handling never panics, whatever order completions arrive in

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stagebook_app::{App, AppAction, AppEvent, KeyInput};
use stagebook_harness::{AppSnapshot, InvariantRegistry, invariants::report};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzKey {
    Char(char),
    Digit(u8),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, Arbitrary)]
enum FuzzEvent {
    Key(FuzzKey),
    Paste(String),
    Tick,
    Resize(u16, u16),
    CredentialAccepted,
    CredentialRejected,
    CodeVerified,
    CodeRejected,
    CodeResent,
    ResendFailed,
    Registered,
}

impl FuzzKey {
    fn to_key(&self) -> KeyInput {
        match self {
            Self::Char(c) => KeyInput::Char(*c),
            Self::Digit(d) => KeyInput::Char(char::from(b'0' + d % 10)),
            Self::Enter => KeyInput::Enter,
            Self::Backspace => KeyInput::Backspace,
            Self::Delete => KeyInput::Delete,
            Self::Tab => KeyInput::Tab,
            Self::BackTab => KeyInput::BackTab,
            Self::Esc => KeyInput::Esc,
            Self::Left => KeyInput::Left,
            Self::Right => KeyInput::Right,
            Self::Up => KeyInput::Up,
            Self::Down => KeyInput::Down,
            Self::Home => KeyInput::Home,
            Self::End => KeyInput::End,
        }
    }
}

impl FuzzEvent {
    fn to_event(&self) -> AppEvent {
        let message = || "rejected by fuzzer".to_owned();
        match self {
            Self::Key(key) => AppEvent::Key(key.to_key()),
            Self::Paste(text) => AppEvent::Paste(text.clone()),
            Self::Tick => AppEvent::Tick,
            Self::Resize(cols, rows) => AppEvent::Resize(*cols, *rows),
            Self::CredentialAccepted => {
                AppEvent::CredentialAccepted { identifier: "9876543210".to_owned() }
            },
            Self::CredentialRejected => AppEvent::CredentialRejected { message: message() },
            Self::CodeVerified => AppEvent::CodeVerified,
            Self::CodeRejected => AppEvent::CodeRejected { message: message() },
            Self::CodeResent => AppEvent::CodeResent,
            Self::ResendFailed => AppEvent::ResendFailed { message: message() },
            Self::Registered => AppEvent::Registered,
        }
    }
}

fuzz_target!(|events: Vec<FuzzEvent>| {
    let mut app = App::default();
    let invariants = InvariantRegistry::standard();

    for event in &events {
        let actions = app.handle(event.to_event());
        if actions.contains(&AppAction::Quit) {
            break;
        }
        if let Err(violations) = invariants.check_all(&AppSnapshot::from_app(&app)) {
            panic!("after {event:?}:\n{}", report(&violations));
        }
    }
});
