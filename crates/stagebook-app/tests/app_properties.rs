//! Property-based tests for App state machine.
//!
//! Tests verify that structural properties hold under arbitrary event
//! sequences, without any services behind the App.

use proptest::prelude::*;
use stagebook_app::{App, AppAction, AppEvent, KeyInput, Route};

/// Generate random printable characters for input.
fn printable_char() -> impl Strategy<Value = char> {
    prop::char::range(' ', '~')
}

/// Generate random key inputs.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => printable_char().prop_map(KeyInput::Char),
        3 => prop::char::range('0', '9').prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Tab),
        1 => Just(KeyInput::BackTab),
        1 => Just(KeyInput::Esc),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
    ]
}

/// Generate random app events, including unsolicited completions.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        8 => key_strategy().prop_map(AppEvent::Key),
        1 => "[0-9a-z]{0,8}".prop_map(AppEvent::Paste),
        1 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
        1 => Just(AppEvent::CredentialAccepted { identifier: "9876543210".into() }),
        1 => Just(AppEvent::CodeResent),
        1 => Just(AppEvent::CodeRejected { message: "Invalid OTP. Please try again.".into() }),
    ]
}

proptest! {
    /// The passcode route and the passcode form never disagree.
    #[test]
    fn prop_otp_route_has_form(events in prop::collection::vec(event_strategy(), 0..80)) {
        let mut app = App::default();

        for event in events {
            let quit = app.handle(event.clone()).contains(&AppAction::Quit);
            if quit {
                break;
            }
            if let Route::Otp { identifier } = app.route() {
                let otp = app.otp();
                prop_assert!(otp.is_some(), "no form after {:?}", event);
                prop_assert_eq!(otp.map(|o| o.identifier()), Some(identifier.as_str()));
            }
        }
    }

    /// The login field only ever holds what a phone keypad can type.
    #[test]
    fn prop_login_field_is_dialable(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let mut app = App::default();

        for key in keys {
            if app.handle(AppEvent::Key(key)).contains(&AppAction::Quit) {
                break;
            }
            let mobile = app.login().mobile();
            prop_assert!(mobile.value().chars().all(|c| c.is_ascii_digit() || c == '+'));
            prop_assert!(mobile.cursor() <= mobile.value().chars().count());
        }
    }

    /// The resend countdown never exceeds its period and reaches zero after
    /// enough ticks.
    #[test]
    fn prop_cooldown_drains(period in 1u32..60, extra in 0u32..5) {
        let mut app = App::new(stagebook_app::AppConfig { resend_cooldown: period, ..Default::default() });
        app.handle(AppEvent::CredentialAccepted { identifier: "9876543210".into() });
        app.handle(AppEvent::CodeResent);

        for _ in 0..period + extra {
            let remaining = app.otp().map_or(0, |o| o.cooldown().remaining());
            prop_assert!(remaining <= period);
            app.handle(AppEvent::Tick);
        }
        prop_assert!(app.otp().is_some_and(|o| o.cooldown().can_resend()));
    }
}

#[test]
fn render_follows_every_key_that_changes_state() {
    let mut app = App::default();
    let actions = app.handle(AppEvent::Key(KeyInput::Char('9')));
    assert_eq!(actions, [AppAction::Render]);

    let actions = app.handle(AppEvent::Key(KeyInput::Char('x')));
    assert!(actions.is_empty());
}
