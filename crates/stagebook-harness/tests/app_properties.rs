//! Property-based tests for the App under the real runtime.
//!
//! Tests verify that invariants hold under arbitrary input sequences, with
//! service calls failing at random. The SimDriver checks the standard
//! invariants on every render, so any violation surfaces as an error from
//! the run.

use proptest::prelude::*;
use stagebook_app::{AppEvent, KeyInput, Route};
use stagebook_harness::{FaultPlan, RunOutcome, Scenario};

/// Keys a user can press anywhere, shortcuts included.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        6 => prop::char::range('0', '9').prop_map(KeyInput::Char),
        3 => prop::char::range('a', 'z').prop_map(KeyInput::Char),
        1 => Just(KeyInput::Char('@')),
        1 => Just(KeyInput::Char('.')),
        2 => Just(KeyInput::Enter),
        2 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        1 => Just(KeyInput::Tab),
        1 => Just(KeyInput::BackTab),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

/// User-side events; service completions come from the driver.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        10 => key_strategy().prop_map(AppEvent::Key),
        1 => "[0-9a-z @.-]{0,12}".prop_map(AppEvent::Paste),
        2 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
    ]
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(future)
}

proptest! {
    /// Invariants hold for any input with any fault pattern.
    #[test]
    fn prop_invariants_hold_under_faults(
        events in prop::collection::vec(event_strategy(), 0..80),
        seed in any::<u64>(),
        failure_rate in 0.0f64..0.5,
    ) {
        let mut sim = Scenario::flaky(FaultPlan { seed, failure_rate });
        let result = block_on(async {
            for event in events {
                sim.handle().inject_event(event);
                if sim.run_until_idle().await? == RunOutcome::Quit {
                    break;
                }
            }
            Ok::<_, stagebook_harness::SimDriverError>(())
        });
        prop_assert!(result.is_ok(), "{}", result.unwrap_err());
    }

    /// Once on the passcode screen, the code stays a digit-only prefix of at
    /// most six cells, whatever is typed or pasted.
    #[test]
    fn prop_code_entry_stays_valid(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut sim = Scenario::new();
        block_on(async {
            sim.type_str("9876543210").await.unwrap();
            sim.handle().inject_key(KeyInput::Enter);
            sim.run_until_idle().await.unwrap();
        });
        prop_assert!(matches!(sim.app().route(), Route::Otp { .. }), "expected the passcode route");

        for event in events {
            // Stay on the screen: skip shortcuts that navigate away.
            if matches!(
                event,
                AppEvent::Key(KeyInput::Char('s' | 'q') | KeyInput::Esc | KeyInput::Enter)
            ) {
                continue;
            }
            sim.handle().inject_event(event);
            block_on(sim.run_until_idle()).unwrap();

            let otp = sim.app().otp().unwrap();
            prop_assert!(otp.code().len() <= 6);
            prop_assert!(otp.code().chars().all(|c| c.is_ascii_digit()));
        }
    }
}
