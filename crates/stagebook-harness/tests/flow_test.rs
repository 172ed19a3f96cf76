//! End-to-end flows through the real runtime.
//!
//! # Test Strategy
//!
//! Each test simulates what a user does in the terminal:
//! 1. Inject keys, pastes and ticks through the [`SimHandle`]
//! 2. Step the Runtime: App → SimDriver → Bridge → stub services
//! 3. Service completions come back through the same queue
//! 4. Verify App state matches what the screen should show
//!
//! Invariants are checked on every render, so any violation along the way
//! fails the run before the final assertions.

use stagebook_app::{AppAction, KeyInput, Loadable, RegisterField, Route, StatusLevel, Tab};
use stagebook_core::PostId;
use stagebook_harness::{FaultPlan, RunOutcome, Scenario};
use stagebook_services::{REJECTED_CODE, ServiceConfig};

const MOBILE: &str = "9876543210";

/// Sign in up to the passcode screen.
async fn at_otp() -> Scenario {
    let mut sim = Scenario::new();
    sim.type_str(MOBILE).await.unwrap();
    sim.handle().inject_key(KeyInput::Enter);
    sim.run_until_idle().await.unwrap();
    sim
}

#[tokio::test]
async fn login_then_code_reaches_home_feed() {
    let mut sim = at_otp().await;
    assert_eq!(sim.app().route(), &Route::Otp { identifier: MOBILE.into() });
    assert!(sim.env().elapsed() >= ServiceConfig::default().login_delay);

    sim.type_str("123456").await.unwrap();
    assert_eq!(sim.app().otp().map(|otp| otp.completions()), Some(1));

    sim.handle().inject_key(KeyInput::Enter);
    sim.run_until_idle().await.unwrap();

    assert_eq!(sim.app().route(), &Route::Tabs(Tab::Home));
    assert_eq!(sim.app().navigator().depth(), 2);
    assert!(sim.app().otp().is_none());
    assert_eq!(sim.app().home().posts().ready().map(Vec::len), Some(3));

    let dispatched = sim.handle().dispatched();
    assert!(matches!(dispatched[0], AppAction::SubmitCredential { .. }));
    assert!(matches!(&dispatched[1], AppAction::VerifyCode { code, .. } if code == "123456"));
    assert!(matches!(dispatched[2], AppAction::LoadHomeFeed));
}

#[tokio::test]
async fn rejected_code_clears_cells() {
    let mut sim = at_otp().await;

    sim.handle().inject_paste(REJECTED_CODE);
    sim.handle().inject_key(KeyInput::Enter);
    sim.run_until_idle().await.unwrap();

    let otp = sim.app().otp().unwrap();
    assert!(matches!(sim.app().route(), Route::Otp { .. }));
    assert_eq!(otp.code(), "");
    assert_eq!(otp.input().focused_cell(), 0);
    assert_eq!(otp.visible_error(), Some("Invalid OTP. Please try again."));
    assert!(!otp.is_loading());

    // Typing again clears the rejection.
    sim.type_str("1").await.unwrap();
    assert_eq!(sim.app().otp().unwrap().visible_error(), None);
}

#[tokio::test]
async fn partial_code_does_not_verify() {
    let mut sim = at_otp().await;
    sim.type_str("123").await.unwrap();
    sim.handle().take_dispatched();

    sim.handle().inject_key(KeyInput::Enter);
    sim.run_until_idle().await.unwrap();

    assert!(sim.handle().dispatched().is_empty());
    assert_eq!(sim.app().otp().unwrap().visible_error(), Some("OTP must be 6 digits"));
}

#[tokio::test]
async fn resend_waits_for_cooldown() {
    let mut sim = at_otp().await;
    sim.handle().take_dispatched();

    sim.type_str("r").await.unwrap();
    assert_eq!(sim.app().otp().unwrap().cooldown().remaining(), 30);
    assert_eq!(sim.app().status().map(|s| s.level), Some(StatusLevel::Info));

    sim.type_str("r").await.unwrap();
    sim.handle().inject_ticks(29);
    sim.run_until_idle().await.unwrap();
    sim.type_str("r").await.unwrap();
    assert_eq!(sim.handle().take_dispatched().len(), 1);
    assert_eq!(sim.app().otp().unwrap().cooldown().label(), "Resend in 1s");

    sim.handle().inject_ticks(1);
    sim.run_until_idle().await.unwrap();
    sim.type_str("r").await.unwrap();
    assert!(matches!(sim.handle().take_dispatched()[..], [AppAction::ResendCode { .. }]));
}

#[tokio::test]
async fn back_from_otp_drops_the_form() {
    let mut sim = at_otp().await;
    sim.type_str("12").await.unwrap();

    sim.handle().inject_key(KeyInput::Esc);
    sim.run_until_idle().await.unwrap();

    assert_eq!(sim.app().route(), &Route::Login);
    assert!(sim.app().otp().is_none());
    assert!(!sim.app().login().is_loading());
}

#[tokio::test]
async fn skip_then_comment_on_second_post() {
    let mut sim = Scenario::new();
    sim.type_str("s").await.unwrap();
    assert_eq!(sim.app().route(), &Route::Tabs(Tab::Home));

    sim.type_str("jc").await.unwrap();
    let sheet = sim.app().sheet().unwrap();
    assert_eq!(sheet.post_id(), PostId(2));
    assert_eq!(sheet.title(), "Comments (4)");

    sim.type_str("great set").await.unwrap();
    sim.handle().inject_key(KeyInput::Enter);
    sim.run_until_idle().await.unwrap();

    let sheet = sim.app().sheet().unwrap();
    assert_eq!(sheet.title(), "Comments (5)");
    assert!(sheet.draft().is_empty());
    let last = sheet.comments().ready().and_then(|c| c.last()).unwrap();
    assert_eq!(last.body, "great set");

    sim.handle().inject_key(KeyInput::Esc);
    sim.run_until_idle().await.unwrap();
    assert!(sim.app().sheet().is_none());
    assert_eq!(sim.app().route(), &Route::Tabs(Tab::Home));
}

#[tokio::test]
async fn profile_tab_loads_once() {
    let mut sim = Scenario::new();
    sim.type_str("s4").await.unwrap();

    assert_eq!(sim.app().route(), &Route::Tabs(Tab::Profile));
    assert_eq!(sim.app().profile().title(), "Sim@065");

    sim.type_str("14").await.unwrap();
    let loads = sim
        .handle()
        .dispatched()
        .iter()
        .filter(|a| matches!(a, AppAction::LoadProfile))
        .count();
    assert_eq!(loads, 1);
}

#[tokio::test]
async fn registration_returns_to_login() {
    let mut sim = Scenario::new();
    sim.type_str("r").await.unwrap();
    assert_eq!(sim.app().route(), &Route::Register);

    sim.type_str("Jane Doe").await.unwrap();
    sim.handle().inject_key(KeyInput::Tab);
    sim.type_str("jane@example.com").await.unwrap();
    sim.handle().inject_key(KeyInput::Tab);
    sim.type_str("secret1").await.unwrap();
    assert_eq!(sim.app().register().focused(), RegisterField::Password);

    sim.handle().inject_key(KeyInput::Enter);
    sim.run_until_idle().await.unwrap();

    assert_eq!(sim.app().route(), &Route::Login);
    assert_eq!(sim.app().navigator().depth(), 1);
    assert!(sim.app().register().field(RegisterField::Name).is_empty());
}

#[tokio::test]
async fn escape_on_login_quits() {
    let mut sim = Scenario::new();
    sim.handle().inject_key(KeyInput::Esc);

    assert_eq!(sim.run_until_idle().await.unwrap(), RunOutcome::Quit);
    assert!(sim.handle().is_stopped());
}

#[tokio::test]
async fn outage_surfaces_as_errors() {
    let mut sim = Scenario::flaky(FaultPlan { seed: 3, failure_rate: 1.0 });
    sim.type_str(MOBILE).await.unwrap();
    sim.handle().inject_key(KeyInput::Enter);
    sim.run_until_idle().await.unwrap();

    assert_eq!(sim.app().route(), &Route::Login);
    assert_eq!(
        sim.app().login().mobile().visible_error(),
        Some("service unavailable: injected fault")
    );

    sim.type_str("s").await.unwrap();
    assert!(matches!(sim.app().home().posts(), Loadable::Failed(_)));
    assert_eq!(sim.app().status().map(|s| s.level), Some(StatusLevel::Error));
}
