//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the application completely decoupled from I/O and services.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Routes keys to the screen on top of the navigation stack.
//! - Owns form state for login, passcode and registration.
//! - Applies service completions and moves between screens.
//! - Tracks feed, profile and comment sheet content for the tab area.

use crate::{
    AppAction, AppConfig, AppEvent, CommentSheet, HomeFeed, KeyInput, LoadTarget, LoginForm,
    Navigator, OtpForm, ProfileView, RegisterForm, Route, SheetOutcome, Status, Tab,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    navigator: Navigator,
    login: LoginForm,
    /// Present while the passcode screen is in the stack.
    otp: Option<OtpForm>,
    register: RegisterForm,
    home: HomeFeed,
    profile: ProfileView,
    /// Open comment sheet over the home tab.
    sheet: Option<CommentSheet>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    status: Option<Status>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    /// Create an App on the login screen.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            navigator: Navigator::default(),
            login: LoginForm::new(),
            otp: None,
            register: RegisterForm::new(),
            home: HomeFeed::default(),
            profile: ProfileView::default(),
            sheet: None,
            terminal_size: (80, 24),
            status: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Paste(text) => self.handle_paste(&text),
            AppEvent::Tick => match self.otp.as_mut().map(OtpForm::tick) {
                Some(true) => vec![AppAction::Render],
                _ => vec![],
            },
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::CredentialAccepted { identifier } => {
                self.login.set_loading(false);
                if self.navigator.current() != &Route::Login {
                    tracing::debug!("login screen left before the code was sent");
                    return vec![AppAction::Render];
                }
                self.otp = Some(OtpForm::new(
                    identifier.clone(),
                    self.config.code_length,
                    self.config.resend_cooldown,
                ));
                self.status = None;
                self.navigator.push(Route::Otp { identifier });
                vec![AppAction::Render]
            },
            AppEvent::CredentialRejected { message } => {
                self.login.reject(message);
                vec![AppAction::Render]
            },
            AppEvent::CodeVerified => {
                if !matches!(self.navigator.current(), Route::Otp { .. }) {
                    tracing::debug!("passcode screen left before the code was verified");
                    return vec![AppAction::Render];
                }
                self.leave_otp();
                self.status = None;
                self.navigator.replace(Route::Tabs(Tab::Home));
                self.enter_tab(Tab::Home)
            },
            AppEvent::CodeRejected { message } => {
                if let Some(otp) = &mut self.otp {
                    otp.reject(message);
                }
                vec![AppAction::Render]
            },
            AppEvent::CodeResent => {
                if let Some(otp) = &mut self.otp {
                    otp.resent();
                    self.status = Some(Status::info("A new code is on its way"));
                }
                vec![AppAction::Render]
            },
            AppEvent::ResendFailed { message } => {
                if let Some(otp) = &mut self.otp {
                    otp.resend_failed();
                }
                self.status = Some(Status::error(message));
                vec![AppAction::Render]
            },
            AppEvent::Registered => {
                self.register = RegisterForm::new();
                if self.navigator.current() == &Route::Register {
                    self.navigator.back();
                }
                if self.navigator.current() != &Route::Login {
                    self.navigator.replace(Route::Login);
                }
                self.status = Some(Status::info("Account created. Log in with your mobile number."));
                vec![AppAction::Render]
            },
            AppEvent::RegistrationFailed { message } => {
                self.register.reject(message);
                vec![AppAction::Render]
            },
            AppEvent::HomeFeedLoaded { posts } => {
                self.home.loaded(posts);
                vec![AppAction::Render]
            },
            AppEvent::ProfileLoaded { profile } => {
                self.profile.loaded(profile);
                vec![AppAction::Render]
            },
            AppEvent::CommentsLoaded { post_id, comments } => {
                if let Some(sheet) = self.sheet.as_mut().filter(|s| s.post_id() == post_id) {
                    sheet.loaded(comments);
                }
                vec![AppAction::Render]
            },
            AppEvent::CommentPosted { post_id, comment } => {
                if let Some(sheet) = self.sheet.as_mut().filter(|s| s.post_id() == post_id) {
                    sheet.posted(comment);
                }
                vec![AppAction::Render]
            },
            AppEvent::LoadFailed { target, message } => {
                match target {
                    LoadTarget::HomeFeed => self.home.failed(message.clone()),
                    LoadTarget::Profile => self.profile.failed(message.clone()),
                    LoadTarget::Comments(post_id) | LoadTarget::PostComment(post_id) => {
                        if let Some(sheet) = self.sheet.as_mut().filter(|s| s.post_id() == post_id)
                        {
                            sheet.failed(message.clone());
                        }
                    },
                }
                self.status = Some(Status::error(message));
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if key == KeyInput::Interrupt {
            return vec![AppAction::Quit];
        }

        match self.navigator.current().clone() {
            Route::Login => self.handle_login_key(key),
            Route::Otp { identifier } => self.handle_otp_key(key, identifier),
            Route::Register => self.handle_register_key(key),
            Route::Tabs(tab) => self.handle_tabs_key(key, tab),
        }
    }

    fn handle_login_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter => match self.login.submit() {
                Some(identifier) => {
                    self.login.set_loading(true);
                    vec![AppAction::SubmitCredential { identifier }, AppAction::Render]
                },
                None => vec![AppAction::Render],
            },
            KeyInput::Char('s') => self.skip(),
            KeyInput::Char('r') => {
                self.status = None;
                self.navigator.push(Route::Register);
                vec![AppAction::Render]
            },
            KeyInput::Char('q') | KeyInput::Esc => vec![AppAction::Quit],
            key if self.login.handle_key(key) => vec![AppAction::Render],
            _ => vec![],
        }
    }

    fn handle_otp_key(&mut self, key: KeyInput, identifier: String) -> Vec<AppAction> {
        match key {
            KeyInput::Char('s') => return self.skip(),
            KeyInput::Char('q') => return vec![AppAction::Quit],
            KeyInput::Esc => return self.back(),
            _ => {},
        }

        let Some(otp) = &mut self.otp else {
            return vec![];
        };
        match key {
            KeyInput::Enter => match otp.submit() {
                Some(code) => {
                    otp.set_loading(true);
                    vec![AppAction::VerifyCode { identifier, code }, AppAction::Render]
                },
                None => vec![AppAction::Render],
            },
            KeyInput::Char('r') => {
                if otp.request_resend() {
                    vec![AppAction::ResendCode { identifier }, AppAction::Render]
                } else {
                    vec![]
                }
            },
            key if otp.handle_key(key) => vec![AppAction::Render],
            _ => vec![],
        }
    }

    fn handle_register_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter => match self.register.submit() {
                Some(registration) => {
                    self.register.set_loading(true);
                    vec![AppAction::Register(registration), AppAction::Render]
                },
                None => vec![AppAction::Render],
            },
            KeyInput::Esc => self.back(),
            key if self.register.handle_key(key) => vec![AppAction::Render],
            _ => vec![],
        }
    }

    fn handle_tabs_key(&mut self, key: KeyInput, tab: Tab) -> Vec<AppAction> {
        if let Some(sheet) = &mut self.sheet {
            let post_id = sheet.post_id();
            let outcome = sheet.handle_key(key);
            return match outcome {
                SheetOutcome::Updated => vec![AppAction::Render],
                SheetOutcome::Ignored => vec![],
                SheetOutcome::Dismiss => {
                    self.sheet = None;
                    vec![AppAction::Render]
                },
                SheetOutcome::Post { body } => {
                    vec![AppAction::PostComment { post_id, body }, AppAction::Render]
                },
            };
        }

        match key {
            KeyInput::Tab => self.select_tab(tab.next()),
            KeyInput::BackTab => self.select_tab(tab.prev()),
            key if key.shortcut_index().is_some() => {
                match key.shortcut_index().and_then(Tab::from_index) {
                    Some(next) => self.select_tab(next),
                    None => vec![],
                }
            },
            KeyInput::Char('q') => vec![AppAction::Quit],
            KeyInput::Esc => self.back(),
            KeyInput::Char('c') if tab == Tab::Home => self.open_comments(),
            KeyInput::Enter if tab == Tab::Home => self.open_comments(),
            key if tab == Tab::Home && self.home.handle_key(key) => vec![AppAction::Render],
            _ => vec![],
        }
    }

    fn handle_paste(&mut self, text: &str) -> Vec<AppAction> {
        match self.navigator.current() {
            Route::Login => self.login.paste(text),
            Route::Otp { .. } => match &mut self.otp {
                Some(otp) => otp.paste(text),
                None => return vec![],
            },
            Route::Register => self.register.paste(text),
            Route::Tabs(_) => match &mut self.sheet {
                Some(sheet) => sheet.paste(text),
                None => return vec![],
            },
        }
        vec![AppAction::Render]
    }

    /// Jump to the tab area without signing in.
    fn skip(&mut self) -> Vec<AppAction> {
        self.status = None;
        self.navigator.push(Route::Tabs(Tab::Home));
        self.enter_tab(Tab::Home)
    }

    fn back(&mut self) -> Vec<AppAction> {
        let leaving_otp = matches!(self.navigator.current(), Route::Otp { .. });
        if !self.navigator.back() {
            return vec![AppAction::Quit];
        }
        if leaving_otp {
            self.leave_otp();
        }
        self.sheet = None;
        self.status = None;

        match self.navigator.current().clone() {
            Route::Login => self.login.set_loading(false),
            Route::Tabs(tab) => return self.enter_tab(tab),
            Route::Otp { .. } | Route::Register => {},
        }
        vec![AppAction::Render]
    }

    fn leave_otp(&mut self) {
        if let Some(mut otp) = self.otp.take() {
            otp.leave();
        }
    }

    fn select_tab(&mut self, tab: Tab) -> Vec<AppAction> {
        if !self.navigator.select_tab(tab) {
            return vec![];
        }
        self.enter_tab(tab)
    }

    /// Kick off whatever the tab needs to show.
    fn enter_tab(&mut self, tab: Tab) -> Vec<AppAction> {
        match tab {
            Tab::Home if self.home.begin_load() => vec![AppAction::LoadHomeFeed, AppAction::Render],
            Tab::Profile if self.profile.begin_load() => {
                vec![AppAction::LoadProfile, AppAction::Render]
            },
            _ => vec![AppAction::Render],
        }
    }

    fn open_comments(&mut self) -> Vec<AppAction> {
        let Some(post) = self.home.selected_post() else {
            return vec![];
        };
        let post_id = post.id;
        self.sheet = Some(CommentSheet::present(post_id));
        vec![AppAction::LoadComments { post_id }, AppAction::Render]
    }

    /// Configuration the App was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Screen on top of the stack.
    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Navigation stack.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Login form.
    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    /// Passcode form. `None` unless the passcode screen is in the stack.
    pub fn otp(&self) -> Option<&OtpForm> {
        self.otp.as_ref()
    }

    /// Registration form.
    pub fn register(&self) -> &RegisterForm {
        &self.register
    }

    /// Home feed.
    pub fn home(&self) -> &HomeFeed {
        &self.home
    }

    /// Profile tab.
    pub fn profile(&self) -> &ProfileView {
        &self.profile
    }

    /// Open comment sheet. `None` if closed.
    pub fn sheet(&self) -> Option<&CommentSheet> {
        self.sheet.as_ref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use stagebook_core::{Comment, CommentId, Post, PostId};

    use super::*;

    fn press(app: &mut App, keys: &str) -> Vec<AppAction> {
        let mut actions = Vec::new();
        for c in keys.chars() {
            actions = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
        actions
    }

    fn post(id: u64) -> Post {
        Post {
            id: PostId(id),
            name: "Sim@065".into(),
            handle: "sim065".into(),
            role: "Individual - Singer".into(),
            location: "Koramangala, Bangalore".into(),
            description: "Lorem ipsum".into(),
            posted: "5 mins ago".into(),
        }
    }

    fn on_otp() -> App {
        let mut app = App::default();
        app.handle(AppEvent::CredentialAccepted { identifier: "9876543210".into() });
        app
    }

    #[test]
    fn login_submit_emits_credential() {
        let mut app = App::default();
        press(&mut app, "9876543210");
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));

        assert!(matches!(actions.as_slice(), [
            AppAction::SubmitCredential { identifier },
            AppAction::Render
        ] if identifier == "9876543210"));
        assert!(app.login().is_loading());
    }

    #[test]
    fn invalid_login_stays_put() {
        let mut app = App::default();
        press(&mut app, "123");
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.route(), &Route::Login);
        assert_eq!(
            app.login().mobile().visible_error(),
            Some("Please enter a valid mobile number")
        );
    }

    #[test]
    fn credential_accepted_pushes_otp() {
        let app = on_otp();
        assert_eq!(app.route(), &Route::Otp { identifier: "9876543210".into() });
        assert_eq!(app.otp().map(|o| o.code()), Some(""));
        assert!(!app.login().is_loading());
    }

    #[test]
    fn late_acceptance_after_skip_is_dropped() {
        let mut app = App::default();
        press(&mut app, "9876543210");
        app.handle(AppEvent::Key(KeyInput::Enter));
        press(&mut app, "s");

        app.handle(AppEvent::CredentialAccepted { identifier: "9876543210".into() });

        assert_eq!(app.route(), &Route::Tabs(Tab::Home));
        assert!(app.otp().is_none());
        assert!(!app.login().is_loading());
    }

    #[test]
    fn otp_enter_verifies_full_code() {
        let mut app = on_otp();
        press(&mut app, "123456");
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));

        assert!(matches!(actions.as_slice(), [
            AppAction::VerifyCode { identifier, code },
            AppAction::Render
        ] if identifier == "9876543210" && code == "123456"));
    }

    #[test]
    fn otp_enter_with_partial_code_does_nothing() {
        let mut app = on_otp();
        press(&mut app, "123");
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.otp().and_then(|o| o.visible_error()), Some("OTP must be 6 digits"));
    }

    #[test]
    fn verified_code_replaces_otp_with_home() {
        let mut app = on_otp();
        let actions = app.handle(AppEvent::CodeVerified);

        assert_eq!(actions, vec![AppAction::LoadHomeFeed, AppAction::Render]);
        assert_eq!(app.route(), &Route::Tabs(Tab::Home));
        assert!(app.otp().is_none());
        assert_eq!(app.navigator().depth(), 2);
    }

    #[test]
    fn late_verification_after_leaving_otp_is_dropped() {
        let mut app = on_otp();
        press(&mut app, "123456");
        app.handle(AppEvent::Key(KeyInput::Enter));
        app.handle(AppEvent::Key(KeyInput::Esc));
        press(&mut app, "r");
        assert_eq!(app.route(), &Route::Register);

        let actions = app.handle(AppEvent::CodeVerified);

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.route(), &Route::Register);
        assert!(app.otp().is_none());
    }

    #[test]
    fn resend_is_throttled() {
        let mut app = on_otp();
        let actions = press(&mut app, "r");
        assert!(matches!(actions.first(), Some(AppAction::ResendCode { .. })));
        assert!(press(&mut app, "r").is_empty());

        app.handle(AppEvent::CodeResent);
        assert_eq!(app.otp().map(|o| o.cooldown().label()), Some("Resend in 30s".into()));

        for _ in 0..30 {
            app.handle(AppEvent::Tick);
        }
        assert!(matches!(press(&mut app, "r").first(), Some(AppAction::ResendCode { .. })));
    }

    #[test]
    fn leaving_otp_clears_cooldown() {
        let mut app = on_otp();
        press(&mut app, "r");
        app.handle(AppEvent::CodeResent);

        app.handle(AppEvent::Key(KeyInput::Esc));
        assert_eq!(app.route(), &Route::Login);
        assert!(app.otp().is_none());
        assert!(app.handle(AppEvent::Tick).is_empty());
    }

    #[test]
    fn paste_on_otp_fills_cells() {
        let mut app = on_otp();
        app.handle(AppEvent::Paste("12a3b456789".into()));
        let otp = app.otp();
        assert_eq!(otp.map(OtpForm::code), Some("123456"));
        assert_eq!(otp.map(|o| o.input().focused_cell()), Some(5));
        assert_eq!(otp.map(OtpForm::completions), Some(1));
    }

    #[test]
    fn skip_opens_home() {
        let mut app = App::default();
        let actions = press(&mut app, "s");
        assert_eq!(actions, vec![AppAction::LoadHomeFeed, AppAction::Render]);
        assert_eq!(app.route(), &Route::Tabs(Tab::Home));
    }

    #[test]
    fn tab_switching_loads_profile_once() {
        let mut app = App::default();
        press(&mut app, "s");

        let actions = press(&mut app, "4");
        assert_eq!(actions, vec![AppAction::LoadProfile, AppAction::Render]);
        assert_eq!(app.route(), &Route::Tabs(Tab::Profile));

        app.handle(AppEvent::Key(KeyInput::Tab));
        assert_eq!(app.route(), &Route::Tabs(Tab::Home));
        let actions = app.handle(AppEvent::Key(KeyInput::BackTab));
        assert_eq!(actions, vec![AppAction::Render]);
    }

    #[test]
    fn registration_returns_to_login() {
        let mut app = App::default();
        press(&mut app, "r");
        assert_eq!(app.route(), &Route::Register);

        app.handle(AppEvent::Paste("Jane".into()));
        app.handle(AppEvent::Key(KeyInput::Tab));
        app.handle(AppEvent::Paste("jane@example.com".into()));
        app.handle(AppEvent::Key(KeyInput::Tab));
        app.handle(AppEvent::Paste("secret1".into()));
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));
        assert!(matches!(actions.first(), Some(AppAction::Register(r)) if r.name == "Jane"));

        app.handle(AppEvent::Registered);
        assert_eq!(app.route(), &Route::Login);
        assert_eq!(app.navigator().depth(), 1);
        assert!(app.status().is_some());
    }

    #[test]
    fn comment_sheet_round_trip() {
        let mut app = App::default();
        press(&mut app, "s");
        app.handle(AppEvent::HomeFeedLoaded { posts: vec![post(1), post(2)] });
        app.handle(AppEvent::Key(KeyInput::Down));

        let actions = press(&mut app, "c");
        assert_eq!(actions, vec![
            AppAction::LoadComments { post_id: PostId(2) },
            AppAction::Render
        ]);

        app.handle(AppEvent::CommentsLoaded { post_id: PostId(2), comments: Vec::new() });
        press(&mut app, "nice");
        let actions = app.handle(AppEvent::Key(KeyInput::Enter));
        assert_eq!(actions, vec![
            AppAction::PostComment { post_id: PostId(2), body: "nice".into() },
            AppAction::Render
        ]);

        app.handle(AppEvent::CommentPosted {
            post_id: PostId(2),
            comment: Comment { id: CommentId(9), author: "You".into(), body: "nice".into() },
        });
        assert_eq!(app.sheet().map(CommentSheet::title), Some("Comments (1)".into()));

        app.handle(AppEvent::Key(KeyInput::Esc));
        assert!(app.sheet().is_none());
        assert_eq!(app.route(), &Route::Tabs(Tab::Home));
    }

    #[test]
    fn interrupt_always_quits() {
        let mut app = App::default();
        press(&mut app, "r");
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Interrupt)), vec![AppAction::Quit]);
    }

    #[test]
    fn load_failure_sets_status() {
        let mut app = App::default();
        press(&mut app, "s");
        app.handle(AppEvent::LoadFailed {
            target: LoadTarget::HomeFeed,
            message: "service unavailable: offline".into(),
        });
        assert!(app.home().posts().needs_load());
        assert_eq!(app.status().map(|s| s.message.as_str()), Some("service unavailable: offline"));
    }
}
