//! Form state for the authentication screens.
//!
//! Each form validates on every change but only shows a field's message once
//! that field is touched (left by the user, or submitted). Submission returns
//! the validated payload; the [`crate::App`] turns it into an action.

use stagebook_core::{
    Registration, ValidationError,
    validation::{
        validate_code, validate_email, validate_mobile_number, validate_name, validate_password,
    },
};

use crate::{
    CodeInputHost, FieldKind, KeyInput, ResendCooldown, SegmentedCodeInput, TextField,
    code_input::sanitize,
};

fn message(result: Result<(), ValidationError>) -> Option<String> {
    result.err().map(|e| e.to_string())
}

/// Mobile number entry on the login screen.
#[derive(Debug, Clone)]
pub struct LoginForm {
    mobile: TextField,
    loading: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    /// Create an empty login form.
    pub fn new() -> Self {
        let mut mobile = TextField::new(FieldKind::Phone, "Mobile number");
        mobile.set_error(message(validate_mobile_number("")));
        Self { mobile, loading: false }
    }

    /// The mobile number field.
    pub fn mobile(&self) -> &TextField {
        &self.mobile
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set or clear the in-flight flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Forward an editing key. Returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        let consumed = self.mobile.handle_key(key);
        if consumed {
            self.revalidate();
        }
        consumed
    }

    /// Insert pasted text.
    pub fn paste(&mut self, text: &str) {
        self.mobile.insert_str(text);
        self.revalidate();
    }

    /// Validate and return the identifier to submit.
    ///
    /// Returns `None` while loading or when the number is invalid; the error
    /// becomes visible either way.
    pub fn submit(&mut self) -> Option<String> {
        self.mobile.blur();
        self.revalidate();
        if self.loading || self.mobile.error().is_some() {
            return None;
        }
        Some(self.mobile.value().to_owned())
    }

    /// Show a service rejection under the field.
    pub fn reject(&mut self, reason: String) {
        self.loading = false;
        self.mobile.blur();
        self.mobile.set_error(Some(reason));
    }

    fn revalidate(&mut self) {
        self.mobile.set_error(message(validate_mobile_number(self.mobile.value())));
    }
}

/// Canonical code value plus the bookkeeping the widget reports into.
#[derive(Debug, Clone)]
struct CodeField {
    value: String,
    length: usize,
    touched: bool,
    rejection: Option<String>,
    completions: u32,
}

impl CodeField {
    fn error(&self) -> Option<String> {
        if let Some(reason) = &self.rejection {
            return Some(reason.clone());
        }
        if !self.touched {
            return None;
        }
        message(validate_code(&self.value, self.length))
    }
}

impl CodeInputHost for CodeField {
    fn value(&self) -> &str {
        &self.value
    }

    fn on_value_change(&mut self, value: &str) {
        value.clone_into(&mut self.value);
        self.rejection = None;
    }

    fn on_complete(&mut self, _value: &str) {
        self.touched = true;
        self.completions += 1;
    }
}

/// Passcode entry on the OTP screen.
///
/// Hosts the [`SegmentedCodeInput`]: owns the canonical code, validates it,
/// and tracks the resend cooldown for the identifier the code was sent to.
#[derive(Debug, Clone)]
pub struct OtpForm {
    identifier: String,
    field: CodeField,
    input: SegmentedCodeInput,
    cooldown: ResendCooldown,
    loading: bool,
    resending: bool,
}

impl OtpForm {
    /// Create a form for a code of `length` digits sent to `identifier`.
    pub fn new(identifier: impl Into<String>, length: usize, resend_period: u32) -> Self {
        let input = SegmentedCodeInput::new(length);
        let field = CodeField {
            value: String::new(),
            length: input.length(),
            touched: false,
            rejection: None,
            completions: 0,
        };
        let mut form = Self {
            identifier: identifier.into(),
            field,
            input,
            cooldown: ResendCooldown::new(resend_period),
            loading: false,
            resending: false,
        };
        form.input.mount(&mut form.field);
        form
    }

    /// Identifier the code was sent to.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Current code value.
    pub fn code(&self) -> &str {
        &self.field.value
    }

    /// The segmented input widget.
    pub fn input(&self) -> &SegmentedCodeInput {
        &self.input
    }

    /// Resend countdown.
    pub fn cooldown(&self) -> &ResendCooldown {
        &self.cooldown
    }

    /// Whether verification is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set or clear the in-flight flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether a resend request is in flight.
    pub fn is_resending(&self) -> bool {
        self.resending
    }

    /// Whether the code field has been touched.
    pub fn is_touched(&self) -> bool {
        self.field.touched
    }

    /// Number of times the code reached full length.
    pub fn completions(&self) -> u32 {
        self.field.completions
    }

    /// Error shown under the cells, if any.
    pub fn visible_error(&self) -> Option<&str> {
        self.input.error()
    }

    /// Continue is enabled only for a full code with nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.input.is_complete(&self.field.value)
    }

    /// Forward a key to the widget. Returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        let consumed = self.input.handle_key(key, &mut self.field);
        self.refresh_error();
        consumed
    }

    /// Deliver pasted text to the focused cell.
    ///
    /// A paste without digits is ignored rather than read as a deletion.
    pub fn paste(&mut self, text: &str) {
        if sanitize(text).is_empty() {
            return;
        }
        let cell = self.input.focused_cell();
        self.input.on_change_text(text, cell, &mut self.field);
        self.refresh_error();
    }

    /// Validate and return the code to verify.
    pub fn submit(&mut self) -> Option<String> {
        self.field.touched = true;
        self.refresh_error();
        if !self.can_submit() || validate_code(&self.field.value, self.field.length).is_err() {
            return None;
        }
        Some(self.field.value.clone())
    }

    /// The service refused the code: clear it and show the reason.
    pub fn reject(&mut self, reason: String) {
        self.loading = false;
        self.field.value.clear();
        self.field.touched = false;
        self.field.rejection = Some(reason);
        self.input.reset();
        self.refresh_error();
    }

    /// Start a resend if the cooldown allows it.
    pub fn request_resend(&mut self) -> bool {
        if self.resending || !self.cooldown.can_resend() {
            return false;
        }
        self.resending = true;
        true
    }

    /// A resend went through; start the countdown.
    pub fn resent(&mut self) {
        self.resending = false;
        self.cooldown.start();
    }

    /// A resend failed; allow another attempt.
    pub fn resend_failed(&mut self) {
        self.resending = false;
    }

    /// One second passed. Returns whether the cooldown label changed.
    pub fn tick(&mut self) -> bool {
        self.cooldown.tick()
    }

    /// The screen is going away.
    pub fn leave(&mut self) {
        self.cooldown.clear();
    }

    fn refresh_error(&mut self) {
        self.input.set_error(self.field.error());
    }
}

/// Fields of the registration form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
}

impl RegisterField {
    const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Password];

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Account creation form.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    fields: [TextField; 3],
    focused: RegisterField,
    loading: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterForm {
    /// Create an empty form with focus on the name field.
    pub fn new() -> Self {
        let mut form = Self {
            fields: [
                TextField::new(FieldKind::Name, "Name"),
                TextField::new(FieldKind::Email, "Email"),
                TextField::new(FieldKind::Password, "Password"),
            ],
            focused: RegisterField::Name,
            loading: false,
        };
        form.revalidate();
        form
    }

    /// A field by name.
    pub fn field(&self, field: RegisterField) -> &TextField {
        &self.fields[field.index()]
    }

    /// Currently focused field.
    pub fn focused(&self) -> RegisterField {
        self.focused
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set or clear the in-flight flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Handle a key: Tab/BackTab move focus, editing keys go to the field.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Tab | KeyInput::Down => {
                self.focus(self.focused.next());
                true
            },
            KeyInput::BackTab | KeyInput::Up => {
                self.focus(self.focused.prev());
                true
            },
            key => {
                let consumed = self.fields[self.focused.index()].handle_key(key);
                if consumed {
                    self.revalidate();
                }
                consumed
            },
        }
    }

    /// Insert pasted text into the focused field.
    pub fn paste(&mut self, text: &str) {
        self.fields[self.focused.index()].insert_str(text);
        self.revalidate();
    }

    /// Validate everything and return the registration when valid.
    pub fn submit(&mut self) -> Option<Registration> {
        for field in &mut self.fields {
            field.blur();
        }
        self.revalidate();
        if self.loading || self.fields.iter().any(|f| f.error().is_some()) {
            return None;
        }
        Some(Registration {
            name: self.fields[0].value().trim().to_owned(),
            email: self.fields[1].value().to_owned(),
            password: self.fields[2].value().to_owned(),
        })
    }

    /// Show a service rejection under the email field.
    pub fn reject(&mut self, reason: String) {
        self.loading = false;
        let email = &mut self.fields[RegisterField::Email.index()];
        email.blur();
        email.set_error(Some(reason));
    }

    fn focus(&mut self, field: RegisterField) {
        self.fields[self.focused.index()].blur();
        self.focused = field;
    }

    fn revalidate(&mut self) {
        let [name, email, password] = &mut self.fields;
        name.set_error(message(validate_name(name.value())));
        email.set_error(message(validate_email(email.value())));
        password.set_error(message(validate_password(password.value())));
    }
}
