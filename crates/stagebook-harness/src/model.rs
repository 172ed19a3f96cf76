//! Reference model of the segmented code input.
//!
//! [`CodeModel`] restates the cell rules over a plain digit vector and a
//! focus index. Operations are applied to both the model and a real
//! [`OtpForm`], and their [`CodeObservation`]s are compared.
//!
//! Operations derive [`Arbitrary`] so the fuzzer can feed raw bytes through
//! the same path proptest uses.

use arbitrary::Arbitrary;
use stagebook_app::{AppEvent, KeyInput, OtpForm};

/// An input operation on the passcode screen.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum CodeOp {
    /// Type a digit (taken modulo 10).
    Digit(u8),
    /// Type a letter the screen does not bind to a shortcut.
    Letter,
    /// Backspace in the focused cell.
    Backspace,
    /// Focus the previous cell.
    Left,
    /// Focus the next cell.
    Right,
    /// Focus the first cell.
    Home,
    /// Focus the last cell.
    End,
    /// Paste arbitrary text into the focused cell.
    Paste(String),
}

impl CodeOp {
    /// The App event that performs this operation.
    pub fn to_event(&self) -> AppEvent {
        let key = match self {
            Self::Digit(d) => KeyInput::Char(char::from(b'0' + d % 10)),
            Self::Letter => KeyInput::Char('x'),
            Self::Backspace => KeyInput::Backspace,
            Self::Left => KeyInput::Left,
            Self::Right => KeyInput::Right,
            Self::Home => KeyInput::Home,
            Self::End => KeyInput::End,
            Self::Paste(text) => return AppEvent::Paste(text.clone()),
        };
        AppEvent::Key(key)
    }

    /// Apply this operation to a real form.
    pub fn apply_to_form(&self, form: &mut OtpForm) {
        match self.to_event() {
            AppEvent::Key(key) => {
                form.handle_key(key);
            },
            AppEvent::Paste(text) => form.paste(&text),
            _ => {},
        }
    }
}

/// State both the model and the real form expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeObservation {
    /// Code value.
    pub code: String,
    /// Focused cell.
    pub focused_cell: usize,
    /// Completion notifications so far.
    pub completions: u32,
}

impl CodeObservation {
    /// Observe a real form.
    pub fn of_form(form: &OtpForm) -> Self {
        Self {
            code: form.code().to_owned(),
            focused_cell: form.input().focused_cell(),
            completions: form.completions(),
        }
    }
}

/// Reference implementation of the code input.
#[derive(Debug, Clone)]
pub struct CodeModel {
    length: usize,
    digits: Vec<char>,
    focus: usize,
    completions: u32,
}

impl CodeModel {
    /// Empty model with `length` cells.
    pub fn new(length: usize) -> Self {
        Self { length: length.max(1), digits: Vec::new(), focus: 0, completions: 0 }
    }

    /// Apply one operation.
    pub fn apply(&mut self, op: &CodeOp) {
        let was_complete = self.digits.len() == self.length;
        match op {
            CodeOp::Digit(d) => self.type_digit(char::from(b'0' + d % 10)),
            CodeOp::Letter => {},
            CodeOp::Backspace => {
                if self.focus < self.digits.len() {
                    self.digits.remove(self.focus);
                }
                self.focus = self.focus.saturating_sub(1);
            },
            CodeOp::Left => self.focus = self.focus.saturating_sub(1),
            CodeOp::Right => self.focus = (self.focus + 1).min(self.length - 1),
            CodeOp::Home => self.focus = 0,
            CodeOp::End => self.focus = self.length - 1,
            CodeOp::Paste(text) => {
                let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).collect();
                match digits.as_slice() {
                    [] => {},
                    [digit] => self.type_digit(*digit),
                    _ => {
                        self.digits = digits.into_iter().take(self.length).collect();
                        self.focus = self.digits.len().min(self.length - 1);
                    },
                }
            },
        }
        if !was_complete && self.digits.len() == self.length {
            self.completions += 1;
        }
    }

    fn type_digit(&mut self, digit: char) {
        let len = self.digits.len();
        match self.digits.get_mut(self.focus) {
            Some(slot) => *slot = digit,
            None if len < self.length => self.digits.push(digit),
            None => {},
        }
        if self.focus < self.length - 1 {
            self.focus += 1;
        }
    }

    /// Current observation.
    pub fn observe(&self) -> CodeObservation {
        CodeObservation {
            code: self.digits.iter().collect(),
            focused_cell: self.focus,
            completions: self.completions,
        }
    }
}
