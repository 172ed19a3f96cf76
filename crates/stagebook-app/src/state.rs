//! Observable application state types.
//!
//! Configuration the [`crate::App`] is built with, and the transient status
//! line shown at the bottom of every screen.

use crate::{code_input::DEFAULT_CODE_LENGTH, cooldown::DEFAULT_RESEND_COOLDOWN_SECS};

/// Tunables for the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of passcode cells.
    pub code_length: usize,
    /// Seconds between passcode resends.
    pub resend_cooldown: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { code_length: DEFAULT_CODE_LENGTH, resend_cooldown: DEFAULT_RESEND_COOLDOWN_SECS }
    }
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Something failed.
    Error,
}

/// Transient message in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Severity.
    pub level: StatusLevel,
    /// Text to show.
    pub message: String,
}

impl Status {
    /// Informational status.
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, message: message.into() }
    }

    /// Error status.
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, message: message.into() }
    }
}
