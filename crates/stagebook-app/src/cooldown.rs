//! Resend throttling for the passcode screen.

/// Default wait between resend requests, in seconds.
pub const DEFAULT_RESEND_COOLDOWN_SECS: u32 = 30;

/// Countdown gating the "Resend" action.
///
/// Driven by one-second ticks rather than wall-clock time, so simulation and
/// the terminal see the same behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining: u32,
    period: u32,
}

impl Default for ResendCooldown {
    fn default() -> Self {
        Self::new(DEFAULT_RESEND_COOLDOWN_SECS)
    }
}

impl ResendCooldown {
    /// Create an idle cooldown with the given period in seconds.
    pub fn new(period: u32) -> Self {
        Self { remaining: 0, period }
    }

    /// Start counting down from the full period.
    pub fn start(&mut self) {
        self.remaining = self.period;
    }

    /// Advance by one second. Returns whether the remaining time changed.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Stop the countdown.
    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    /// Whether a resend is allowed right now.
    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    /// Seconds left before a resend is allowed.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Full period in seconds.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Label for the resend control.
    pub fn label(&self) -> String {
        if self.can_resend() {
            "Resend".to_owned()
        } else {
            format!("Resend in {}s", self.remaining)
        }
    }
}
