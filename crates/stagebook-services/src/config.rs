//! Stub service latency.

use std::time::Duration;

/// Artificial delay before each stub call completes.
///
/// Defaults match the latency the mobile client simulated for each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Submitting the login identifier.
    pub login_delay: Duration,
    /// Verifying a passcode.
    pub verify_delay: Duration,
    /// Resending a passcode.
    pub resend_delay: Duration,
    /// Creating an account.
    pub register_delay: Duration,
    /// Any feed, profile or comment request.
    pub feed_delay: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1500),
            verify_delay: Duration::from_millis(1500),
            resend_delay: Duration::from_millis(500),
            register_delay: Duration::ZERO,
            feed_delay: Duration::from_millis(300),
        }
    }
}

impl ServiceConfig {
    /// Every call completes without delay.
    pub fn instant() -> Self {
        Self {
            login_delay: Duration::ZERO,
            verify_delay: Duration::ZERO,
            resend_delay: Duration::ZERO,
            register_delay: Duration::ZERO,
            feed_delay: Duration::ZERO,
        }
    }
}
