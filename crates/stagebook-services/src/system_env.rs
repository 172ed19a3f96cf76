//! Production Environment implementation using system time.
//!
//! `SystemEnv` is the production implementation of the Environment trait:
//! real monotonic time that advances naturally and Tokio async sleep for
//! actual wall-clock delays.

use std::time::Duration;

use stagebook_core::Environment;

/// Production environment using system time.
///
/// Uses `std::time::Instant::now()` for time and `tokio::time::sleep()` for
/// async sleeping. Requires a Tokio runtime with the time driver enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    type Instant = tokio::time::Instant;

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_advances_time() {
        let env = SystemEnv::new();

        let start = env.now();
        env.sleep(Duration::from_millis(1500)).await;
        let elapsed = env.now() - start;

        assert!(elapsed >= Duration::from_millis(1500), "Sleep should wait the full delay");
    }
}
