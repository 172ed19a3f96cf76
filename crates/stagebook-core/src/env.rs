//! Environment abstraction for deterministic testing.
//!
//! Decouples service stubs and drivers from wall-clock time. Production uses
//! the system clock and tokio timers; simulation uses a virtual clock whose
//! sleeps complete immediately.

use std::time::Duration;

/// Abstract environment providing time and async sleeping.
///
/// # Invariants
///
/// - `now()` never goes backwards
/// - `sleep(d)` completes no earlier than `d` after it was called, measured
///   by this environment's own clock
pub trait Environment: Clone + Send + Sync + 'static {
    /// The specific instant type used by this environment.
    ///
    /// Production environments use `std::time::Instant`, simulation
    /// environments use a virtual instant.
    type Instant: Copy + Ord + Send + Sync + std::ops::Sub<Output = Duration>;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Sleeps for the specified duration.
    ///
    /// Only stubs and drivers should sleep. State machines never do.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}
