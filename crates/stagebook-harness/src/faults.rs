//! Seeded fault injection for service calls.
//!
//! [`Flaky`] wraps an auth or feed service and fails a fraction of calls
//! with [`ServiceError::Unavailable`]. The decision comes from a seeded
//! ChaCha RNG shared between clones, so a seed replays the same faults for
//! the same call sequence.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stagebook_core::{
    AuthService, Comment, FeedService, Post, PostId, Profile, Registration, ServiceError,
};

/// Message carried by injected failures.
pub const INJECTED_FAULT: &str = "injected fault";

/// Seed and failure probability for [`Flaky`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultPlan {
    /// RNG seed.
    pub seed: u64,
    /// Probability that a call fails, clamped to `0.0..=1.0`.
    pub failure_rate: f64,
}

impl FaultPlan {
    /// Plan that never fails.
    pub fn none() -> Self {
        Self { seed: 0, failure_rate: 0.0 }
    }
}

/// Service wrapper that fails calls at random.
#[derive(Debug, Clone)]
pub struct Flaky<S> {
    inner: S,
    failure_rate: f64,
    rng: Arc<Mutex<ChaCha8Rng>>,
    injected: Arc<Mutex<u64>>,
}

impl<S> Flaky<S> {
    /// Wrap `inner` with the given plan.
    pub fn new(inner: S, plan: FaultPlan) -> Self {
        Self {
            inner,
            failure_rate: plan.failure_rate.clamp(0.0, 1.0),
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(plan.seed))),
            injected: Arc::new(Mutex::new(0)),
        }
    }

    /// The wrapped service.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of faults injected so far, across clones.
    pub fn injected(&self) -> u64 {
        *self.injected.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Roll for this call. Returns the error to report, if any.
    fn roll(&self, operation: &'static str) -> Result<(), ServiceError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        if !rng.gen_bool(self.failure_rate) {
            return Ok(());
        }
        *self.injected.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        tracing::debug!(operation, "injecting service fault");
        Err(ServiceError::Unavailable(INJECTED_FAULT.to_owned()))
    }
}

impl<S: AuthService> AuthService for Flaky<S> {
    async fn submit_credential(&self, identifier: &str) -> Result<(), ServiceError> {
        self.roll("submit_credential")?;
        self.inner.submit_credential(identifier).await
    }

    async fn verify_code(&self, identifier: &str, code: &str) -> Result<(), ServiceError> {
        self.roll("verify_code")?;
        self.inner.verify_code(identifier, code).await
    }

    async fn resend_code(&self, identifier: &str) -> Result<(), ServiceError> {
        self.roll("resend_code")?;
        self.inner.resend_code(identifier).await
    }

    async fn register(&self, registration: &Registration) -> Result<(), ServiceError> {
        self.roll("register")?;
        self.inner.register(registration).await
    }
}

impl<S: FeedService> FeedService for Flaky<S> {
    async fn home_feed(&self) -> Result<Vec<Post>, ServiceError> {
        self.roll("home_feed")?;
        self.inner.home_feed().await
    }

    async fn profile(&self) -> Result<Profile, ServiceError> {
        self.roll("profile")?;
        self.inner.profile().await
    }

    async fn comments(&self, post_id: PostId) -> Result<Vec<Comment>, ServiceError> {
        self.roll("comments")?;
        self.inner.comments(post_id).await
    }

    async fn post_comment(&self, post_id: PostId, body: &str) -> Result<Comment, ServiceError> {
        self.roll("post_comment")?;
        self.inner.post_comment(post_id, body).await
    }
}

#[cfg(test)]
mod tests {
    use stagebook_services::{ServiceConfig, StubAuthService};

    use super::*;
    use crate::SimEnv;

    fn flaky(plan: FaultPlan) -> Flaky<StubAuthService<SimEnv>> {
        Flaky::new(StubAuthService::new(SimEnv::new(), ServiceConfig::default()), plan)
    }

    async fn outcomes(auth: &Flaky<StubAuthService<SimEnv>>) -> Vec<bool> {
        let mut results = Vec::new();
        for _ in 0..32 {
            results.push(auth.resend_code("9876543210").await.is_ok());
        }
        results
    }

    #[tokio::test]
    async fn same_seed_same_faults() {
        let plan = FaultPlan { seed: 7, failure_rate: 0.5 };
        let first = outcomes(&flaky(plan)).await;
        let second = outcomes(&flaky(plan)).await;

        assert_eq!(first, second);
        assert!(first.contains(&true) && first.contains(&false));
    }

    #[tokio::test]
    async fn zero_rate_never_fails() {
        let auth = flaky(FaultPlan::none());
        assert!(outcomes(&auth).await.iter().all(|ok| *ok));
        assert_eq!(auth.injected(), 0);
    }

    #[tokio::test]
    async fn certain_failure_is_transient() {
        let auth = flaky(FaultPlan { seed: 1, failure_rate: 2.0 });
        let err = auth.verify_code("9876543210", "123456").await.unwrap_err();

        assert!(err.is_transient());
        assert_eq!(auth.injected(), 1);
    }
}
