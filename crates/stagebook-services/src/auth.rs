//! Stub identity provider.
//!
//! Every call is logged, waits the configured delay and succeeds, except for
//! two reserved inputs that exercise the failure paths.

use stagebook_core::{AuthService, Environment, Registration, ServiceError};

use crate::ServiceConfig;

/// Passcode the stub always refuses.
pub const REJECTED_CODE: &str = "000000";

/// Placeholder authentication service.
#[derive(Debug, Clone)]
pub struct StubAuthService<E> {
    env: E,
    config: ServiceConfig,
}

impl<E: Environment> StubAuthService<E> {
    /// Create a stub that sleeps through `env`.
    pub fn new(env: E, config: ServiceConfig) -> Self {
        Self { env, config }
    }
}

/// All-zero mobile numbers are treated as unregistered.
fn is_unregistered(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.chars().all(|c| c == '0')
}

impl<E: Environment> AuthService for StubAuthService<E> {
    async fn submit_credential(&self, identifier: &str) -> Result<(), ServiceError> {
        tracing::info!(identifier, "logging in");
        self.env.sleep(self.config.login_delay).await;

        if is_unregistered(identifier) {
            return Err(ServiceError::rejected("This mobile number is not registered"));
        }
        Ok(())
    }

    async fn verify_code(&self, identifier: &str, code: &str) -> Result<(), ServiceError> {
        tracing::info!(identifier, code_len = code.len(), "verifying code");
        self.env.sleep(self.config.verify_delay).await;

        if code == REJECTED_CODE {
            return Err(ServiceError::rejected("Invalid OTP. Please try again."));
        }
        Ok(())
    }

    async fn resend_code(&self, identifier: &str) -> Result<(), ServiceError> {
        tracing::info!(identifier, "resending code");
        self.env.sleep(self.config.resend_delay).await;
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ServiceError> {
        tracing::info!(name = %registration.name, email = %registration.email, "registering");
        self.env.sleep(self.config.register_delay).await;
        Ok(())
    }
}
