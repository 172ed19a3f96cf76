//! Authentication capability.
//!
//! The application never talks to an identity provider directly. It consumes
//! [`AuthService`], which a real deployment would back with an API client and
//! which this workspace backs with logged stubs.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Details collected by the registration form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Chosen password.
    pub password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity provider capability.
///
/// Every method completes asynchronously with success or a [`ServiceError`].
/// Implementations must be cheap to clone so drivers can run requests on
/// background tasks.
pub trait AuthService: Clone + Send + Sync + 'static {
    /// Submit the login identifier (mobile number) and request a passcode.
    fn submit_credential(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Verify the passcode sent to `identifier`.
    fn verify_code(
        &self,
        identifier: &str,
        code: &str,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Send a fresh passcode to `identifier`.
    fn resend_code(&self, identifier: &str) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Create an account.
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
