//! Error types for the Stagebook core.
//!
//! Two layers: [`ServiceError`] for failures reported by the capability
//! services (login, verification, feed) and [`ValidationError`] for form
//! rules. Validation errors render as the exact message shown under a field.

use std::time::Duration;

use thiserror::Error;

/// Errors reported by a capability service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service refused the request (bad credential, wrong code).
    #[error("{reason}")]
    Rejected {
        /// Human-readable rejection reason.
        reason: String,
    },

    /// Too many requests; try again later.
    #[error("too many attempts, retry in {}s", retry_after.as_secs())]
    Throttled {
        /// How long the caller should wait.
        retry_after: Duration,
    },

    /// The service could not be reached.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    /// Create a rejection with the given reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected { reason: reason.into() }
    }

    /// Returns true if this error is transient and may succeed on retry.
    ///
    /// Rejections are final for the given input; throttling and outages are
    /// not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Throttled { .. } | Self::Unavailable(_))
    }
}

/// Form validation failures.
///
/// `Display` yields the message rendered under the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Mobile number left empty.
    #[error("Mobile number is required")]
    MobileRequired,

    /// Mobile number is not 10 to 15 digits.
    #[error("Please enter a valid mobile number")]
    MobileInvalid,

    /// Passcode left empty.
    #[error("OTP is required")]
    CodeRequired,

    /// Passcode has the wrong number of characters.
    #[error("OTP must be {expected} digits")]
    CodeLength {
        /// Required number of digits.
        expected: usize,
    },

    /// Passcode contains something other than digits.
    #[error("OTP must contain only numbers")]
    CodeNotNumeric,

    /// Name left blank.
    #[error("Name is required")]
    NameRequired,

    /// Email left empty.
    #[error("Email is required")]
    EmailRequired,

    /// Email does not look like `local@domain.tld`.
    #[error("Invalid email")]
    EmailInvalid,

    /// Password left empty.
    #[error("Password is required")]
    PasswordRequired,

    /// Password shorter than the minimum.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum number of characters.
        min: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_final() {
        assert!(!ServiceError::rejected("nope").is_transient());
        assert!(ServiceError::Unavailable("down".into()).is_transient());
        assert!(ServiceError::Throttled { retry_after: Duration::from_secs(5) }.is_transient());
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(ValidationError::CodeLength { expected: 6 }.to_string(), "OTP must be 6 digits");
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            ServiceError::Throttled { retry_after: Duration::from_secs(30) }.to_string(),
            "too many attempts, retry in 30s"
        );
    }
}
