//! Stagebook stub services.
//!
//! Placeholder implementations of the capability traits from
//! [`stagebook_core`]. Every call logs what it would have sent, waits a
//! configurable delay through the [`Environment`](stagebook_core::Environment)
//! and succeeds, apart from a few reserved inputs that exercise failure paths.
//!
//! # Components
//!
//! - [`StubAuthService`]: login, passcode verification, resend, registration
//! - [`StubFeedService`]: fixture feed, profile and in-memory comment threads
//! - [`ServiceConfig`]: per-call latency
//! - [`SystemEnv`]: Production environment (real time, tokio sleep)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod feed;
mod system_env;

pub use auth::{REJECTED_CODE, StubAuthService};
pub use config::ServiceConfig;
pub use feed::{SELF_AUTHOR, StubFeedService, fixture_posts, fixture_profile};
pub use system_env::SystemEnv;
