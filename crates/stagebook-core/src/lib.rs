//! Core domain for Stagebook.
//!
//! Everything the application layer needs to know about the outside world,
//! without any of the outside world itself:
//!
//! - [`env`]: time abstraction so production and simulation share code
//! - [`auth`] and [`feed`]: capability traits for the stubbed backends
//! - [`validation`]: form rules with their user-facing messages
//! - [`error`]: typed errors for services and validation

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod auth;
pub mod env;
pub mod error;
pub mod feed;
pub mod validation;

pub use auth::{AuthService, Registration};
pub use env::Environment;
pub use error::{ServiceError, ValidationError};
pub use feed::{Comment, CommentId, FeedService, Post, PostId, Profile};
