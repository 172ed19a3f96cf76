//! Service-to-Application translation layer.
//!
//! The [`Bridge`] wraps the capability services and adapts them to the
//! application lifecycle.
//!
//! # Responsibilities
//!
//! - Converts service [`crate::AppAction`]s into calls on [`AuthService`] and
//!   [`FeedService`].
//! - Interprets the results and converts them back into [`crate::AppEvent`]s
//!   to update the UI.
//! - Logs failures; the App only sees the message.
//!
//! The bridge is cheap to clone so drivers can run each call on its own task.

use stagebook_core::{AuthService, FeedService, ServiceError};

use crate::{AppAction, AppEvent, LoadTarget};

/// Bridge between App actions and the capability services.
#[derive(Debug, Clone)]
pub struct Bridge<A, F> {
    auth: A,
    feed: F,
}

impl<A: AuthService, F: FeedService> Bridge<A, F> {
    /// Create a bridge over the given services.
    pub fn new(auth: A, feed: F) -> Self {
        Self { auth, feed }
    }

    /// Execute a service action and return the completion event.
    ///
    /// Returns `None` for actions that are not service calls.
    pub async fn execute(&self, action: AppAction) -> Option<AppEvent> {
        let event = match action {
            AppAction::Render | AppAction::Quit => return None,
            AppAction::SubmitCredential { identifier } => {
                match self.auth.submit_credential(&identifier).await {
                    Ok(()) => AppEvent::CredentialAccepted { identifier },
                    Err(e) => AppEvent::CredentialRejected { message: failure("login", &e) },
                }
            },
            AppAction::VerifyCode { identifier, code } => {
                match self.auth.verify_code(&identifier, &code).await {
                    Ok(()) => AppEvent::CodeVerified,
                    Err(e) => AppEvent::CodeRejected { message: failure("verify code", &e) },
                }
            },
            AppAction::ResendCode { identifier } => match self.auth.resend_code(&identifier).await {
                Ok(()) => AppEvent::CodeResent,
                Err(e) => AppEvent::ResendFailed { message: failure("resend code", &e) },
            },
            AppAction::Register(registration) => match self.auth.register(&registration).await {
                Ok(()) => AppEvent::Registered,
                Err(e) => AppEvent::RegistrationFailed { message: failure("register", &e) },
            },
            AppAction::LoadHomeFeed => match self.feed.home_feed().await {
                Ok(posts) => AppEvent::HomeFeedLoaded { posts },
                Err(e) => AppEvent::LoadFailed {
                    target: LoadTarget::HomeFeed,
                    message: failure("load home feed", &e),
                },
            },
            AppAction::LoadProfile => match self.feed.profile().await {
                Ok(profile) => AppEvent::ProfileLoaded { profile },
                Err(e) => AppEvent::LoadFailed {
                    target: LoadTarget::Profile,
                    message: failure("load profile", &e),
                },
            },
            AppAction::LoadComments { post_id } => match self.feed.comments(post_id).await {
                Ok(comments) => AppEvent::CommentsLoaded { post_id, comments },
                Err(e) => AppEvent::LoadFailed {
                    target: LoadTarget::Comments(post_id),
                    message: failure("load comments", &e),
                },
            },
            AppAction::PostComment { post_id, body } => {
                match self.feed.post_comment(post_id, &body).await {
                    Ok(comment) => AppEvent::CommentPosted { post_id, comment },
                    Err(e) => AppEvent::LoadFailed {
                        target: LoadTarget::PostComment(post_id),
                        message: failure("post comment", &e),
                    },
                }
            },
        };
        Some(event)
    }

    /// Authentication service.
    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Content service.
    pub fn feed(&self) -> &F {
        &self.feed
    }
}

fn failure(operation: &str, error: &ServiceError) -> String {
    if error.is_transient() {
        tracing::warn!(operation, %error, "service call failed, retry possible");
    } else {
        tracing::info!(operation, %error, "service call rejected");
    }
    error.to_string()
}
