//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use stagebook_core::{PostId, Registration};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Submit the login identifier and request a passcode.
    SubmitCredential {
        /// Mobile number.
        identifier: String,
    },

    /// Verify a passcode.
    VerifyCode {
        /// Mobile number the code was sent to.
        identifier: String,
        /// Full passcode.
        code: String,
    },

    /// Send a fresh passcode.
    ResendCode {
        /// Mobile number to send to.
        identifier: String,
    },

    /// Create an account.
    Register(Registration),

    /// Fetch the home feed.
    LoadHomeFeed,

    /// Fetch the signed-in profile.
    LoadProfile,

    /// Fetch the comment thread of a post.
    LoadComments {
        /// Post to fetch comments for.
        post_id: PostId,
    },

    /// Add a comment to a post.
    PostComment {
        /// Post to comment on.
        post_id: PostId,
        /// Trimmed comment text.
        body: String,
    },
}

impl AppAction {
    /// Whether this action calls a service and must be dispatched.
    pub fn is_service_call(&self) -> bool {
        !matches!(self, Self::Render | Self::Quit)
    }
}
