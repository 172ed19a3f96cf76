//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, paste, resize) and the one-second tick.
//! - Service completions translated by the [`crate::Bridge`].

use stagebook_core::{Comment, Post, PostId, Profile};

use crate::KeyInput;

/// Which content request a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    /// Home feed posts.
    HomeFeed,
    /// Signed-in profile.
    Profile,
    /// Comment thread of a post.
    Comments(PostId),
    /// Posting a comment to a post.
    PostComment(PostId),
}

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Bracketed paste delivered as one payload.
    Paste(String),

    /// One second elapsed.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Login identifier accepted; a passcode was sent.
    CredentialAccepted {
        /// Mobile number the code was sent to.
        identifier: String,
    },

    /// Login identifier refused.
    CredentialRejected {
        /// Error description.
        message: String,
    },

    /// Passcode verified.
    CodeVerified,

    /// Passcode refused.
    CodeRejected {
        /// Error description.
        message: String,
    },

    /// A fresh passcode was sent.
    CodeResent,

    /// Resending the passcode failed.
    ResendFailed {
        /// Error description.
        message: String,
    },

    /// Account created.
    Registered,

    /// Account creation refused.
    RegistrationFailed {
        /// Error description.
        message: String,
    },

    /// Home feed arrived.
    HomeFeedLoaded {
        /// Posts, newest first.
        posts: Vec<Post>,
    },

    /// Profile arrived.
    ProfileLoaded {
        /// Signed-in profile.
        profile: Profile,
    },

    /// Comment thread arrived.
    CommentsLoaded {
        /// Post the thread belongs to.
        post_id: PostId,
        /// Comments, oldest first.
        comments: Vec<Comment>,
    },

    /// A comment was stored.
    CommentPosted {
        /// Post the comment belongs to.
        post_id: PostId,
        /// Stored comment.
        comment: Comment,
    },

    /// A content request failed.
    LoadFailed {
        /// Request that failed.
        target: LoadTarget,
        /// Error description.
        message: String,
    },
}
