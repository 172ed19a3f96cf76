//! Feed and profile capability.
//!
//! Read-mostly content shown on the home and profile tabs, plus the comment
//! thread behind each post.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub u64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "post-{}", self.0)
    }
}

/// Comment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub u64);

/// A post in the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID.
    pub id: PostId,
    /// Author display name.
    pub name: String,
    /// Author handle (without `@`).
    pub handle: String,
    /// Author role, e.g. `Individual - Singer`.
    pub role: String,
    /// Author location.
    pub location: String,
    /// Post body.
    pub description: String,
    /// Relative time label, e.g. `5 mins ago`.
    pub posted: String,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment ID.
    pub id: CommentId,
    /// Author display name.
    pub author: String,
    /// Comment text.
    pub body: String,
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Handle (without `@`).
    pub handle: String,
    /// Role line.
    pub role: String,
    /// Location line.
    pub location: String,
    /// Free-form bio.
    pub bio: String,
}

/// Content provider capability.
pub trait FeedService: Clone + Send + Sync + 'static {
    /// Posts for the home feed, newest first.
    fn home_feed(&self) -> impl Future<Output = Result<Vec<Post>, ServiceError>> + Send;

    /// The signed-in user's profile.
    fn profile(&self) -> impl Future<Output = Result<Profile, ServiceError>> + Send;

    /// Comments on `post_id`, oldest first.
    fn comments(
        &self,
        post_id: PostId,
    ) -> impl Future<Output = Result<Vec<Comment>, ServiceError>> + Send;

    /// Add a comment to `post_id`. Returns the stored comment.
    fn post_comment(
        &self,
        post_id: PostId,
        body: &str,
    ) -> impl Future<Output = Result<Comment, ServiceError>> + Send;
}
