//! Stub content provider backed by fixtures.
//!
//! Comment threads live in memory so posted comments show up on the next
//! load. Nothing is persisted.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use stagebook_core::{
    Comment, CommentId, Environment, FeedService, Post, PostId, Profile, ServiceError,
};

use crate::ServiceConfig;

/// Author name for comments posted from this client.
pub const SELF_AUTHOR: &str = "You";

const LOREM: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit.";

/// Fixture posts, in feed order.
pub fn fixture_posts() -> Vec<Post> {
    let post = |id, name: &str, handle: &str, role: &str, location: &str| Post {
        id: PostId(id),
        name: name.to_owned(),
        handle: handle.to_owned(),
        role: role.to_owned(),
        location: location.to_owned(),
        description: LOREM.to_owned(),
        posted: "5 mins ago".to_owned(),
    };
    vec![
        post(1, "Sim@065", "sim065", "Individual - Singer", "Koramangala, Bangalore"),
        post(2, "Ray@987", "ray987", "Individual - Guitarist", "Mumbai, Maharashtra"),
        post(3, "Sim@065", "sim065", "Individual - Singer", "Koramangala, Bangalore"),
    ]
}

/// Fixture profile of the signed-in user.
pub fn fixture_profile() -> Profile {
    Profile {
        name: "Sim@065".to_owned(),
        handle: "sim065".to_owned(),
        role: "Individual - Singer".to_owned(),
        location: "Koramangala, Bangalore".to_owned(),
        bio: LOREM.to_owned(),
    }
}

/// Comments every fixture post starts with.
fn seed_comments() -> [(&'static str, &'static str); 4] {
    [
        ("Jane Doe", "This looks amazing! Great work."),
        ("John Smith", "I was wondering when you would post this. 🔥"),
        ("Alex Johnson", "Incredible!"),
        (
            "Chris Lee",
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor \
             incididunt ut labore et dolore magna aliqua.",
        ),
    ]
}

struct FeedStore {
    posts: Vec<Post>,
    threads: HashMap<PostId, Vec<Comment>>,
    next_comment_id: u64,
}

impl FeedStore {
    fn seeded() -> Self {
        let posts = fixture_posts();
        let mut store = Self { posts, threads: HashMap::new(), next_comment_id: 1 };
        for post_id in store.posts.iter().map(|p| p.id).collect::<Vec<_>>() {
            for (author, body) in seed_comments() {
                store.append(post_id, author, body);
            }
        }
        store
    }

    fn append(&mut self, post_id: PostId, author: &str, body: &str) -> Comment {
        let comment = Comment {
            id: CommentId(self.next_comment_id),
            author: author.to_owned(),
            body: body.to_owned(),
        };
        self.next_comment_id += 1;
        self.threads.entry(post_id).or_default().push(comment.clone());
        comment
    }
}

/// Placeholder content service.
#[derive(Clone)]
pub struct StubFeedService<E> {
    env: E,
    config: ServiceConfig,
    store: Arc<Mutex<FeedStore>>,
}

impl<E: std::fmt::Debug> std::fmt::Debug for StubFeedService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubFeedService")
            .field("env", &self.env)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E: Environment> StubFeedService<E> {
    /// Create a stub seeded with the fixture posts and comments.
    pub fn new(env: E, config: ServiceConfig) -> Self {
        Self { env, config, store: Arc::new(Mutex::new(FeedStore::seeded())) }
    }

    fn store(&self) -> MutexGuard<'_, FeedStore> {
        // A panic mid-append leaves the store usable.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(post_id: PostId) -> ServiceError {
        ServiceError::rejected(format!("{post_id} not found"))
    }
}

impl<E: Environment> FeedService for StubFeedService<E> {
    async fn home_feed(&self) -> Result<Vec<Post>, ServiceError> {
        tracing::info!("loading home feed");
        self.env.sleep(self.config.feed_delay).await;
        Ok(self.store().posts.clone())
    }

    async fn profile(&self) -> Result<Profile, ServiceError> {
        tracing::info!("loading profile");
        self.env.sleep(self.config.feed_delay).await;
        Ok(fixture_profile())
    }

    async fn comments(&self, post_id: PostId) -> Result<Vec<Comment>, ServiceError> {
        tracing::info!(%post_id, "loading comments");
        self.env.sleep(self.config.feed_delay).await;

        let store = self.store();
        if !store.posts.iter().any(|p| p.id == post_id) {
            return Err(Self::not_found(post_id));
        }
        Ok(store.threads.get(&post_id).cloned().unwrap_or_default())
    }

    async fn post_comment(&self, post_id: PostId, body: &str) -> Result<Comment, ServiceError> {
        tracing::info!(%post_id, len = body.len(), "posting comment");
        self.env.sleep(self.config.feed_delay).await;

        let body = body.trim();
        if body.is_empty() {
            return Err(ServiceError::rejected("Comment is empty"));
        }

        let mut store = self.store();
        if !store.posts.iter().any(|p| p.id == post_id) {
            return Err(Self::not_found(post_id));
        }
        Ok(store.append(post_id, SELF_AUTHOR, body))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::SystemEnv;

    fn stub() -> StubFeedService<SystemEnv> {
        StubFeedService::new(SystemEnv::new(), ServiceConfig::instant())
    }

    #[tokio::test]
    async fn feed_matches_fixtures() {
        let feed = stub();
        let posts = feed.home_feed().await.unwrap_or_default();
        let names: Vec<_> = posts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Sim@065", "Ray@987", "Sim@065"]);
        assert_eq!(feed.profile().await.map(|p| p.name), Ok("Sim@065".into()));
    }

    #[tokio::test]
    async fn threads_start_with_four_comments() {
        let feed = stub();
        let comments = feed.comments(PostId(2)).await.unwrap_or_default();
        let authors: Vec<_> = comments.iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, ["Jane Doe", "John Smith", "Alex Johnson", "Chris Lee"]);
    }

    #[tokio::test]
    async fn posted_comment_is_visible_to_clones() {
        let feed = stub();
        let other = feed.clone();

        let posted = feed.post_comment(PostId(1), "  great set  ").await.unwrap();
        assert_eq!(posted.body, "great set");
        assert_eq!(posted.author, SELF_AUTHOR);

        let thread = other.comments(PostId(1)).await.unwrap_or_default();
        assert_eq!(thread.last(), Some(&posted));
        assert_eq!(thread.len(), 5);
    }

    #[tokio::test]
    async fn unknown_post_and_blank_comment_rejected() {
        let feed = stub();
        assert!(matches!(feed.comments(PostId(99)).await, Err(ServiceError::Rejected { .. })));
        assert!(matches!(
            feed.post_comment(PostId(1), "   ").await,
            Err(ServiceError::Rejected { .. })
        ));
    }
}
