//! Home feed, profile and comment sheet state.

use stagebook_core::{Comment, Post, PostId, Profile};

use crate::{FieldKind, KeyInput, TextField};

/// Remote data with its load status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Never requested.
    Idle,
    /// Request in flight.
    Loading,
    /// Loaded.
    Ready(T),
    /// Request failed with a message.
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Loadable<T> {
    /// Loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Whether a request should be issued: never requested or failed.
    pub fn needs_load(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Posts on the home tab with a selection cursor.
#[derive(Debug, Clone, Default)]
pub struct HomeFeed {
    posts: Loadable<Vec<Post>>,
    selected: usize,
}

impl HomeFeed {
    /// Post list and status.
    pub fn posts(&self) -> &Loadable<Vec<Post>> {
        &self.posts
    }

    /// Index of the selected post.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected post, once loaded.
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.ready().and_then(|posts| posts.get(self.selected))
    }

    /// Mark a load as started. Returns false if one is already running.
    pub fn begin_load(&mut self) -> bool {
        if !self.posts.needs_load() {
            return false;
        }
        self.posts = Loadable::Loading;
        true
    }

    /// Store loaded posts, keeping the selection in range.
    pub fn loaded(&mut self, posts: Vec<Post>) {
        self.selected = self.selected.min(posts.len().saturating_sub(1));
        self.posts = Loadable::Ready(posts);
    }

    /// Record a failed load.
    pub fn failed(&mut self, message: String) {
        self.posts = Loadable::Failed(message);
    }

    /// Move selection up or down. Returns whether it moved.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        let len = self.posts.ready().map_or(0, Vec::len);
        let before = self.selected;
        match key {
            KeyInput::Up | KeyInput::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyInput::Down | KeyInput::Char('j') => {
                self.selected = (self.selected + 1).min(len.saturating_sub(1));
            },
            KeyInput::Home => self.selected = 0,
            KeyInput::End => self.selected = len.saturating_sub(1),
            _ => return false,
        }
        before != self.selected
    }
}

/// Profile tab data.
#[derive(Debug, Clone, Default)]
pub struct ProfileView {
    profile: Loadable<Profile>,
}

impl ProfileView {
    /// Profile and status.
    pub fn profile(&self) -> &Loadable<Profile> {
        &self.profile
    }

    /// Header text: the name once loaded.
    pub fn title(&self) -> &str {
        self.profile.ready().map_or("Loading...", |p| p.name.as_str())
    }

    /// Mark a load as started. Returns false if not needed.
    pub fn begin_load(&mut self) -> bool {
        if !self.profile.needs_load() {
            return false;
        }
        self.profile = Loadable::Loading;
        true
    }

    /// Store the loaded profile.
    pub fn loaded(&mut self, profile: Profile) {
        self.profile = Loadable::Ready(profile);
    }

    /// Record a failed load.
    pub fn failed(&mut self, message: String) {
        self.profile = Loadable::Failed(message);
    }
}

/// Resting heights of the comment sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapPoint {
    /// Half the screen.
    #[default]
    Half,
    /// Most of the screen.
    Full,
}

impl SnapPoint {
    /// Sheet height as a percentage of the screen.
    pub fn percent(self) -> u16 {
        match self {
            Self::Half => 50,
            Self::Full => 85,
        }
    }
}

/// Comment thread for one post, shown as a bottom sheet.
#[derive(Debug, Clone)]
pub struct CommentSheet {
    post_id: PostId,
    comments: Loadable<Vec<Comment>>,
    draft: TextField,
    snap: SnapPoint,
    posting: bool,
}

/// What the sheet wants after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    /// Nothing beyond a redraw.
    Updated,
    /// Key not handled.
    Ignored,
    /// Close the sheet.
    Dismiss,
    /// Post `body` to the thread.
    Post {
        /// Trimmed comment text.
        body: String,
    },
}

impl CommentSheet {
    /// Present the sheet for `post_id` at half height.
    pub fn present(post_id: PostId) -> Self {
        Self {
            post_id,
            comments: Loadable::Loading,
            draft: TextField::new(FieldKind::Comment, "Write a comment..."),
            snap: SnapPoint::Half,
            posting: false,
        }
    }

    /// Post the thread belongs to.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Comments and status.
    pub fn comments(&self) -> &Loadable<Vec<Comment>> {
        &self.comments
    }

    /// Comment being written.
    pub fn draft(&self) -> &TextField {
        &self.draft
    }

    /// Current height.
    pub fn snap(&self) -> SnapPoint {
        self.snap
    }

    /// Whether a post is in flight.
    pub fn is_posting(&self) -> bool {
        self.posting
    }

    /// Title line, e.g. `Comments (4)`.
    pub fn title(&self) -> String {
        match self.comments.ready() {
            Some(comments) => format!("Comments ({})", comments.len()),
            None => "Comments".to_owned(),
        }
    }

    /// Whether the send control is enabled.
    pub fn can_post(&self) -> bool {
        !self.posting && !self.draft.value().trim().is_empty()
    }

    /// Store the loaded thread.
    pub fn loaded(&mut self, comments: Vec<Comment>) {
        self.comments = Loadable::Ready(comments);
    }

    /// Record a failed load or post.
    pub fn failed(&mut self, message: String) {
        self.posting = false;
        if !matches!(self.comments, Loadable::Ready(_)) {
            self.comments = Loadable::Failed(message);
        }
    }

    /// Append a comment the service accepted.
    pub fn posted(&mut self, comment: Comment) {
        self.posting = false;
        match &mut self.comments {
            Loadable::Ready(comments) => comments.push(comment),
            other => *other = Loadable::Ready(vec![comment]),
        }
    }

    /// Insert pasted text into the draft.
    pub fn paste(&mut self, text: &str) {
        self.draft.insert_str(text);
    }

    /// Handle a key while the sheet is open.
    pub fn handle_key(&mut self, key: KeyInput) -> SheetOutcome {
        match key {
            KeyInput::Esc => SheetOutcome::Dismiss,
            KeyInput::Up => {
                self.snap = SnapPoint::Full;
                SheetOutcome::Updated
            },
            KeyInput::Down => {
                self.snap = SnapPoint::Half;
                SheetOutcome::Updated
            },
            KeyInput::Enter => {
                if !self.can_post() {
                    return SheetOutcome::Ignored;
                }
                let body = self.draft.value().trim().to_owned();
                self.draft.clear();
                self.posting = true;
                SheetOutcome::Post { body }
            },
            key => {
                if self.draft.handle_key(key) {
                    SheetOutcome::Updated
                } else {
                    SheetOutcome::Ignored
                }
            },
        }
    }
}
