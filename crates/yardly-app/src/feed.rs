use std::sync::Arc;

use tracing::info;
use yardly_store::{CommentStore, Kv, PostStore};
use yardly_types::{Comment, Coordinates, FALLBACK_LOCATION, Post, now_millis};

use crate::error::FeedError;
use crate::seed::seed_posts;
use crate::session::Session;

/// Draft input for a new listing, as collected by the create screen.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub image_uri: Option<String>,
    pub location: Option<Coordinates>,
}

/// The listings feed and its comments.
///
/// The in-memory vectors are the source of truth for the session; every
/// mutation writes the whole collection back through the stores. Flushes are
/// best-effort — the stores log and swallow storage failures.
pub struct Feed {
    post_store: PostStore,
    comment_store: CommentStore,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Feed {
    /// Open the feed over a key-value backend. An empty posts slot seeds the
    /// feed with the starter listings so a fresh install is not blank.
    pub fn open(kv: Arc<dyn Kv>) -> Self {
        let post_store = PostStore::new(kv.clone());
        let comment_store = CommentStore::new(kv);

        let mut posts = post_store.load();
        if posts.is_empty() {
            info!("No stored posts; seeding starter listings");
            posts = seed_posts();
            post_store.save(&posts);
        }
        let comments = comment_store.load();

        Self {
            post_store,
            comment_store,
            posts,
            comments,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The listing promoted as the "Top Sale" card: the newest post.
    pub fn top_sale(&self) -> Option<&Post> {
        self.posts.first()
    }

    /// Validate a draft and prepend the resulting post to the feed.
    /// Returns the new post's id.
    pub fn create_post(&mut self, draft: PostDraft) -> Result<String, FeedError> {
        let title = draft.title.trim();
        let description = draft.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(FeedError::MissingInfo);
        }

        let created_at = now_millis();
        let id = next_id(created_at, |candidate| {
            self.posts.iter().any(|p| p.id == candidate)
        });
        let location = draft.location.unwrap_or(FALLBACK_LOCATION);

        self.posts.insert(
            0,
            Post {
                id: id.clone(),
                text: format!("{} - {}", title, description),
                lat: location.lat,
                lng: location.lng,
                created_at,
                image_uri: draft.image_uri,
            },
        );
        self.post_store.save(&self.posts);
        Ok(id)
    }

    /// Remove a post from the feed. Admin sessions only. Comments on the
    /// post are left in place; orphans are legal.
    pub fn delete_post(&mut self, session: &Session, id: &str) -> Result<(), FeedError> {
        if !session.is_admin() {
            return Err(FeedError::NotAuthorized);
        }

        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        if self.posts.len() == before {
            return Err(FeedError::UnknownPost(id.to_string()));
        }

        self.post_store.save(&self.posts);
        Ok(())
    }

    /// Prepend a comment for `post_id`. The reference is not checked against
    /// existing posts.
    pub fn add_comment(&mut self, post_id: &str, text: &str) -> Result<String, FeedError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FeedError::MissingInfo);
        }

        let created_at = now_millis();
        let id = next_id(created_at, |candidate| {
            self.comments.iter().any(|c| c.id == candidate)
        });

        self.comments.insert(
            0,
            Comment {
                id: id.clone(),
                post_id: post_id.to_string(),
                text: text.to_string(),
                created_at,
            },
        );
        self.comment_store.save(&self.comments);
        Ok(id)
    }

    /// Comments for one post, newest first (insertion order).
    pub fn comments_for(&self, post_id: &str) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .collect()
    }

    /// Reload posts from storage, replacing the in-memory cache wholesale.
    /// The original runs this whenever the feed screen regains focus.
    pub fn refresh(&mut self) {
        self.posts = self.post_store.load();
    }
}

/// Timestamp-derived id, suffixed when the bare millisecond value is already
/// taken. The original used the raw timestamp and accepted collisions.
fn next_id(created_at: i64, taken: impl Fn(&str) -> bool) -> String {
    let base = created_at.to_string();
    if !taken(&base) {
        return base;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
