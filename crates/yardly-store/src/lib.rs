pub mod error;
pub mod kv;
pub mod sqlite;

mod document;

pub use document::DocumentStore;
pub use error::{KvError, StoreError};
pub use kv::{Kv, MemoryKv};
pub use sqlite::SqliteKv;

use std::sync::Arc;

use yardly_types::{Comment, Post};

/// Storage slot holding the post collection.
pub const POSTS_KEY: &str = "posts";

/// Storage slot holding the comment collection.
pub const COMMENTS_KEY: &str = "comments";

/// Persistence shim for the post collection, stored wholesale under
/// [`POSTS_KEY`].
pub struct PostStore {
    inner: DocumentStore<Post>,
}

impl PostStore {
    pub fn new(kv: Arc<dyn Kv>) -> Self {
        Self {
            inner: DocumentStore::new(kv, POSTS_KEY),
        }
    }

    pub fn save(&self, posts: &[Post]) {
        self.inner.save(posts);
    }

    pub fn load(&self) -> Vec<Post> {
        self.inner.load()
    }
}

/// Persistence shim for the comment collection, stored wholesale under
/// [`COMMENTS_KEY`]. No cross-validation against posts is performed.
pub struct CommentStore {
    inner: DocumentStore<Comment>,
}

impl CommentStore {
    pub fn new(kv: Arc<dyn Kv>) -> Self {
        Self {
            inner: DocumentStore::new(kv, COMMENTS_KEY),
        }
    }

    pub fn save(&self, comments: &[Comment]) {
        self.inner.save(comments);
    }

    pub fn load(&self) -> Vec<Comment> {
        self.inner.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that fails every operation, for exercising the swallow-and-
    /// default contract.
    struct BrokenKv;

    impl Kv for BrokenKv {
        fn get(&self, _key: &str) -> Result<Option<String>, KvError> {
            Err(KvError::Backend("disk unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), KvError> {
            Err(KvError::Backend("disk unavailable".into()))
        }
    }

    fn post(id: &str, text: &str) -> Post {
        Post {
            id: id.into(),
            text: text.into(),
            lat: 37.0965,
            lng: -113.5684,
            created_at: 1000,
            image_uri: None,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let kv = Arc::new(MemoryKv::new());
        let store = PostStore::new(kv);

        let posts = vec![post("1", "Yard sale"), post("2", "Moving out sale")];
        store.save(&posts);

        assert_eq!(store.load(), posts);
    }

    #[test]
    fn load_without_prior_save_is_empty() {
        let store = PostStore::new(Arc::new(MemoryKv::new()));
        assert_eq!(store.load(), vec![]);
    }

    #[test]
    fn corrupt_slot_loads_as_empty() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(POSTS_KEY, "{not json").unwrap();

        let store = PostStore::new(kv);
        assert_eq!(store.load(), vec![]);
    }

    #[test]
    fn schema_mismatch_loads_as_empty() {
        let kv = Arc::new(MemoryKv::new());
        // Valid JSON, wrong shape.
        kv.set(POSTS_KEY, r#"{"id": "1"}"#).unwrap();

        let store = PostStore::new(kv);
        assert_eq!(store.load(), vec![]);
    }

    #[test]
    fn repeated_save_does_not_accumulate() {
        let kv = Arc::new(MemoryKv::new());
        let store = PostStore::new(kv);

        let posts = vec![post("1", "Yard sale")];
        store.save(&posts);
        store.save(&posts);

        assert_eq!(store.load(), posts);
    }

    #[test]
    fn deletion_persists_remaining_posts() {
        let kv = Arc::new(MemoryKv::new());
        let store = PostStore::new(kv);

        store.save(&[post("1", "Yard sale"), post("2", "Moving out sale")]);

        let mut posts = store.load();
        posts.retain(|p| p.id != "1");
        store.save(&posts);

        let remaining = store.load();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
    }

    #[test]
    fn post_and_comment_slots_are_independent() {
        let kv = Arc::new(MemoryKv::new());
        let posts = PostStore::new(kv.clone());
        let comments = CommentStore::new(kv.clone());

        posts.save(&[post("1", "Yard sale")]);
        comments.save(&[Comment {
            id: "c1".into(),
            post_id: "missing".into(),
            text: "Still open?".into(),
            created_at: 2000,
        }]);

        assert_eq!(posts.load().len(), 1);
        assert_eq!(comments.load().len(), 1);

        // Overwriting comments leaves the posts slot untouched.
        comments.save(&[]);
        assert_eq!(posts.load().len(), 1);
        assert!(kv.get(POSTS_KEY).unwrap().is_some());
    }

    #[test]
    fn failed_save_is_swallowed() {
        let store = PostStore::new(Arc::new(BrokenKv));
        // Must not panic or surface an error.
        store.save(&[post("1", "Yard sale")]);
    }

    #[test]
    fn failed_load_reads_as_empty() {
        let store = CommentStore::new(Arc::new(BrokenKv));
        assert_eq!(store.load(), vec![]);
    }

    #[test]
    fn example_scenario() {
        let store = PostStore::new(Arc::new(MemoryKv::new()));
        let posts = vec![post("1", "Yard sale")];

        store.save(&posts);
        let loaded = store.load();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], posts[0]);
    }
}
