use std::sync::{Arc, Mutex};

use tokio::task;
use tracing::error;
use yardly_store::Kv;
use yardly_types::{Comment, Post};

use crate::error::FeedError;
use crate::feed::{Feed, PostDraft};
use crate::session::Session;

/// Cloneable async facade over [`Feed`] for embedding in an async UI shell.
///
/// Store access is blocking (SQLite under the hood), so every call hops to
/// the blocking pool, the same way request handlers wrap a blocking database.
#[derive(Clone)]
pub struct FeedService {
    inner: Arc<Mutex<Feed>>,
}

impl FeedService {
    pub fn new(feed: Feed) -> Self {
        Self {
            inner: Arc::new(Mutex::new(feed)),
        }
    }

    /// Open a feed over `kv` and wrap it.
    pub fn open(kv: Arc<dyn Kv>) -> Self {
        Self::new(Feed::open(kv))
    }

    pub async fn create_post(&self, draft: PostDraft) -> Result<String, FeedError> {
        self.run(move |feed| feed.create_post(draft)).await?
    }

    pub async fn delete_post(&self, session: Session, id: String) -> Result<(), FeedError> {
        self.run(move |feed| feed.delete_post(&session, &id)).await?
    }

    pub async fn add_comment(&self, post_id: String, text: String) -> Result<String, FeedError> {
        self.run(move |feed| feed.add_comment(&post_id, &text)).await?
    }

    /// Reload from storage and return the current feed.
    pub async fn refresh(&self) -> Result<Vec<Post>, FeedError> {
        self.run(|feed| {
            feed.refresh();
            feed.posts().to_vec()
        })
        .await
    }

    pub async fn posts(&self) -> Result<Vec<Post>, FeedError> {
        self.run(|feed| feed.posts().to_vec()).await
    }

    pub async fn top_sale(&self) -> Result<Option<Post>, FeedError> {
        self.run(|feed| feed.top_sale().cloned()).await
    }

    pub async fn comments_for(&self, post_id: String) -> Result<Vec<Comment>, FeedError> {
        self.run(move |feed| feed.comments_for(&post_id).into_iter().cloned().collect())
            .await
    }

    async fn run<F, T>(&self, f: F) -> Result<T, FeedError>
    where
        F: FnOnce(&mut Feed) -> T + Send + 'static,
        T: Send + 'static,
    {
        let inner = self.inner.clone();
        task::spawn_blocking(move || {
            let mut feed = inner
                .lock()
                .map_err(|e| FeedError::Internal(format!("feed lock poisoned: {}", e)))?;
            Ok(f(&mut feed))
        })
        .await
        .map_err(|e| {
            error!("feed task join error: {}", e);
            FeedError::Internal(e.to_string())
        })?
    }
}
