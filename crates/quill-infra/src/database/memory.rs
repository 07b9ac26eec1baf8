//! In-memory post repository - used as fallback when the database is unavailable.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostDraft, PostPatch, timestamp};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post store keyed by id.
///
/// Ids come from a monotonic counter, so iterating the map yields insertion
/// order - the same order a SELECT without ORDER BY gives over an append-only
/// table. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.content.to_lowercase().contains(needle)
        || post
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let stamp = timestamp::now();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = Post {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            created_at: stamp.clone(),
            updated_at: stamp,
        };

        let mut store = self.store.write().await;
        store.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(category) = patch.category {
            post.category = Some(category);
        }
        if let Some(tags) = patch.tags {
            post.tags = Some(tags);
        }
        post.updated_at = timestamp::now();

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, RepoError> {
        let needle = term.to_lowercase();
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|p| matches(p, &needle))
            .cloned()
            .collect())
    }
}
