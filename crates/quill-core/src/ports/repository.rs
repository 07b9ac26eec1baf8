use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostPatch};
use crate::error::RepoError;

/// Post repository - the storage capability handlers are handed.
///
/// Implementations own the connection; handlers never touch a database
/// handle directly.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. Stamps `created_at` and `updated_at` with the same
    /// value and returns the materialized post by echoing the draft plus the
    /// storage-assigned id - no read-back.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Apply a sparse patch to an existing post and refresh `updated_at`.
    ///
    /// Only fields present in the patch are written. Returns
    /// [`RepoError::NotFound`] when no row was affected; otherwise re-reads
    /// the row so the caller gets the stored state, tags decoded.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, RepoError>;

    /// Hard-delete a post. [`RepoError::NotFound`] when no row was affected.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// Fetch a single post by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Fetch every post, in storage order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Case-insensitive substring search over title, content and category.
    /// Tags are not searched. The term is bound as a query parameter.
    async fn search(&self, term: &str) -> Result<Vec<Post>, RepoError>;
}
