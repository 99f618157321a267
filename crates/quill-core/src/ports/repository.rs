use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Post, PostSummary};
use crate::error::RepoError;

/// Field-level patch applied by [`PostRepository::update`]. Only `Some`
/// fields are written; `updated_at` is always written. The lifecycle
/// manager is the sole author of these patches, so slug and metadata
/// changes always arrive together with the source-field change that
/// caused them.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Post repository port over the backing document store.
///
/// The store enforces slug uniqueness; `insert` and `update` report a
/// violated constraint as [`RepoError::Constraint`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its exact slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Case-insensitive substring match against the slug field,
    /// newest `created_at` first.
    async fn search_by_slug(&self, fragment: &str) -> Result<Vec<Post>, RepoError>;

    /// List all posts as summaries, newest first. With a keyword, only
    /// posts whose title OR content contains it (case-insensitively).
    async fn list(&self, keyword: Option<&str>) -> Result<Vec<PostSummary>, RepoError>;

    /// Insert a complete post record in a single write.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Apply a patch to the post at `slug`. Fails with
    /// [`RepoError::NotFound`] when no such post exists.
    async fn update(&self, slug: &str, changes: PostChanges) -> Result<Post, RepoError>;

    /// Remove the post at `slug`. Returns `false` when nothing was removed.
    async fn delete_by_slug(&self, slug: &str) -> Result<bool, RepoError>;
}
