//! In-memory post repository - used as fallback when no database is
//! configured. Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostSummary};
use quill_core::error::RepoError;
use quill_core::ports::{PostChanges, PostRepository};

/// Slug-keyed in-memory store with the same uniqueness and ordering
/// semantics as the PostgreSQL repository.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn search_by_slug(&self, fragment: &str) -> Result<Vec<Post>, RepoError> {
        let needle = fragment.to_lowercase();
        let posts = self.posts.read().await;

        let mut matches: Vec<Post> = posts
            .iter()
            .filter(|p| p.slug.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matches)
    }

    async fn list(&self, keyword: Option<&str>) -> Result<Vec<PostSummary>, RepoError> {
        let posts = self.posts.read().await;

        let mut matches: Vec<PostSummary> = posts
            .iter()
            .filter(|p| match keyword {
                Some(kw) => {
                    let needle = kw.to_lowercase();
                    p.title.to_lowercase().contains(&needle)
                        || p.content.to_lowercase().contains(&needle)
                }
                None => true,
            })
            .map(PostSummary::from)
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matches)
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        // The write lock stands in for the store's unique index.
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::Constraint(format!(
                "A post with slug '{}' already exists",
                post.slug
            )));
        }

        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, slug: &str, changes: PostChanges) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if let Some(new_slug) = &changes.slug {
            if posts.iter().any(|p| p.slug == *new_slug && p.slug != slug) {
                return Err(RepoError::Constraint(format!(
                    "A post with slug '{new_slug}' already exists"
                )));
            }
        }

        let post = posts
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or(RepoError::NotFound)?;

        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        if let Some(new_slug) = changes.slug {
            post.slug = new_slug;
        }
        if let Some(meta_title) = changes.meta_title {
            post.meta_title = meta_title;
        }
        if let Some(meta_description) = changes.meta_description {
            post.meta_description = meta_description;
        }
        post.updated_at = changes.updated_at;

        Ok(post.clone())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.slug != slug);
        Ok(posts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use quill_core::seo::derive_meta;

    fn sample(title: &str, slug: &str) -> Post {
        Post::new(
            title.to_string(),
            "<p>body</p>".to_string(),
            slug.to_string(),
            derive_meta(title, "<p>body</p>"),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        repo.insert(sample("Hello", "hello")).await.unwrap();

        let found = repo.find_by_slug("hello").await.unwrap();
        assert_eq!(found.unwrap().title, "Hello");
        assert!(repo.find_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_violates_constraint() {
        let repo = InMemoryPostRepository::new();
        repo.insert(sample("One", "same-slug")).await.unwrap();

        let err = repo.insert(sample("Two", "same-slug")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.insert(sample("Alpha News", "alpha-news")).await.unwrap();
        repo.insert(sample("Beta News", "beta-news")).await.unwrap();

        let matches = repo.search_by_slug("NEWS").await.unwrap();
        let slugs: Vec<_> = matches.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["beta-news", "alpha-news"]);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let changes = PostChanges {
            title: None,
            content: None,
            slug: None,
            meta_title: None,
            meta_description: None,
            updated_at: Utc::now(),
        };

        let err = repo.update("ghost", changes).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_post_was_removed() {
        let repo = InMemoryPostRepository::new();
        repo.insert(sample("Gone Soon", "gone-soon")).await.unwrap();

        assert!(repo.delete_by_slug("gone-soon").await.unwrap());
        assert!(!repo.delete_by_slug("gone-soon").await.unwrap());
    }
}
