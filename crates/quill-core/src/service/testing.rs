//! Test double for the repository port: a slug-keyed in-memory store with
//! the same uniqueness and ordering semantics the real store provides.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Post, PostSummary};
use crate::error::RepoError;
use crate::ports::{PostChanges, PostRepository};

pub struct MemoryStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn search_by_slug(&self, fragment: &str) -> Result<Vec<Post>, RepoError> {
        let needle = fragment.to_lowercase();
        let posts = self.posts.lock().unwrap();
        let mut matches: Vec<Post> = posts
            .iter()
            .filter(|p| p.slug.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn list(&self, keyword: Option<&str>) -> Result<Vec<PostSummary>, RepoError> {
        let posts = self.posts.lock().unwrap();
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
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::Constraint(format!(
                "duplicate slug '{}'",
                post.slug
            )));
        }
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, slug: &str, changes: PostChanges) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();

        if let Some(new_slug) = &changes.slug {
            if posts.iter().any(|p| p.slug == *new_slug && p.slug != slug) {
                return Err(RepoError::Constraint(format!("duplicate slug '{new_slug}'")));
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
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.slug != slug);
        Ok(posts.len() < before)
    }
}
