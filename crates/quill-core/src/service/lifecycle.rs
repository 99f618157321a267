use std::sync::Arc;

use chrono::Utc;

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::{PostChanges, PostRepository};
use crate::seo::{derive_meta, slugify};

/// Upper bound on the slug collision probe. Past this the title is
/// pathological and the caller gets a conflict instead of a longer loop.
const MAX_SLUG_ATTEMPTS: usize = 1000;

/// Partial update accepted by [`PostLifecycle::update`]. Absent fields
/// keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Write-path orchestrator for posts.
///
/// Create derives the slug from the title and auto-suffixes on collision;
/// update recomputes the slug on a title change but treats a collision as
/// a user-visible conflict; both recompute SEO metadata from the final
/// title/content so the derived fields never lag their sources.
#[derive(Clone)]
pub struct PostLifecycle {
    repo: Arc<dyn PostRepository>,
}

impl PostLifecycle {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a post from a title and HTML content.
    pub async fn create(&self, title: &str, content: &str) -> Result<Post, DomainError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(DomainError::Validation(
                "Title and content are required".to_string(),
            ));
        }

        let base = slugify(title);
        if base.is_empty() {
            return Err(DomainError::Validation(
                "Title must contain at least one URL-safe character".to_string(),
            ));
        }

        let slug = self.resolve_unique_slug(&base).await?;
        // Metadata comes from the original title, not the suffixed slug.
        let meta = derive_meta(title, content);
        let post = Post::new(title.to_string(), content.to_string(), slug, meta);

        // Two concurrent creates can both pass the probe; the store's
        // unique constraint is the safety net and surfaces as a conflict.
        match self.repo.insert(post).await {
            Ok(stored) => Ok(stored),
            Err(RepoError::Constraint(msg)) => Err(DomainError::Conflict(msg)),
            Err(e) => Err(e.into()),
        }
    }

    /// Probe the store for a free slug: `base`, then `base-1`, `base-2`, …
    async fn resolve_unique_slug(&self, base: &str) -> Result<String, DomainError> {
        let mut candidate = base.to_string();
        for n in 1..=MAX_SLUG_ATTEMPTS {
            if self.repo.find_by_slug(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            candidate = format!("{base}-{n}");
        }
        Err(DomainError::Conflict(format!(
            "Could not find a free slug for '{base}' within {MAX_SLUG_ATTEMPTS} attempts"
        )))
    }

    /// Apply a partial update to the post at `current_slug`.
    ///
    /// The slug changes only when a provided title slugifies to something
    /// new, and unlike create, a colliding rename is an error rather than
    /// silently suffixed. An empty patch still advances `updated_at`.
    pub async fn update(&self, current_slug: &str, patch: PostPatch) -> Result<Post, DomainError> {
        let existing = self
            .repo
            .find_by_slug(current_slug)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("No post with slug '{current_slug}'")))?;

        if patch.title.as_ref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DomainError::Validation("Title cannot be empty".to_string()));
        }
        if patch.content.as_ref().is_some_and(|c| c.trim().is_empty()) {
            return Err(DomainError::Validation(
                "Content cannot be empty".to_string(),
            ));
        }

        let mut changes = PostChanges {
            title: patch.title.clone(),
            content: patch.content.clone(),
            slug: None,
            meta_title: None,
            meta_description: None,
            updated_at: Utc::now(),
        };

        if let Some(title) = &patch.title {
            let new_slug = slugify(title);
            if new_slug.is_empty() {
                return Err(DomainError::Validation(
                    "Title must contain at least one URL-safe character".to_string(),
                ));
            }
            if new_slug != current_slug {
                if self.repo.find_by_slug(&new_slug).await?.is_some() {
                    return Err(DomainError::Conflict(format!(
                        "A post with slug '{new_slug}' already exists"
                    )));
                }
                changes.slug = Some(new_slug);
            }
        }

        // Metadata must reflect the final state, never a stale mix of old
        // and new fields.
        if patch.title.is_some() || patch.content.is_some() {
            let effective_title = patch.title.as_deref().unwrap_or(&existing.title);
            let effective_content = patch.content.as_deref().unwrap_or(&existing.content);
            let meta = derive_meta(effective_title, effective_content);
            changes.meta_title = Some(meta.meta_title);
            changes.meta_description = Some(meta.meta_description);
        }

        match self.repo.update(current_slug, changes).await {
            Ok(post) => Ok(post),
            Err(RepoError::NotFound) => Err(DomainError::NotFound(format!(
                "No post with slug '{current_slug}'"
            ))),
            Err(RepoError::Constraint(msg)) => Err(DomainError::Conflict(msg)),
            Err(e) => Err(e.into()),
        }
    }

    /// Permanently remove the post at `slug`. No soft-delete state exists.
    pub async fn delete(&self, slug: &str) -> Result<(), DomainError> {
        if self.repo.delete_by_slug(slug).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("No post with slug '{slug}'")))
        }
    }
}
