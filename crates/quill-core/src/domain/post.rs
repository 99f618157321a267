use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::seo::SeoMeta;

/// Post entity - a blog post with its derived SEO fields.
///
/// `slug` is the external identifier: unique, lowercase, derived from
/// `title`. `meta_title` and `meta_description` are always consistent with
/// the latest `title`/`content`; they are never edited independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub meta_title: String,
    pub meta_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a resolved slug and derived metadata.
    pub fn new(title: String, content: String, slug: String, meta: SeoMeta) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            slug,
            meta_title: meta.meta_title,
            meta_description: meta.meta_description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Projection used by list views and slug search results.
/// Content and metadata are intentionally omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
