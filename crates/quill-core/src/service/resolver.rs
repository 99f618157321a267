use std::sync::Arc;

use crate::domain::{Post, PostSummary};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Result of a single-item lookup. An identifier that matches no exact
/// slug falls back to a substring search, so one endpoint yields two
/// shapes; callers branch on the variant instead of sniffing a payload.
#[derive(Debug)]
pub enum Lookup {
    /// Exact slug match.
    Single(Post),
    /// Substring matches against the slug field, newest first.
    Matches(Vec<PostSummary>),
}

/// Read-path service: list queries and single-or-search lookups.
#[derive(Clone)]
pub struct PostResolver {
    repo: Arc<dyn PostRepository>,
}

impl PostResolver {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Resolve an identifier against the slug field: exact match first,
    /// then case-insensitive substring search.
    pub async fn lookup(&self, identifier: &str) -> Result<Lookup, DomainError> {
        if let Some(post) = self.repo.find_by_slug(identifier).await? {
            return Ok(Lookup::Single(post));
        }

        let matches = self.repo.search_by_slug(identifier).await?;
        if matches.is_empty() {
            return Err(DomainError::NotFound(format!(
                "No post matches '{identifier}'"
            )));
        }

        Ok(Lookup::Matches(
            matches.iter().map(PostSummary::from).collect(),
        ))
    }

    /// List post summaries, newest first, optionally filtered by a
    /// case-insensitive keyword over title or content.
    pub async fn list(&self, keyword: Option<&str>) -> Result<Vec<PostSummary>, DomainError> {
        Ok(self.repo.list(keyword).await?)
    }
}
