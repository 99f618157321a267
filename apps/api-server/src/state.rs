//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_core::service::{PostLifecycle, PostResolver};
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::{DatabaseHandle, PostgresPostRepository};

/// Shared application state: the post services over the configured store.
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: PostLifecycle,
    pub resolver: PostResolver,
    /// Which backing store the services were wired to ("postgres" or "in-memory").
    pub store: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (repo, store): (Arc<dyn PostRepository>, &'static str) = match db_config {
            Some(config) => {
                tracing::info!("Database configured; connecting lazily on first use");
                let handle = Arc::new(DatabaseHandle::new(config.clone()));
                (Arc::new(PostgresPostRepository::new(handle)), "postgres")
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Arc::new(InMemoryPostRepository::new()), "in-memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repo, store): (Arc<dyn PostRepository>, &'static str) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Arc::new(InMemoryPostRepository::new()), "in-memory")
        };

        Self {
            lifecycle: PostLifecycle::new(repo.clone()),
            resolver: PostResolver::new(repo),
            store,
        }
    }

    /// State over an explicit repository, used by handler tests.
    #[cfg(test)]
    pub fn with_repo(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            lifecycle: PostLifecycle::new(repo.clone()),
            resolver: PostResolver::new(repo),
            store: "in-memory",
        }
    }
}
