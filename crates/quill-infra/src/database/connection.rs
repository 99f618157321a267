//! Database connection management.

#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};
#[cfg(feature = "postgres")]
use tokio::sync::OnceCell;

#[cfg(feature = "postgres")]
use quill_core::error::RepoError;

/// Configuration for the backing database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Process-wide handle to the pooled database connection.
///
/// The pool is established lazily on first use. `get_or_try_init` keeps at
/// most one connection attempt in flight; concurrent callers await that
/// same attempt, and a failed attempt leaves the cell empty so the next
/// request retries instead of caching the failure.
#[cfg(feature = "postgres")]
pub struct DatabaseHandle {
    config: DatabaseConfig,
    conn: OnceCell<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseHandle {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            conn: OnceCell::new(),
        }
    }

    /// Wrap an already-established connection. Tests use this to inject a
    /// mock database.
    pub fn from_conn(conn: DbConn) -> Self {
        Self {
            config: DatabaseConfig {
                url: String::new(),
                max_connections: 1,
                min_connections: 1,
            },
            conn: OnceCell::new_with(Some(conn)),
        }
    }

    /// Get the pooled connection, establishing it on first use.
    pub async fn conn(&self) -> Result<&DbConn, RepoError> {
        self.conn
            .get_or_try_init(|| async {
                let opts = ConnectOptions::new(&self.config.url)
                    .max_connections(self.config.max_connections)
                    .min_connections(self.config.min_connections)
                    .connect_timeout(Duration::from_secs(10))
                    .idle_timeout(Duration::from_secs(300))
                    .sqlx_logging(false)
                    .to_owned();

                let conn = Database::connect(opts).await?;
                tracing::info!(
                    pool = self.config.max_connections,
                    "Database connection established"
                );
                Ok::<_, DbErr>(conn)
            })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
