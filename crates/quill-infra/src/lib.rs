//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the document-store repositories and the JWT token
//! service backing the authorization gate.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repository via SeaORM
//!
//! Without `postgres` the in-memory repository is the only store, which is
//! also the runtime fallback when `DATABASE_URL` is unset.

pub mod auth;
pub mod database;

pub use auth::{JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseHandle, PostgresPostRepository};
