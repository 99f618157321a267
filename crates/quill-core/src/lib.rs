//! # Quill Core
//!
//! The domain layer of the Quill blog content service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `Post` entity, slug and SEO metadata derivation, the repository port,
//! and the lifecycle/query services that keep the slug and metadata invariants.

pub mod domain;
pub mod error;
pub mod ports;
pub mod seo;
pub mod service;

pub use error::DomainError;
