//! Pure derivation functions: slug generation and SEO metadata.
//!
//! Nothing in this module performs I/O or fails. Invalid input degrades to
//! empty output, which callers treat as a validation problem.

mod meta;
mod slug;

pub use meta::{SeoMeta, derive_meta};
pub use slug::slugify;
