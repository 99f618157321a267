//! Post services - the orchestration layer over the repository port.
//!
//! [`PostLifecycle`] owns the write path and makes the slug/metadata
//! invariants hold on every create/update/delete. [`PostResolver`] owns
//! the read path: list queries and the single-or-search lookup.

mod lifecycle;
mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use lifecycle::{PostLifecycle, PostPatch};
pub use resolver::{Lookup, PostResolver};
