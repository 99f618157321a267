//! Document-store implementations of the post repository port.

mod connection;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres;

pub use connection::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use connection::DatabaseHandle;
#[cfg(feature = "postgres")]
pub use postgres::PostgresPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
