//! Token service backing the authorization gate.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
