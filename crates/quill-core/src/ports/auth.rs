//! Authorization gate port.
//!
//! The lifecycle core never checks identity itself; the HTTP layer runs
//! this gate before any create/update/delete reaches the services. Reads
//! are always open.

use uuid::Uuid;

/// Claims carried by a validated editor token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: Uuid,
    pub name: String,
    pub exp: i64,
}

/// Token service trait - issues and validates editor tokens.
pub trait TokenService: Send + Sync {
    /// Generate a token for an editor.
    fn generate_token(&self, subject: Uuid, name: &str) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
