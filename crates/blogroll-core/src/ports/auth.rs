//! Authentication and authorization ports.

use uuid::Uuid;

/// Claims carried by a verified token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub username: String,
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Sign a token for a user.
    fn generate_token(&self, user_id: Uuid, username: &str) -> Result<String, AuthError>;

    /// Check the signature and expiry of a token and decode its claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token missing")]
    MissingToken,

    #[error("token invalid: {0}")]
    InvalidToken(String),

    #[error("token does not correspond to the post creator")]
    Forbidden,

    #[error("token signing failed: {0}")]
    Signing(String),
}
