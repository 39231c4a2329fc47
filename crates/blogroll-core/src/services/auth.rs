//! Bearer credential verification.

use std::sync::Arc;

use crate::domain::Identity;
use crate::ports::{AuthError, TokenService};

const BEARER_PREFIX: &str = "bearer ";

/// Extract `<token>` from an `Authorization: Bearer <token>` value.
///
/// The scheme keyword is matched case-insensitively. Anything else, including
/// an empty token, yields `None`.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let header = header?;
    let scheme = header.get(..BEARER_PREFIX.len())?;
    if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }

    let token = &header[BEARER_PREFIX.len()..];
    (!token.is_empty()).then_some(token)
}

/// Verifies bearer tokens against the injected token service.
#[derive(Clone)]
pub struct TokenAuthorizer {
    tokens: Arc<dyn TokenService>,
}

impl TokenAuthorizer {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }

    /// Verify an already extracted token. `None` means no credential was sent.
    pub fn verify(&self, token: Option<&str>) -> Result<Identity, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.validate_token(token)?;
        Ok(Identity::from(claims))
    }

    /// Verify the raw value of an `Authorization` header.
    pub fn verify_header(&self, header: Option<&str>) -> Result<Identity, AuthError> {
        self.verify(bearer_token(header))
    }

    /// Like [`verify_header`](Self::verify_header), but an absent credential is
    /// `Ok(None)` instead of an error.
    pub fn verify_optional(&self, header: Option<&str>) -> Result<Option<Identity>, AuthError> {
        match self.verify_header(header) {
            Ok(identity) => Ok(Some(identity)),
            Err(AuthError::MissingToken) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
