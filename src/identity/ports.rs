//! Identity verification port.

use super::AuthError;
use crate::user::domain::UserId;
use async_trait::async_trait;

/// Verifies bearer tokens issued by the identity provider.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Returns the subject the token was issued to.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the token is expired, malformed or
    /// otherwise rejected.
    async fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
