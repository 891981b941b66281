//! Authentication failures.

use thiserror::Error;

/// Reasons a request could not be authenticated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was supplied.
    #[error("no bearer token supplied")]
    MissingToken,
    /// The token was valid once but has expired.
    #[error("token has expired")]
    Expired,
    /// The token is not shaped like a token at all.
    #[error("malformed token")]
    Malformed,
    /// The token was rejected for another reason.
    #[error("invalid token: {0}")]
    Invalid(String),
}
