//! Fixed token table verifier.

use crate::identity::{AuthError, IdentityVerifier};
use crate::user::domain::{UserDomainError, UserId};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Verifier backed by a configured `token -> subject` table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    subjects: HashMap<String, UserId>,
    expired: HashSet<String>,
}

impl StaticTokenVerifier {
    /// Creates a verifier from `(token, subject)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUserId`] when a subject is blank.
    pub fn new<I, T, S>(entries: I) -> Result<Self, UserDomainError>
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<String>,
        S: Into<String>,
    {
        let subjects = entries
            .into_iter()
            .map(|(token, subject)| Ok((token.into(), UserId::new(subject)?)))
            .collect::<Result<HashMap<_, _>, UserDomainError>>()?;
        Ok(Self {
            subjects,
            expired: HashSet::new(),
        })
    }

    /// Marks tokens that must be reported as expired.
    #[must_use]
    pub fn with_expired<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.expired.extend(tokens.into_iter().map(Into::into));
        self
    }
}

fn is_token_shaped(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '='))
}

#[async_trait]
impl IdentityVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        if !is_token_shaped(token) {
            return Err(AuthError::Malformed);
        }
        if self.expired.contains(token) {
            return Err(AuthError::Expired);
        }
        self.subjects
            .get(token)
            .cloned()
            .ok_or_else(|| AuthError::Invalid("unknown token".to_owned()))
    }
}
