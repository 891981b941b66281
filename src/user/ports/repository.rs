//! Repository port for profile persistence.

use crate::user::domain::{UserId, UserProfile};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// Profile persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when a profile already
    /// exists for the subject.
    async fn store(&self, profile: &UserProfile) -> UserRepositoryResult<()>;

    /// Persists changes to an existing profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no profile exists.
    async fn update(&self, profile: &UserProfile) -> UserRepositoryResult<()>;

    /// Finds the profile of a subject.
    async fn find_by_id(&self, id: &UserId) -> UserRepositoryResult<Option<UserProfile>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A profile for the subject already exists.
    #[error("duplicate user: {0}")]
    DuplicateUser(UserId),

    /// The profile was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
