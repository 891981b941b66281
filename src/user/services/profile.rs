//! Service layer for profile registration and edits.

use crate::user::{
    domain::{EmailAddress, UserDomainError, UserId, UserProfile},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProfileRequest {
    email: String,
    name: Option<String>,
    avatar: Option<String>,
}

impl CreateProfileRequest {
    /// Creates a request with the required email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            avatar: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Partial profile update. Blank values leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement avatar URL.
    pub avatar: Option<String>,
}

/// Service-level errors for profile operations.
#[derive(Debug, Error)]
pub enum UserProfileError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// A profile already exists for the subject.
    #[error("user already exists: {}", .0.id())]
    AlreadyExists(Box<UserProfile>),
    /// No profile exists for the subject.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for profile service operations.
pub type UserProfileResult<T> = Result<T, UserProfileError>;

/// Profile orchestration service.
pub struct UserProfileService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for UserProfileService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> UserProfileService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new profile service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a profile for an authenticated subject.
    ///
    /// # Errors
    ///
    /// Returns [`UserProfileError::AlreadyExists`] carrying the stored
    /// profile when the subject is already registered, or
    /// [`UserProfileError::Domain`] when the email is malformed.
    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateProfileRequest,
    ) -> UserProfileResult<UserProfile> {
        let email = EmailAddress::new(request.email)?;
        if let Some(existing) = self.repository.find_by_id(user_id).await? {
            return Err(UserProfileError::AlreadyExists(Box::new(existing)));
        }

        let profile = UserProfile::new(
            user_id.clone(),
            email,
            request.name,
            request.avatar,
            &*self.clock,
        );
        match self.repository.store(&profile).await {
            Ok(()) => Ok(profile),
            Err(UserRepositoryError::DuplicateUser(_)) => {
                let existing = self.require(user_id).await?;
                Err(UserProfileError::AlreadyExists(Box::new(existing)))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Applies the non-blank fields of `request` to the subject's profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserProfileError::NotFound`] when the subject has no profile.
    pub async fn update(
        &self,
        user_id: &UserId,
        request: UpdateProfileRequest,
    ) -> UserProfileResult<UserProfile> {
        let mut profile = self.require(user_id).await?;
        if let Some(name) = request.name.as_deref() {
            profile.rename(name);
        }
        if let Some(avatar) = request.avatar.as_deref() {
            profile.change_avatar(avatar);
        }
        self.repository.update(&profile).await?;
        Ok(profile)
    }

    /// Returns the subject's profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserProfileError::NotFound`] when the subject has no profile.
    pub async fn info(&self, user_id: &UserId) -> UserProfileResult<UserProfile> {
        self.require(user_id).await
    }

    async fn require(&self, user_id: &UserId) -> UserProfileResult<UserProfile> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserProfileError::NotFound(user_id.clone()))
    }
}
