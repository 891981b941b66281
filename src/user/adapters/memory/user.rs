//! In-memory repository for user profiles.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{UserId, UserProfile},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, profile: &UserProfile) -> UserRepositoryResult<()> {
        let mut profiles = self.profiles.write().map_err(poisoned)?;
        if profiles.contains_key(profile.id()) {
            return Err(UserRepositoryError::DuplicateUser(profile.id().clone()));
        }
        profiles.insert(profile.id().clone(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> UserRepositoryResult<()> {
        let mut profiles = self.profiles.write().map_err(poisoned)?;
        let slot = profiles
            .get_mut(profile.id())
            .ok_or_else(|| UserRepositoryError::NotFound(profile.id().clone()))?;
        *slot = profile.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> UserRepositoryResult<Option<UserProfile>> {
        let profiles = self.profiles.read().map_err(poisoned)?;
        Ok(profiles.get(id).cloned())
    }
}
