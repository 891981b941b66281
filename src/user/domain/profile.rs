//! User profile aggregate.

use super::{EmailAddress, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Avatar assigned when a profile is created without one.
pub const DEFAULT_AVATAR_URL: &str = concat!(
    "https://api.dicebear.com/7.x/avataaars/svg?seed=neutral&backgroundColor=ffdfbf",
    "&skinColor=fdbcb4&hairColor=724133&clothingColor=262e33&topType=shortHairShortFlat",
    "&clothingType=shirt&eyeType=default&mouthType=default&facialHairType=blank",
);

/// Profile stored for an authenticated identity subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "firebaseUid")]
    id: UserId,
    email: EmailAddress,
    name: String,
    avatar: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Identity subject.
    pub id: UserId,
    /// Contact email.
    pub email: EmailAddress,
    /// Display name, possibly empty.
    pub name: String,
    /// Avatar URL.
    pub avatar: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a profile for a freshly registered subject.
    ///
    /// A missing or blank avatar falls back to [`DEFAULT_AVATAR_URL`].
    #[must_use]
    pub fn new(
        id: UserId,
        email: EmailAddress,
        name: Option<String>,
        avatar: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        let avatar = avatar
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_owned());
        Self {
            id,
            email,
            name: name.unwrap_or_default(),
            avatar,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a profile from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            name: data.name,
            avatar: data.avatar,
            created_at: data.created_at,
        }
    }

    /// Returns the identity subject.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the contact email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar URL.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the display name unless the new value is blank.
    pub fn rename(&mut self, name: &str) {
        if !name.trim().is_empty() {
            name.clone_into(&mut self.name);
        }
    }

    /// Replaces the avatar unless the new value is blank.
    pub fn change_avatar(&mut self, avatar: &str) {
        if !avatar.trim().is_empty() {
            avatar.clone_into(&mut self.avatar);
        }
    }
}
