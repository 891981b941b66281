//! Domain model for user profiles.

mod error;
mod ids;
mod profile;

pub use error::UserDomainError;
pub use ids::{EmailAddress, UserId};
pub use profile::{DEFAULT_AVATAR_URL, PersistedUserData, UserProfile};
