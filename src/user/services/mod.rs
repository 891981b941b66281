//! Application services for user profiles.

mod profile;

pub use profile::{
    CreateProfileRequest, UpdateProfileRequest, UserProfileError, UserProfileResult,
    UserProfileService,
};
