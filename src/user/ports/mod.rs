//! Port contracts for user profiles.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
