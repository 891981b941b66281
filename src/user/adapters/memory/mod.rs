//! In-memory adapters for user profiles.

mod user;

pub use user::InMemoryUserRepository;
