//! Bearer-token identity verification.
//!
//! Token issuance and cryptographic verification belong to an external
//! identity provider. This module only defines the port the HTTP layer calls
//! to turn a bearer token into a [`UserId`](crate::user::domain::UserId), plus
//! a static token table adapter for development and tests.

pub mod adapters;
mod error;
mod ports;

pub use error::AuthError;
pub use ports::IdentityVerifier;
