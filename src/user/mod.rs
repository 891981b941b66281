//! User profiles keyed by identity-provider subject.
//!
//! Authentication happens elsewhere: every request reaching this module
//! already carries a verified [`domain::UserId`]. The module stores the
//! profile attached to that subject (email, display name, avatar) and exposes
//! the [`domain::UserId`] type that every other context uses as its ownership
//! key.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
