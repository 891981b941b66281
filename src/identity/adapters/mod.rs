//! Adapter implementations for the identity port.

mod static_token;

pub use static_token::StaticTokenVerifier;
