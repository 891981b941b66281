//! Adapter implementations for user profile ports.

pub mod memory;
pub mod postgres;
