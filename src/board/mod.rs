//! Boards, their fixed column catalogs, and shared templates.
//!
//! A board's column set is fixed when the board is created, either from the
//! default layout of its colour theme or by copying a template. Tasks refer
//! to columns by [`domain::ColumnId`], and the reordering engine consults the
//! catalog through the [`crate::task::ports::ColumnCatalog`] port implemented
//! in [`adapters`].
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
