//! Kanban tasks and their per-column ordering.
//!
//! Every task sits in exactly one column of one board and carries a
//! zero-based `position` within its `(owner, board, column)` partition. The
//! module keeps those positions unique and gap-free across creation, moves
//! and batch reorders:
//!
//! - Domain types and the pure reindexing rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]; each adapter applies a move as
//!   one atomic unit
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
