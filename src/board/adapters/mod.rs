//! Adapter implementations for board ports.
//!
//! Besides the repositories, every [`BoardRepository`](crate::board::ports::BoardRepository)
//! doubles as the task context's column catalog.

mod column_catalog;
pub mod memory;
pub mod postgres;
