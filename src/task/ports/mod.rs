//! Port contracts for task persistence and column lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod catalog;
pub mod repository;

pub use catalog::{ColumnCatalog, ColumnCatalogError};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use catalog::MockColumnCatalog;
#[cfg(test)]
pub use repository::MockTaskRepository;
