//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A position below zero was requested.
    #[error("invalid position {0}, expected a non-negative integer")]
    NegativePosition(i64),

    /// A position beyond the persisted range was requested.
    #[error("position {0} exceeds the supported range")]
    PositionOutOfRange(i64),

    /// The task identifier is not a UUID.
    #[error("invalid task identifier '{0}'")]
    InvalidTaskId(String),
}
