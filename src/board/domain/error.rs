//! Error types for board validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board name is empty after trimming.
    #[error("board name must not be empty")]
    EmptyBoardName,

    /// The column identifier is empty after trimming.
    #[error("column identifier must not be empty")]
    EmptyColumnId,

    /// The board identifier is not a UUID.
    #[error("invalid board identifier '{0}'")]
    InvalidBoardId(String),
}

/// Error returned while parsing colour themes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown colour theme: {0}")]
pub struct ParseColorThemeError(pub String);
