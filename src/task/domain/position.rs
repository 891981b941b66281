//! Ordinal positions within a column.

use super::TaskDomainError;
use crate::board::domain::ColumnId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based rank of a task within its column. Lower is earlier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(u32);

impl Position {
    /// Top of a column.
    pub const FIRST: Self = Self(0);

    /// Largest position representable in the `PostgreSQL` schema (`INTEGER`).
    const MAX_PERSISTED_VALUE: u32 = i32::MAX.unsigned_abs();

    /// Creates a position from an unsigned rank.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PositionOutOfRange`] above `i32::MAX`.
    pub fn new(value: u32) -> Result<Self, TaskDomainError> {
        if value > Self::MAX_PERSISTED_VALUE {
            return Err(TaskDomainError::PositionOutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Returns the position just after a column holding `len` tasks.
    #[must_use]
    pub fn after_len(len: usize) -> Self {
        u32::try_from(len)
            .ok()
            .filter(|value| *value <= Self::MAX_PERSISTED_VALUE)
            .map_or(Self(Self::MAX_PERSISTED_VALUE), Self)
    }

    /// Returns the underlying rank.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the next rank down the column.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 >= Self::MAX_PERSISTED_VALUE {
            return self;
        }
        Self(self.0 + 1)
    }

    /// Returns the previous rank, saturating at [`Position::FIRST`].
    #[must_use]
    pub const fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl TryFrom<i64> for Position {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(TaskDomainError::NegativePosition(value));
        }
        let rank = u32::try_from(value).map_err(|_| TaskDomainError::PositionOutOfRange(value))?;
        Self::new(rank)
    }
}

impl From<Position> for i32 {
    fn from(position: Position) -> Self {
        // `Position` never exceeds `i32::MAX`.
        Self::try_from(position.0).unwrap_or(Self::MAX)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A column together with a rank inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnSlot {
    /// Column identifier.
    pub column_id: ColumnId,
    /// Rank within the column.
    pub position: Position,
}

impl ColumnSlot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(column_id: ColumnId, position: Position) -> Self {
        Self {
            column_id,
            position,
        }
    }
}
