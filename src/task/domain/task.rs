//! Task aggregate root and its descriptive payload.

use super::{ColumnSlot, Position, TaskDomainError, TaskId};
use crate::board::domain::{BoardId, ColumnId};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive attributes carried by a task.
///
/// Reindexing never inspects these; they travel with the task unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    /// Short title shown on the card.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Priority label chosen by the client (for example `high`).
    pub priority: String,
    /// Category label chosen by the client.
    #[serde(rename = "type")]
    pub kind: String,
    /// Due date, if any.
    pub time: Option<DateTime<Utc>>,
    /// Optional status label.
    pub status: Option<String>,
}

impl TaskDetails {
    /// Creates details with a validated title and empty labels.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: raw,
            description: String::new(),
            priority: String::new(),
            kind: String::new(),
            time: None,
            status: None,
        })
    }
}

/// Partial update of [`TaskDetails`]. Empty strings leave a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority label.
    pub priority: Option<String>,
    /// Replacement category label.
    pub kind: Option<String>,
    /// Replacement due date.
    pub time: Option<DateTime<Utc>>,
}

fn patch_text(field: &mut String, value: Option<&str>) {
    if let Some(text) = value.filter(|text| !text.is_empty()) {
        text.clone_into(field);
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    board_id: BoardId,
    column_id: ColumnId,
    position: Position,
    #[serde(rename = "userId")]
    owner: UserId,
    #[serde(flatten)]
    details: TaskDetails,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning board.
    pub board_id: BoardId,
    /// Current column.
    pub column_id: ColumnId,
    /// Current rank within the column.
    pub position: Position,
    /// Owning user.
    pub owner: UserId,
    /// Descriptive attributes.
    pub details: TaskDetails,
}

impl Task {
    /// Creates a task at the top of `column_id`.
    #[must_use]
    pub fn new(
        owner: UserId,
        board_id: BoardId,
        column_id: ColumnId,
        details: TaskDetails,
    ) -> Self {
        Self {
            id: TaskId::new(),
            board_id,
            column_id,
            position: Position::FIRST,
            owner,
            details,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            board_id: data.board_id,
            column_id: data.column_id,
            position: data.position,
            owner: data.owner,
            details: data.details,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning board.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the current column.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Returns the rank within the current column.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the descriptive attributes.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the current column and rank.
    #[must_use]
    pub fn slot(&self) -> ColumnSlot {
        ColumnSlot::new(self.column_id.clone(), self.position)
    }

    /// Returns `true` when the task is owned by `user`.
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    /// Moves the task to `slot` without touching any other task.
    pub fn place(&mut self, slot: ColumnSlot) {
        self.column_id = slot.column_id;
        self.position = slot.position;
    }

    /// Changes the rank within the current column.
    pub const fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Applies the non-empty fields of `patch`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patched title is
    /// whitespace only.
    pub fn apply_patch(&mut self, patch: &TaskPatch) -> Result<(), TaskDomainError> {
        if let Some(title) = patch.title.as_deref().filter(|text| !text.is_empty()) {
            if title.trim().is_empty() {
                return Err(TaskDomainError::EmptyTitle);
            }
            title.clone_into(&mut self.details.title);
        }
        patch_text(&mut self.details.description, patch.description.as_deref());
        patch_text(&mut self.details.priority, patch.priority.as_deref());
        patch_text(&mut self.details.kind, patch.kind.as_deref());
        if patch.time.is_some() {
            self.details.time = patch.time;
        }
        Ok(())
    }
}
