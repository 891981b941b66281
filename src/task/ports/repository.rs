//! Repository port for task persistence and position maintenance.

use crate::board::domain::BoardId;
use crate::task::domain::{ColumnPartition, Position, Task, TaskId, TaskMove};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every lookup and mutation is scoped by the owning user: a task owned by
/// someone else behaves exactly like a missing task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task at the top of its column, shifting the rest of the
    /// column down by one in the same atomic unit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier
    /// already exists.
    async fn insert_prepended(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists the descriptive attributes of an existing task. Column and
    /// position are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// for its owner.
    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task owned by `owner`.
    async fn find_owned(&self, id: TaskId, owner: &UserId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the owner's tasks on a board, ascending by position.
    async fn list_by_board(
        &self,
        owner: &UserId,
        board_id: BoardId,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of one partition, ascending by position.
    async fn list_by_column(&self, partition: &ColumnPartition) -> TaskRepositoryResult<Vec<Task>>;

    /// Applies a move atomically: shifts the destination column, optionally
    /// closes the vacated slot, and places the task.
    ///
    /// Returns `None`, without writing anything, when the task does not exist
    /// for the move's owner.
    async fn relocate(&self, task_move: &TaskMove) -> TaskRepositoryResult<Option<Task>>;

    /// Overwrites the position of one task without shifting any other task.
    ///
    /// Returns `None` when the task does not exist for `owner`.
    async fn assign_position(
        &self,
        id: TaskId,
        owner: &UserId,
        position: Position,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task owned by `owner`, optionally closing its slot.
    ///
    /// Returns `false` when nothing was deleted.
    async fn delete(
        &self,
        id: TaskId,
        owner: &UserId,
        close_slot: bool,
    ) -> TaskRepositoryResult<bool>;

    /// Deletes every task of a board, whoever owns it. Returns the count.
    async fn delete_by_board(&self, board_id: BoardId) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
