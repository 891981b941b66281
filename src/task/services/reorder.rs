//! Position reindexing engine: single-task moves and batch reorders.
//!
//! The service validates requests and delegates every write to the
//! repository, which applies each move as one atomic unit. Batch reorders are
//! point updates in list order and are not atomic across the batch.

use crate::board::domain::{BoardDomainError, BoardId, ColumnId};
use crate::task::{
    domain::{
        ColumnPartition, ColumnSlot, Position, PositionPolicy, Task, TaskDomainError, TaskId,
        TaskMove,
    },
    ports::{ColumnCatalog, ColumnCatalogError, TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Destination requested for a single-task move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    column_id: String,
    position: i64,
    board_id: Option<BoardId>,
}

impl MoveTaskRequest {
    /// Creates a request targeting `position` in `column_id`.
    #[must_use]
    pub fn new(column_id: impl Into<String>, position: i64) -> Self {
        Self {
            column_id: column_id.into(),
            position,
            board_id: None,
        }
    }

    /// Names the board the caller believes the task lives on.
    #[must_use]
    pub const fn on_board(mut self, board_id: BoardId) -> Self {
        self.board_id = Some(board_id);
        self
    }
}

/// One entry of a batch reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionUpdate {
    /// Task to reposition.
    pub task_id: TaskId,
    /// Requested rank, validated before any write.
    pub position: i64,
}

impl PositionUpdate {
    /// Creates a batch entry.
    #[must_use]
    pub const fn new(task_id: TaskId, position: i64) -> Self {
        Self { task_id, position }
    }
}

/// Service-level errors for reindexing operations.
#[derive(Debug, Error)]
pub enum ReorderError {
    /// Position validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Column identifier validation failed.
    #[error(transparent)]
    Column(#[from] BoardDomainError),
    /// The task does not exist for the caller.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The request names a board other than the task's.
    #[error("task {task_id} belongs to board {actual}, not {requested}")]
    BoardMismatch {
        /// Task being moved.
        task_id: TaskId,
        /// Board the task lives on.
        actual: BoardId,
        /// Board named by the request.
        requested: BoardId,
    },
    /// The destination column is not part of the board.
    #[error("column '{column_id}' does not exist on board {board_id}")]
    UnknownColumn {
        /// Board the task lives on.
        board_id: BoardId,
        /// Requested column.
        column_id: ColumnId,
    },
    /// The column catalog could not be read.
    #[error(transparent)]
    Catalog(#[from] ColumnCatalogError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for reindexing operations.
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Orchestrates task moves against a repository and a column catalog.
pub struct ReorderService<R, K>
where
    R: TaskRepository + ?Sized,
    K: ColumnCatalog + ?Sized,
{
    repository: Arc<R>,
    catalog: Arc<K>,
    policy: PositionPolicy,
}

impl<R, K> Clone for ReorderService<R, K>
where
    R: TaskRepository + ?Sized,
    K: ColumnCatalog + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            catalog: Arc::clone(&self.catalog),
            policy: self.policy,
        }
    }
}

impl<R, K> ReorderService<R, K>
where
    R: TaskRepository + ?Sized,
    K: ColumnCatalog + ?Sized,
{
    /// Creates a new reindexing service.
    #[must_use]
    pub const fn new(repository: Arc<R>, catalog: Arc<K>, policy: PositionPolicy) -> Self {
        Self {
            repository,
            catalog,
            policy,
        }
    }

    /// Moves one of the caller's tasks to a column and rank.
    ///
    /// Tasks already at or below the requested rank in the destination
    /// column shift down by one. Moving a task onto its current slot writes
    /// nothing and returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ReorderError::Domain`] or [`ReorderError::Column`] for
    /// malformed input, [`ReorderError::BoardMismatch`] when the request
    /// names another board, [`ReorderError::UnknownColumn`] when column
    /// validation is enabled and the column is not on the board,
    /// [`ReorderError::NotFound`] when the task does not exist for `owner`,
    /// and [`ReorderError::Repository`] when the store fails.
    pub async fn move_task(
        &self,
        owner: &UserId,
        task_id: TaskId,
        request: MoveTaskRequest,
    ) -> ReorderResult<Task> {
        let task_move = self.plan_move(owner, task_id, request).await?;
        self.apply_move(&task_move).await
    }

    /// Validates a move without writing anything.
    ///
    /// The returned [`TaskMove`] is later handed to
    /// [`ReorderService::apply_move`]. A rejected plan has written nothing.
    ///
    /// # Errors
    ///
    /// Returns the same validation and lookup errors as
    /// [`ReorderService::move_task`].
    pub async fn plan_move(
        &self,
        owner: &UserId,
        task_id: TaskId,
        request: MoveTaskRequest,
    ) -> ReorderResult<TaskMove> {
        let column_id = ColumnId::new(request.column_id)?;
        let position = Position::try_from(request.position)?;

        let current = self
            .repository
            .find_owned(task_id, owner)
            .await?
            .ok_or(ReorderError::NotFound(task_id))?;
        if let Some(requested) = request
            .board_id
            .filter(|requested| *requested != current.board_id())
        {
            return Err(ReorderError::BoardMismatch {
                task_id,
                actual: current.board_id(),
                requested,
            });
        }
        if self.policy.validate_columns {
            self.ensure_column(owner, current.board_id(), &column_id)
                .await?;
        }

        Ok(TaskMove::new(
            task_id,
            owner.clone(),
            ColumnSlot::new(column_id, position),
            self.policy,
        ))
    }

    /// Applies a planned move as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns [`ReorderError::NotFound`] when the task disappeared after
    /// planning and [`ReorderError::Repository`] when the store fails.
    pub async fn apply_move(&self, task_move: &TaskMove) -> ReorderResult<Task> {
        let task_id = task_move.task_id();
        let moved = self
            .repository
            .relocate(task_move)
            .await?
            .ok_or(ReorderError::NotFound(task_id))?;
        debug!(
            task_id = %task_id,
            column_id = %moved.column_id(),
            position = %moved.position(),
            "task moved"
        );
        Ok(moved)
    }

    /// Assigns explicit positions to a list of tasks, in list order.
    ///
    /// No other task is shifted. Entries whose task does not exist for
    /// `owner` come back as `None`; the other entries are still applied.
    ///
    /// # Errors
    ///
    /// Returns [`ReorderError::Domain`] before any write when an entry holds
    /// an invalid position, and [`ReorderError::Repository`] when the store
    /// fails part-way (earlier entries stay applied).
    pub async fn reorder_batch(
        &self,
        owner: &UserId,
        updates: &[PositionUpdate],
    ) -> ReorderResult<Vec<Option<Task>>> {
        let validated = updates
            .iter()
            .map(|update| Ok((update.task_id, Position::try_from(update.position)?)))
            .collect::<Result<Vec<_>, TaskDomainError>>()?;

        let mut results = Vec::with_capacity(validated.len());
        for (task_id, position) in validated {
            let updated = self
                .repository
                .assign_position(task_id, owner, position)
                .await?;
            debug!(
                task_id = %task_id,
                position = %position,
                found = updated.is_some(),
                "task position assigned"
            );
            results.push(updated);
        }
        Ok(results)
    }

    /// Returns the caller's tasks in one column, ascending by position.
    ///
    /// # Errors
    ///
    /// Returns [`ReorderError::Column`] for a blank column identifier and
    /// [`ReorderError::Repository`] when the lookup fails.
    pub async fn list_by_column(
        &self,
        owner: &UserId,
        board_id: BoardId,
        column_id: &str,
    ) -> ReorderResult<Vec<Task>> {
        let partition = ColumnPartition::new(owner.clone(), board_id, ColumnId::new(column_id)?);
        Ok(self.repository.list_by_column(&partition).await?)
    }

    async fn ensure_column(
        &self,
        owner: &UserId,
        board_id: BoardId,
        column_id: &ColumnId,
    ) -> ReorderResult<()> {
        let known = self
            .catalog
            .column_ids(board_id, owner)
            .await?
            .is_some_and(|columns| columns.contains(column_id));
        if known {
            Ok(())
        } else {
            Err(ReorderError::UnknownColumn {
                board_id,
                column_id: column_id.clone(),
            })
        }
    }
}
