//! Service layer for task creation, edits and removal.

use crate::board::domain::{BoardDomainError, BoardId, ColumnId};
use crate::task::{
    domain::{PositionPolicy, Task, TaskDetails, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    board_id: BoardId,
    column_id: String,
    title: String,
    description: Option<String>,
    priority: Option<String>,
    kind: Option<String>,
    time: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required placement and title.
    #[must_use]
    pub fn new(board_id: BoardId, column_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            board_id,
            column_id: column_id.into(),
            title: title.into(),
            description: None,
            priority: None,
            kind: None,
            time: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Column identifier validation failed.
    #[error(transparent)]
    Column(#[from] BoardDomainError),
    /// The task does not exist for the caller.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
    policy: PositionPolicy,
}

impl<R> Clone for TaskLifecycleService<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            policy: self.policy,
        }
    }
}

impl<R> TaskLifecycleService<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, policy: PositionPolicy) -> Self {
        Self { repository, policy }
    }

    /// Creates a task for `owner` at the top of its column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the title or column is blank, or
    /// the repository rejects persistence.
    pub async fn create(
        &self,
        owner: &UserId,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let column_id = ColumnId::new(request.column_id)?;
        let mut details = TaskDetails::new(request.title)?;
        details.description = request.description.unwrap_or_default();
        details.priority = request.priority.unwrap_or_default();
        details.kind = request.kind.unwrap_or_default();
        details.time = request.time;

        let task = Task::new(owner.clone(), request.board_id, column_id, details);
        self.repository.insert_prepended(&task).await?;
        debug!(task_id = %task.id(), board_id = %task.board_id(), "task created");
        Ok(task)
    }

    /// Returns the caller's tasks on a board, ascending by position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_board(
        &self,
        owner: &UserId,
        board_id: BoardId,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_by_board(owner, board_id).await?)
    }

    /// Returns the caller's tasks on a board whose title starts with
    /// `prefix`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn search_titles(
        &self,
        owner: &UserId,
        board_id: BoardId,
        prefix: &str,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let needle = prefix.to_lowercase();
        let mut tasks = self.repository.list_by_board(owner, board_id).await?;
        tasks.retain(|task| task.details().title.to_lowercase().starts_with(&needle));
        Ok(tasks)
    }

    /// Finds one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for `owner`.
    pub async fn find(&self, owner: &UserId, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_owned(id, owner)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Patches the descriptive attributes of a task. Placement is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for `owner`, or [`TaskLifecycleError::Domain`] when the patched title
    /// is blank.
    pub async fn update_details(
        &self,
        owner: &UserId,
        id: TaskId,
        patch: &TaskPatch,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find(owner, id).await?;
        task.apply_patch(patch)?;
        self.repository.update_details(&task).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(missing) => TaskLifecycleError::NotFound(missing),
            other => TaskLifecycleError::Repository(other),
        })?;
        Ok(task)
    }

    /// Deletes one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when nothing was deleted.
    pub async fn delete(&self, owner: &UserId, id: TaskId) -> TaskLifecycleResult<()> {
        let deleted = self
            .repository
            .delete(id, owner, self.policy.compact_vacated)
            .await?;
        if !deleted {
            return Err(TaskLifecycleError::NotFound(id));
        }
        debug!(task_id = %id, "task deleted");
        Ok(())
    }
}
