//! In-memory repository for tasks.
//!
//! A single lock guards the whole table, so every multi-task mutation
//! (prepend, relocate, compacting delete) is atomic.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::domain::BoardId;
use crate::task::{
    domain::{ColumnPartition, Position, Task, TaskId, TaskMove},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Collects tasks matching `filter`, ascending by position then identifier.
fn sorted_matching(tasks: &HashMap<TaskId, Task>, filter: impl Fn(&Task) -> bool) -> Vec<Task> {
    let mut matching: Vec<Task> = tasks.values().filter(|task| filter(task)).cloned().collect();
    matching.sort_by_key(|task| (task.position(), task.id()));
    matching
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert_prepended(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        ColumnPartition::of(task).open_slot(tasks.values_mut(), task.position());
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let stored = tasks
            .get_mut(&task.id())
            .filter(|stored| stored.is_owned_by(task.owner()))
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        let slot = stored.slot();
        let mut updated = task.clone();
        updated.place(slot);
        *stored = updated;
        Ok(())
    }

    async fn find_owned(&self, id: TaskId, owner: &UserId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.get(&id).filter(|task| task.is_owned_by(owner)).cloned())
    }

    async fn list_by_board(
        &self,
        owner: &UserId,
        board_id: BoardId,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(sorted_matching(&tasks, |task| {
            task.board_id() == board_id && task.is_owned_by(owner)
        }))
    }

    async fn list_by_column(&self, partition: &ColumnPartition) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(sorted_matching(&tasks, |task| partition.contains(task)))
    }

    async fn relocate(&self, task_move: &TaskMove) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let owned = tasks
            .get(&task_move.task_id())
            .is_some_and(|task| task.is_owned_by(task_move.owner()));
        if !owned {
            return Ok(None);
        }
        let Some(mut moved) = tasks.remove(&task_move.task_id()) else {
            return Ok(None);
        };
        task_move.apply(&mut moved, tasks.values_mut());
        tasks.insert(moved.id(), moved.clone());
        Ok(Some(moved))
    }

    async fn assign_position(
        &self,
        id: TaskId,
        owner: &UserId,
        position: Position,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let Some(task) = tasks.get_mut(&id).filter(|task| task.is_owned_by(owner)) else {
            return Ok(None);
        };
        task.set_position(position);
        Ok(Some(task.clone()))
    }

    async fn delete(
        &self,
        id: TaskId,
        owner: &UserId,
        close_slot: bool,
    ) -> TaskRepositoryResult<bool> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let owned = tasks.get(&id).is_some_and(|task| task.is_owned_by(owner));
        if !owned {
            return Ok(false);
        }
        let Some(removed) = tasks.remove(&id) else {
            return Ok(false);
        };
        if close_slot {
            ColumnPartition::of(&removed).close_slot(tasks.values_mut(), removed.position());
        }
        Ok(true)
    }

    async fn delete_by_board(&self, board_id: BoardId) -> TaskRepositoryResult<u64> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let before = tasks.len();
        tasks.retain(|_, task| task.board_id() != board_id);
        let removed = before.saturating_sub(tasks.len());
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }
}
