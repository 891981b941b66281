//! Shared world state for task reordering BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use taskify::board::{adapters::memory::InMemoryBoardRepository, domain::BoardId};
use taskify::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PositionPolicy, Task, TaskId},
    services::{ReorderError, ReorderService, TaskLifecycleService},
};
use taskify::user::domain::UserId;

/// Scenario world for reordering behaviour tests.
pub struct ReorderWorld {
    pub tasks: TaskLifecycleService<InMemoryTaskRepository>,
    pub reorder: ReorderService<InMemoryTaskRepository, InMemoryBoardRepository>,
    pub owner: Option<UserId>,
    pub board_id: BoardId,
    pub named_tasks: HashMap<String, TaskId>,
    pub last_move: Option<Result<Task, ReorderError>>,
    pub last_batch: Option<Vec<Option<Task>>>,
}

impl ReorderWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let task_store = Arc::new(InMemoryTaskRepository::new());
        let policy = PositionPolicy::default();
        Self {
            tasks: TaskLifecycleService::new(Arc::clone(&task_store), policy),
            reorder: ReorderService::new(
                task_store,
                Arc::new(InMemoryBoardRepository::new()),
                policy,
            ),
            owner: None,
            board_id: BoardId::new(),
            named_tasks: HashMap::new(),
            last_move: None,
            last_batch: None,
        }
    }

    /// Returns the board owner named in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if no owner has been set.
    pub fn owner(&self) -> Result<UserId, eyre::Report> {
        self.owner
            .clone()
            .ok_or_else(|| eyre::eyre!("missing board owner in scenario world"))
    }

    /// Resolves a task name; unknown names map to a fresh identifier.
    #[must_use]
    pub fn task_id(&self, name: &str) -> TaskId {
        self.named_tasks.get(name).copied().unwrap_or_default()
    }
}

impl Default for ReorderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReorderWorld {
    ReorderWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated scenario list.
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}
