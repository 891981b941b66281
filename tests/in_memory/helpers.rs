//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskify::board::{
    adapters::memory::InMemoryBoardRepository, domain::BoardId, services::BoardCatalogService,
};
use taskify::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PositionPolicy, Task},
    services::{CreateTaskRequest, ReorderService, TaskLifecycleService},
};
use taskify::user::domain::UserId;

/// Services wired over one pair of in-memory stores.
pub struct Workspace {
    pub boards: BoardCatalogService<InMemoryBoardRepository, InMemoryTaskRepository, DefaultClock>,
    pub tasks: TaskLifecycleService<InMemoryTaskRepository>,
    pub reorder: ReorderService<InMemoryTaskRepository, InMemoryBoardRepository>,
}

impl Workspace {
    /// Builds a workspace applying `policy` to moves and deletes.
    #[must_use]
    pub fn with_policy(policy: PositionPolicy) -> Self {
        let board_store = Arc::new(InMemoryBoardRepository::new());
        let task_store = Arc::new(InMemoryTaskRepository::new());
        Self {
            boards: BoardCatalogService::new(
                Arc::clone(&board_store),
                Arc::clone(&task_store),
                Arc::new(DefaultClock),
            ),
            tasks: TaskLifecycleService::new(Arc::clone(&task_store), policy),
            reorder: ReorderService::new(task_store, board_store, policy),
        }
    }

    /// Creates tasks so that the column reads `titles` top to bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if any task cannot be created.
    pub async fn fill_column(
        &self,
        owner: &UserId,
        board_id: BoardId,
        column: &str,
        titles: &[&str],
    ) -> eyre::Result<Vec<Task>> {
        let mut created = Vec::with_capacity(titles.len());
        for title in titles.iter().rev() {
            created.push(
                self.tasks
                    .create(owner, CreateTaskRequest::new(board_id, column, *title))
                    .await?,
            );
        }
        created.reverse();
        Ok(created)
    }

    /// Returns `(title, position)` pairs of a column, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if the column cannot be listed.
    pub async fn column(
        &self,
        owner: &UserId,
        board_id: BoardId,
        column: &str,
    ) -> eyre::Result<Vec<(String, u32)>> {
        Ok(self
            .reorder
            .list_by_column(owner, board_id, column)
            .await?
            .iter()
            .map(|task| (task.details().title.clone(), task.position().value()))
            .collect())
    }
}

/// Provides a workspace with the default policy.
#[fixture]
pub fn workspace() -> Workspace {
    Workspace::with_policy(PositionPolicy::default())
}

/// Provides the primary test user.
///
/// # Panics
///
/// Panics if the fixed identifier is rejected.
#[fixture]
pub fn alice() -> UserId {
    UserId::new("alice").expect("valid user id")
}

/// Builds an expected `(title, position)` listing.
#[must_use]
pub fn ranked(entries: &[(&str, u32)]) -> Vec<(String, u32)> {
    entries
        .iter()
        .map(|(title, position)| ((*title).to_owned(), *position))
        .collect()
}
