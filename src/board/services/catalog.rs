//! Service layer for board management, templates and statistics.

use crate::board::{
    domain::{Board, BoardDomainError, BoardId, BoardStats, ColorTheme, TEMPLATE_BOARDS},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Boards visible to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardListing {
    /// Shared template boards.
    pub templates: Vec<Board>,
    /// Boards owned by the user.
    pub owned: Vec<Board>,
}

/// Outcome of deleting a board together with its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDeletion {
    /// Number of boards removed (zero or one).
    pub deleted_boards: u64,
    /// Number of tasks removed with the board.
    pub deleted_tasks: u64,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The board does not exist or is not accessible to the caller.
    #[error("board not found: {0}")]
    NotFound(BoardId),
    /// No template board has the requested identifier.
    #[error("template not found: {0}")]
    TemplateNotFound(BoardId),
    /// Board repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type BoardCatalogResult<T> = Result<T, BoardCatalogError>;

/// Board orchestration service.
pub struct BoardCatalogService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    boards: Arc<B>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<B, T, C> Clone for BoardCatalogService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B, T, C> BoardCatalogService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(boards: Arc<B>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            boards,
            tasks,
            clock,
        }
    }

    /// Stores the built-in templates when the store holds none.
    ///
    /// Returns how many templates were created.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::Repository`] when the store fails.
    pub async fn seed_templates(&self) -> BoardCatalogResult<usize> {
        if !self.boards.list_templates().await?.is_empty() {
            debug!("templates already present, skipping seed");
            return Ok(0);
        }
        for template in &TEMPLATE_BOARDS {
            let board = Board::new_template(template, &*self.clock);
            self.boards.store(&board).await?;
        }
        info!(count = TEMPLATE_BOARDS.len(), "seeded template boards");
        Ok(TEMPLATE_BOARDS.len())
    }

    /// Lists the shared templates and the caller's own boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::Repository`] when the store fails.
    pub async fn list_all(&self, owner: &UserId) -> BoardCatalogResult<BoardListing> {
        Ok(BoardListing {
            templates: self.boards.list_templates().await?,
            owned: self.boards.list_owned(owner).await?,
        })
    }

    /// Creates a board with the default columns of `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::Domain`] when the name is blank.
    pub async fn create(
        &self,
        owner: &UserId,
        name: &str,
        theme: ColorTheme,
    ) -> BoardCatalogResult<Board> {
        let board = Board::new_for_user(name, theme, owner.clone(), &*self.clock)?;
        self.boards.store(&board).await?;
        debug!(board_id = %board.id(), theme = theme.as_str(), "board created");
        Ok(board)
    }

    /// Returns a board the caller owns, or any template.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::NotFound`] otherwise.
    pub async fn find_visible(&self, owner: &UserId, id: BoardId) -> BoardCatalogResult<Board> {
        self.boards
            .find_by_id(id)
            .await?
            .filter(|board| board.is_visible_to(owner))
            .ok_or(BoardCatalogError::NotFound(id))
    }

    /// Renames one of the caller's boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::NotFound`] for boards the caller does not
    /// own and [`BoardCatalogError::Domain`] for a blank name.
    pub async fn rename(
        &self,
        owner: &UserId,
        id: BoardId,
        name: &str,
    ) -> BoardCatalogResult<Board> {
        let mut board = self.find_owned(owner, id).await?;
        board.rename(name)?;
        self.boards.update(&board).await?;
        Ok(board)
    }

    /// Deletes one of the caller's boards and every task on it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::NotFound`] for boards the caller does not
    /// own.
    pub async fn delete(&self, owner: &UserId, id: BoardId) -> BoardCatalogResult<BoardDeletion> {
        self.find_owned(owner, id).await?;
        let deleted_tasks = self.tasks.delete_by_board(id).await?;
        let deleted_boards = u64::from(self.boards.delete(id).await?);
        debug!(board_id = %id, deleted_tasks, "board deleted");
        Ok(BoardDeletion {
            deleted_boards,
            deleted_tasks,
        })
    }

    /// Creates a board for the caller from a template.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::TemplateNotFound`] when `template_id`
    /// does not name a template.
    pub async fn create_from_template(
        &self,
        owner: &UserId,
        template_id: BoardId,
    ) -> BoardCatalogResult<Board> {
        let template = self
            .boards
            .find_by_id(template_id)
            .await?
            .filter(Board::is_template)
            .ok_or(BoardCatalogError::TemplateNotFound(template_id))?;
        let board = template.instantiate_for(owner.clone(), &*self.clock);
        self.boards.store(&board).await?;
        debug!(board_id = %board.id(), template_id = %template_id, "board created from template");
        Ok(board)
    }

    /// Stamps an access on one of the caller's boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::NotFound`] for boards the caller does not
    /// own.
    pub async fn record_access(&self, owner: &UserId, id: BoardId) -> BoardCatalogResult<Board> {
        self.find_owned(owner, id).await?;
        self.boards
            .record_access(id, self.clock.utc())
            .await?
            .ok_or(BoardCatalogError::NotFound(id))
    }

    /// Summarises the caller's tasks on one of their boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::NotFound`] for boards the caller does not
    /// own.
    pub async fn stats(&self, owner: &UserId, id: BoardId) -> BoardCatalogResult<BoardStats> {
        let board = self.find_owned(owner, id).await?;
        let tasks = self.tasks.list_by_board(owner, id).await?;
        Ok(BoardStats::summarise(&board, &tasks))
    }

    async fn find_owned(&self, owner: &UserId, id: BoardId) -> BoardCatalogResult<Board> {
        self.boards
            .find_by_id(id)
            .await?
            .filter(|board| !board.is_template() && board.is_owned_by(owner))
            .ok_or(BoardCatalogError::NotFound(id))
    }
}
