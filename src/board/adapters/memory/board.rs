//! In-memory repository for boards.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    boards: Arc<RwLock<HashMap<BoardId, Board>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn sorted_matching(
    boards: &HashMap<BoardId, Board>,
    filter: impl Fn(&Board) -> bool,
) -> Vec<Board> {
    let mut matching: Vec<Board> = boards.values().filter(|board| filter(board)).cloned().collect();
    matching.sort_by(|left, right| {
        right
            .last_accessed()
            .cmp(&left.last_accessed())
            .then_with(|| left.name().cmp(right.name()))
    });
    matching
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        if boards.contains_key(&board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id()));
        }
        boards.insert(board.id(), board.clone());
        Ok(())
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        let slot = boards
            .get_mut(&board.id())
            .ok_or(BoardRepositoryError::NotFound(board.id()))?;
        *slot = board.clone();
        Ok(())
    }

    async fn record_access(
        &self,
        id: BoardId,
        at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Option<Board>> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        Ok(boards.get_mut(&id).map(|board| {
            board.record_access(at);
            board.clone()
        }))
    }

    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<bool> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        Ok(boards.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        let boards = self.boards.read().map_err(poisoned)?;
        Ok(boards.get(&id).cloned())
    }

    async fn list_templates(&self) -> BoardRepositoryResult<Vec<Board>> {
        let boards = self.boards.read().map_err(poisoned)?;
        Ok(sorted_matching(&boards, Board::is_template))
    }

    async fn list_owned(&self, owner: &UserId) -> BoardRepositoryResult<Vec<Board>> {
        let boards = self.boards.read().map_err(poisoned)?;
        Ok(sorted_matching(&boards, |board| {
            !board.is_template() && board.is_owned_by(owner)
        }))
    }
}
