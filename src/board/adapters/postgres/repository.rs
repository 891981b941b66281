//! `PostgreSQL` repository implementation for boards.

use super::{models::BoardRow, schema::boards};
use crate::board::{
    domain::{Board, BoardId, ColorTheme, Column, PersistedBoardData},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        let row = to_row(board)?;
        let board_id = board.id();
        self.run_blocking(move |connection| {
            diesel::insert_into(boards::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateBoard(board_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        let row = to_row(board)?;
        let board_id = board.id();
        self.run_blocking(move |connection| {
            let updated = diesel::update(boards::table.find(row.id))
                .set(&row)
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            if updated == 0 {
                return Err(BoardRepositoryError::NotFound(board_id));
            }
            Ok(())
        })
        .await
    }

    async fn record_access(
        &self,
        id: BoardId,
        at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Option<Board>> {
        self.run_blocking(move |connection| {
            let row = diesel::update(boards::table.find(id.into_inner()))
                .set((
                    boards::last_accessed.eq(at),
                    boards::access_count.eq(boards::access_count + 1_i64),
                ))
                .returning(BoardRow::as_returning())
                .get_result::<BoardRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(boards::table.find(id.into_inner()))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        self.run_blocking(move |connection| {
            let row = boards::table
                .find(id.into_inner())
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn list_templates(&self) -> BoardRepositoryResult<Vec<Board>> {
        self.run_blocking(move |connection| {
            boards::table
                .filter(boards::is_template.eq(true))
                .order((boards::last_accessed.desc(), boards::name.asc()))
                .select(BoardRow::as_select())
                .load::<BoardRow>(connection)
                .map_err(BoardRepositoryError::persistence)?
                .into_iter()
                .map(row_to_board)
                .collect()
        })
        .await
    }

    async fn list_owned(&self, owner: &UserId) -> BoardRepositoryResult<Vec<Board>> {
        let owner_key = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            boards::table
                .filter(boards::is_template.eq(false))
                .filter(boards::user_id.eq(owner_key))
                .order((boards::last_accessed.desc(), boards::name.asc()))
                .select(BoardRow::as_select())
                .load::<BoardRow>(connection)
                .map_err(BoardRepositoryError::persistence)?
                .into_iter()
                .map(row_to_board)
                .collect()
        })
        .await
    }
}

fn to_row(board: &Board) -> BoardRepositoryResult<BoardRow> {
    let columns = serde_json::to_value(board.columns()).map_err(BoardRepositoryError::persistence)?;
    Ok(BoardRow {
        id: board.id().into_inner(),
        name: board.name().to_owned(),
        color_theme: board.color_theme().as_str().to_owned(),
        columns,
        is_template: board.is_template(),
        last_accessed: board.last_accessed(),
        access_count: i64::try_from(board.access_count()).unwrap_or(i64::MAX),
        user_id: board.owner().map(|owner| owner.as_str().to_owned()),
    })
}

fn row_to_board(row: BoardRow) -> BoardRepositoryResult<Board> {
    let BoardRow {
        id,
        name,
        color_theme,
        columns,
        is_template,
        last_accessed,
        access_count,
        user_id,
    } = row;
    let data = PersistedBoardData {
        id: BoardId::from_uuid(id),
        name,
        color_theme: ColorTheme::try_from(color_theme.as_str())
            .map_err(BoardRepositoryError::persistence)?,
        columns: serde_json::from_value::<Vec<Column>>(columns)
            .map_err(BoardRepositoryError::persistence)?,
        is_template,
        last_accessed,
        access_count: u64::try_from(access_count).unwrap_or_default(),
        owner: user_id
            .map(UserId::new)
            .transpose()
            .map_err(BoardRepositoryError::persistence)?,
    };
    Ok(Board::from_persisted(data))
}
