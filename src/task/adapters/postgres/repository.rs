//! `PostgreSQL` repository implementation for task storage.
//!
//! Multi-row position changes run inside one transaction that first takes a
//! transaction-scoped advisory lock keyed by `(user_id, board_id)`. Two
//! writers reindexing the same board therefore serialise, while the row-level
//! updates themselves stay plain `UPDATE ... SET position = position ± 1`.

use super::{models::TaskRow, schema::tasks};
use crate::board::domain::{BoardId, ColumnId};
use crate::task::{
    domain::{
        ColumnPartition, ColumnSlot, PersistedTaskData, Position, Task, TaskDetails, TaskId,
        TaskMove,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert_prepended(&self, task: &Task) -> TaskRepositoryResult<()> {
        let row = to_row(task);
        let task_id = task.id();
        let partition = ColumnPartition::of(task);
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|conn| {
                lock_board(conn, &partition.owner, partition.board_id)?;
                shift_down_from(conn, &partition, Position::FIRST, task_id)?;
                diesel::insert_into(tasks::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id)
                        }
                        _ => TaskRepositoryError::persistence(err),
                    })?;
                Ok(())
            })
        })
        .await
    }

    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()> {
        let row = to_row(task);
        let task_id = task.id();
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(row.id))
                    .filter(tasks::user_id.eq(&row.user_id)),
            )
            .set((
                tasks::title.eq(&row.title),
                tasks::description.eq(&row.description),
                tasks::priority.eq(&row.priority),
                tasks::kind.eq(&row.kind),
                tasks::time.eq(row.time),
                tasks::status.eq(&row.status),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_owned(&self, id: TaskId, owner: &UserId) -> TaskRepositoryResult<Option<Task>> {
        let owner_key = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::user_id.eq(owner_key))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_board(
        &self,
        owner: &UserId,
        board_id: BoardId,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let owner_key = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            tasks::table
                .filter(tasks::user_id.eq(owner_key))
                .filter(tasks::board_id.eq(board_id.into_inner()))
                .order((tasks::position.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn list_by_column(&self, partition: &ColumnPartition) -> TaskRepositoryResult<Vec<Task>> {
        let partition = partition.clone();
        self.run_blocking(move |connection| {
            tasks::table
                .filter(tasks::user_id.eq(partition.owner.as_str()))
                .filter(tasks::board_id.eq(partition.board_id.into_inner()))
                .filter(tasks::column_id.eq(partition.column_id.as_str()))
                .order((tasks::position.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn relocate(&self, task_move: &TaskMove) -> TaskRepositoryResult<Option<Task>> {
        let task_move = task_move.clone();
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|conn| {
                relocate_in_transaction(conn, &task_move)
            })
        })
        .await
    }

    async fn assign_position(
        &self,
        id: TaskId,
        owner: &UserId,
        position: Position,
    ) -> TaskRepositoryResult<Option<Task>> {
        let owner_key = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::user_id.eq(owner_key)),
            )
            .set(tasks::position.eq(i32::from(position)))
            .returning(TaskRow::as_returning())
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(
        &self,
        id: TaskId,
        owner: &UserId,
        close_slot: bool,
    ) -> TaskRepositoryResult<bool> {
        let owner = owner.clone();
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|conn| {
                let Some(candidate) = find_owned_row(conn, id, &owner)? else {
                    return Ok(false);
                };
                lock_board(conn, &owner, candidate.board_id())?;
                let Some(task) = find_for_update(conn, id, &owner)? else {
                    return Ok(false);
                };
                diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner()))).execute(conn)?;
                if close_slot {
                    shift_up_above(conn, &ColumnPartition::of(&task), task.position(), id)?;
                }
                Ok(true)
            })
        })
        .await
    }

    async fn delete_by_board(&self, board_id: BoardId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(tasks::table.filter(tasks::board_id.eq(board_id.into_inner())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            Ok(u64::try_from(deleted).unwrap_or(u64::MAX))
        })
        .await
    }
}

fn relocate_in_transaction(
    conn: &mut PgConnection,
    task_move: &TaskMove,
) -> TaskRepositoryResult<Option<Task>> {
    let Some(candidate) = find_owned_row(conn, task_move.task_id(), task_move.owner())? else {
        return Ok(None);
    };
    lock_board(conn, task_move.owner(), candidate.board_id())?;

    // Re-read under the board lock: a concurrent move may have committed
    // between the first read and the lock.
    let Some(mut moved) = find_for_update(conn, task_move.task_id(), task_move.owner())? else {
        return Ok(None);
    };
    if task_move.is_noop_for(&moved) {
        return Ok(Some(moved));
    }

    let task_id = moved.id();
    if task_move.compacts_vacated() {
        shift_up_above(conn, &ColumnPartition::of(&moved), moved.position(), task_id)?;
    }

    let destination = ColumnPartition::new(
        moved.owner().clone(),
        moved.board_id(),
        task_move.destination().column_id.clone(),
    );
    let remaining = partition_filter(&destination)
        .filter(tasks::id.ne(task_id.into_inner()))
        .count()
        .get_result::<i64>(conn)?;
    let landing = task_move.landing_position(usize::try_from(remaining).unwrap_or(usize::MAX));
    shift_down_from(conn, &destination, landing, task_id)?;

    diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
        .set((
            tasks::column_id.eq(destination.column_id.as_str()),
            tasks::position.eq(i32::from(landing)),
        ))
        .execute(conn)?;
    moved.place(ColumnSlot::new(destination.column_id, landing));
    Ok(Some(moved))
}

/// Takes the transaction-scoped advisory lock guarding one owner's board.
fn lock_board(
    conn: &mut PgConnection,
    owner: &UserId,
    board_id: BoardId,
) -> TaskRepositoryResult<()> {
    diesel::sql_query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
        .bind::<diesel::sql_types::Text, _>(format!("taskify/{owner}/{board_id}"))
        .execute(conn)?;
    Ok(())
}

type PartitionFilter<'a> = diesel::dsl::Filter<
    diesel::dsl::Filter<
        diesel::dsl::Filter<tasks::table, diesel::dsl::Eq<tasks::user_id, &'a str>>,
        diesel::dsl::Eq<tasks::board_id, uuid::Uuid>,
    >,
    diesel::dsl::Eq<tasks::column_id, &'a str>,
>;

fn partition_filter(partition: &ColumnPartition) -> PartitionFilter<'_> {
    tasks::table
        .filter(tasks::user_id.eq(partition.owner.as_str()))
        .filter(tasks::board_id.eq(partition.board_id.into_inner()))
        .filter(tasks::column_id.eq(partition.column_id.as_str()))
}

/// `position += 1` for every other task of `partition` at or below `from`.
fn shift_down_from(
    conn: &mut PgConnection,
    partition: &ColumnPartition,
    from: Position,
    excluding: TaskId,
) -> TaskRepositoryResult<usize> {
    let excluded = excluding.into_inner();
    let shifted = diesel::update(
        partition_filter(partition)
            .filter(tasks::position.ge(i32::from(from)))
            .filter(tasks::id.ne(excluded)),
    )
    .set(tasks::position.eq(tasks::position + 1))
    .execute(conn)?;
    Ok(shifted)
}

/// `position -= 1` for every other task of `partition` below `vacated`.
fn shift_up_above(
    conn: &mut PgConnection,
    partition: &ColumnPartition,
    vacated: Position,
    excluding: TaskId,
) -> TaskRepositoryResult<usize> {
    let excluded = excluding.into_inner();
    let shifted = diesel::update(
        partition_filter(partition)
            .filter(tasks::position.gt(i32::from(vacated)))
            .filter(tasks::id.ne(excluded)),
    )
    .set(tasks::position.eq(tasks::position - 1))
    .execute(conn)?;
    Ok(shifted)
}

fn find_owned_row(
    conn: &mut PgConnection,
    id: TaskId,
    owner: &UserId,
) -> TaskRepositoryResult<Option<Task>> {
    let row = tasks::table
        .filter(tasks::id.eq(id.into_inner()))
        .filter(tasks::user_id.eq(owner.as_str()))
        .select(TaskRow::as_select())
        .first::<TaskRow>(conn)
        .optional()?;
    row.map(row_to_task).transpose()
}

fn find_for_update(
    conn: &mut PgConnection,
    id: TaskId,
    owner: &UserId,
) -> TaskRepositoryResult<Option<Task>> {
    let row = tasks::table
        .filter(tasks::id.eq(id.into_inner()))
        .filter(tasks::user_id.eq(owner.as_str()))
        .select(TaskRow::as_select())
        .for_update()
        .first::<TaskRow>(conn)
        .optional()?;
    row.map(row_to_task).transpose()
}

fn to_row(task: &Task) -> TaskRow {
    let details = task.details();
    TaskRow {
        id: task.id().into_inner(),
        board_id: task.board_id().into_inner(),
        column_id: task.column_id().as_str().to_owned(),
        position: i32::from(task.position()),
        user_id: task.owner().as_str().to_owned(),
        title: details.title.clone(),
        description: details.description.clone(),
        priority: details.priority.clone(),
        kind: details.kind.clone(),
        time: details.time,
        status: details.status.clone(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        board_id,
        column_id,
        position: persisted_position,
        user_id,
        title,
        description,
        priority,
        kind,
        time,
        status,
    } = row;

    let rank = u32::try_from(persisted_position).map_err(TaskRepositoryError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        board_id: BoardId::from_uuid(board_id),
        column_id: ColumnId::new(column_id).map_err(TaskRepositoryError::persistence)?,
        position: Position::new(rank).map_err(TaskRepositoryError::persistence)?,
        owner: UserId::new(user_id).map_err(TaskRepositoryError::persistence)?,
        details: TaskDetails {
            title,
            description,
            priority,
            kind,
            time,
            status,
        },
    };
    Ok(Task::from_persisted(data))
}
