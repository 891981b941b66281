//! `PostgreSQL` repository implementation for user profiles.

use super::{models::UserRow, schema::users};
use crate::user::{
    domain::{EmailAddress, PersistedUserData, UserId, UserProfile},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed profile repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: UserPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn store(&self, profile: &UserProfile) -> UserRepositoryResult<()> {
        let row = to_row(profile);
        let user_id = profile.id().clone();
        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicateUser(user_id)
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, profile: &UserProfile) -> UserRepositoryResult<()> {
        let row = to_row(profile);
        let user_id = profile.id().clone();
        self.run_blocking(move |connection| {
            let updated = diesel::update(users::table.find(row.id.clone()))
                .set(&row)
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            if updated == 0 {
                return Err(UserRepositoryError::NotFound(user_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &UserId) -> UserRepositoryResult<Option<UserProfile>> {
        let key = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .find(key)
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_profile).transpose()
        })
        .await
    }
}

fn to_row(profile: &UserProfile) -> UserRow {
    UserRow {
        id: profile.id().as_str().to_owned(),
        email: profile.email().as_str().to_owned(),
        name: profile.name().to_owned(),
        avatar: profile.avatar().to_owned(),
        created_at: profile.created_at(),
    }
}

fn row_to_profile(row: UserRow) -> UserRepositoryResult<UserProfile> {
    let UserRow {
        id,
        email,
        name,
        avatar,
        created_at,
    } = row;
    let data = PersistedUserData {
        id: UserId::new(id).map_err(UserRepositoryError::persistence)?,
        email: EmailAddress::new(email).map_err(UserRepositoryError::persistence)?,
        name,
        avatar,
        created_at,
    };
    Ok(UserProfile::from_persisted(data))
}
