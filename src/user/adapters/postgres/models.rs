//! Diesel row models for user profiles.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query and insert row for profile records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Identity subject.
    pub id: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
