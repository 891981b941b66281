//! Diesel row models for boards.

use super::schema::boards;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query and insert row for board records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct BoardRow {
    /// Board identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Colour theme key.
    pub color_theme: String,
    /// Column catalog JSON.
    #[diesel(column_name = column_catalog)]
    pub columns: Value,
    /// Shared template flag.
    pub is_template: bool,
    /// Last-access timestamp.
    pub last_accessed: DateTime<Utc>,
    /// Access counter.
    pub access_count: i64,
    /// Owning user.
    pub user_id: Option<String>,
}
