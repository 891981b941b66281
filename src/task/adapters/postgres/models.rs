//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query and insert row for task records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning board.
    pub board_id: uuid::Uuid,
    /// Current column.
    pub column_id: String,
    /// Zero-based rank within the column.
    pub position: i32,
    /// Owning identity subject.
    pub user_id: String,
    /// Card title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Priority label.
    pub priority: String,
    /// Category label.
    pub kind: String,
    /// Optional due date.
    pub time: Option<DateTime<Utc>>,
    /// Optional status label.
    pub status: Option<String>,
}
