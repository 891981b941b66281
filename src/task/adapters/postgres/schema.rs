//! Diesel schema for task persistence.

diesel::table! {
    /// Task records ranked within `(user_id, board_id, column_id)`.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning board.
        board_id -> Uuid,
        /// Current column.
        #[max_length = 64]
        column_id -> Varchar,
        /// Zero-based rank within the column.
        position -> Int4,
        /// Owning identity subject.
        #[max_length = 128]
        user_id -> Varchar,
        /// Card title.
        title -> Text,
        /// Free-form description.
        description -> Text,
        /// Priority label.
        #[max_length = 64]
        priority -> Varchar,
        /// Category label.
        #[max_length = 64]
        kind -> Varchar,
        /// Optional due date.
        time -> Nullable<Timestamptz>,
        /// Optional status label.
        #[max_length = 64]
        status -> Nullable<Varchar>,
    }
}
