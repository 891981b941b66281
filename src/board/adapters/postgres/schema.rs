//! Diesel schema for boards.

diesel::table! {
    /// Boards and shared templates.
    boards (id) {
        /// Board identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Colour theme key.
        #[max_length = 32]
        color_theme -> Varchar,
        /// Column catalog as a JSON array of `{id, name, order}`.
        #[sql_name = "columns"]
        column_catalog -> Jsonb,
        /// Shared template flag.
        is_template -> Bool,
        /// Last-access timestamp.
        last_accessed -> Timestamptz,
        /// Access counter.
        access_count -> Int8,
        /// Owning user, null for templates.
        #[max_length = 128]
        user_id -> Nullable<Varchar>,
    }
}
