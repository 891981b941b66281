//! Diesel schema for user profiles.

diesel::table! {
    /// Profiles keyed by identity-provider subject.
    users (id) {
        /// Identity subject.
        #[max_length = 128]
        id -> Varchar,
        /// Contact email.
        #[max_length = 320]
        email -> Varchar,
        /// Display name.
        name -> Text,
        /// Avatar URL.
        avatar -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
