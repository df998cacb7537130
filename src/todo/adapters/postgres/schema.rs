//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records.
    todos (id) {
        /// Todo identifier.
        id -> Uuid,
        /// Trimmed todo title.
        #[max_length = 255]
        title -> Varchar,
        /// Completion flag encoded as 0 or 1 so it can be indexed.
        completed -> SmallInt,
        /// Priority level.
        #[max_length = 16]
        priority -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
