//! Diesel schema for task persistence.

diesel::table! {
    /// To-do task records.
    todos (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional task description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Expiry timestamp.
        expiry_date -> Timestamptz,
        /// Completion percentage.
        percent_complete -> Int4,
    }
}
