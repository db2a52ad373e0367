//! Diesel row models for task persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Expiry timestamp.
    pub expiry_date: DateTime<Utc>,
    /// Completion percentage.
    pub percent_complete: i32,
}

/// Insert model for task records. The identifier is generated by the
/// database.
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Expiry timestamp.
    pub expiry_date: DateTime<Utc>,
    /// Completion percentage.
    pub percent_complete: i32,
}

/// Full replacement of the mutable task columns.
#[derive(Debug, Clone, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional task description. `None` clears the column.
    pub description: Option<String>,
    /// Expiry timestamp.
    pub expiry_date: DateTime<Utc>,
    /// Completion percentage.
    pub percent_complete: i32,
}
