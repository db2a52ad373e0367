//! Externally visible projection of a task.

use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task as returned to callers. Always derived from a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Description, serialized as `null` when absent.
    pub description: Option<String>,
    /// Expiry timestamp.
    pub expiry_date: DateTime<Utc>,
    /// Completion percentage.
    pub percent_complete: i32,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            expiry_date: task.expiry_date(),
            percent_complete: task.percent_complete(),
        }
    }
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}
