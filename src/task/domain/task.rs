//! Task entity and its not-yet-persisted counterpart.

use super::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion percentage of a finished task.
pub const PERCENT_DONE: i32 = 100;

/// A task that has not been assigned an identifier by the store yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    expiry_date: DateTime<Utc>,
    percent_complete: i32,
}

impl NewTask {
    /// Creates a new, untouched task. Completion always starts at zero.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        expiry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            expiry_date,
            percent_complete: 0,
        }
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the expiry timestamp.
    #[must_use]
    pub const fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn percent_complete(&self) -> i32 {
        self.percent_complete
    }

    /// Attaches a store-assigned identifier, producing a persisted task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            expiry_date: self.expiry_date,
            percent_complete: self.percent_complete,
        }
    }
}

/// Persisted to-do task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    expiry_date: DateTime<Utc>,
    percent_complete: i32,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted expiry timestamp.
    pub expiry_date: DateTime<Utc>,
    /// Persisted completion percentage.
    pub percent_complete: i32,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            expiry_date: data.expiry_date,
            percent_complete: data.percent_complete,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the expiry timestamp.
    #[must_use]
    pub const fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn percent_complete(&self) -> i32 {
        self.percent_complete
    }

    /// Returns `true` once the task is fully complete.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.percent_complete >= PERCENT_DONE
    }

    /// Replaces every mutable field at once. The identifier is kept.
    pub fn replace(
        &mut self,
        title: String,
        description: Option<String>,
        expiry_date: DateTime<Utc>,
        percent_complete: i32,
    ) {
        self.title = title;
        self.description = description;
        self.expiry_date = expiry_date;
        self.percent_complete = percent_complete;
    }

    /// Sets the completion percentage verbatim.
    ///
    /// The value is not range-checked here; callers that accept untrusted
    /// input are expected to validate it first.
    pub const fn set_percent_complete(&mut self, percent: i32) {
        self.percent_complete = percent;
    }

    /// Marks the task as fully complete.
    pub const fn mark_done(&mut self) {
        self.percent_complete = PERCENT_DONE;
    }
}
