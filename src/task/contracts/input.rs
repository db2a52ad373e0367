//! Externally supplied shapes used to create or modify tasks.

use crate::task::domain::{NewTask, Task};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// When the task expires. Must be in the future.
    pub expiry_date: DateTime<Utc>,
}

impl CreateTaskInput {
    /// Creates an input with required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, expiry_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            expiry_date,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<CreateTaskInput> for NewTask {
    fn from(input: CreateTaskInput) -> Self {
        let CreateTaskInput {
            title,
            description,
            expiry_date,
        } = input;
        Self::new(title, description, expiry_date)
    }
}

/// Request payload replacing every mutable field of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    /// Replacement title.
    pub title: String,
    /// Replacement description. `None` clears it.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement expiry. Must be in the future.
    pub expiry_date: DateTime<Utc>,
    /// Replacement completion percentage in `0..=100`.
    pub percent_complete: i32,
}

impl UpdateTaskInput {
    /// Creates an input with required fields and no description.
    #[must_use]
    pub fn new(title: impl Into<String>, expiry_date: DateTime<Utc>, percent_complete: i32) -> Self {
        Self {
            title: title.into(),
            description: None,
            expiry_date,
            percent_complete,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overwrites the mutable fields of `task`, keeping its identifier.
    pub fn apply_to(self, task: &mut Task) {
        let Self {
            title,
            description,
            expiry_date,
            percent_complete,
        } = self;
        task.replace(title, description, expiry_date, percent_complete);
    }
}
