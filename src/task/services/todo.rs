//! Service layer for to-do task management.

use crate::task::{
    contracts::{CreateTaskInput, TaskView, UpdateTaskInput},
    domain::{IncomingWindow, NewTask, Task, TaskFilter, TaskId},
    error::ValidationErrors,
    ports::{TaskInputValidator, TaskRepository, TaskRepositoryError},
};
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task operations.
///
/// A missing task is not an error: lookups return `None` and mutations
/// return `false`.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Collaborators are injected at construction and shared behind [`Arc`], so
/// the service is cheap to clone across concurrent callers.
pub struct TaskService<R, V, C>
where
    R: TaskRepository,
    V: TaskInputValidator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    validator: Arc<V>,
    clock: Arc<C>,
    incoming_lookahead: TimeDelta,
}

impl<R, V, C> Clone for TaskService<R, V, C>
where
    R: TaskRepository,
    V: TaskInputValidator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            validator: Arc::clone(&self.validator),
            clock: Arc::clone(&self.clock),
            incoming_lookahead: self.incoming_lookahead,
        }
    }
}

impl<R, V, C> TaskService<R, V, C>
where
    R: TaskRepository,
    V: TaskInputValidator,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub fn new(repository: Arc<R>, validator: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            repository,
            validator,
            clock,
            incoming_lookahead: TimeDelta::days(IncomingWindow::DEFAULT_LOOKAHEAD_DAYS),
        }
    }

    /// Overrides the rolling lookahead used by [`Self::list_incoming`].
    #[must_use]
    pub const fn with_incoming_lookahead(mut self, lookahead: TimeDelta) -> Self {
        self.incoming_lookahead = lookahead;
        self
    }

    /// Returns every task in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.list_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(to_views(tasks))
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<Option<TaskView>> {
        let task = self.repository.find_by_id(id).await?;
        debug!(task_id = %id, found = task.is_some(), "looked up task");
        Ok(task.map(TaskView::from))
    }

    /// Returns tasks due today, tomorrow, or within the lookahead.
    ///
    /// See [`IncomingWindow`] for the exact selection rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_incoming(&self) -> TaskServiceResult<Vec<TaskView>> {
        let window =
            IncomingWindow::starting_at(self.clock.utc()).with_lookahead(self.incoming_lookahead);
        let tasks = self
            .repository
            .find_where(&TaskFilter::Incoming(window))
            .await?;
        debug!(count = tasks.len(), now = %window.now(), "listed incoming tasks");
        Ok(to_views(tasks))
    }

    /// Creates a task with zero completion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the input breaks a rule
    /// (nothing is stored), or [`TaskServiceError::Repository`] when the
    /// repository rejects persistence.
    pub async fn create(&self, input: CreateTaskInput) -> TaskServiceResult<TaskView> {
        self.validator
            .validate_create(&input)
            .inspect_err(|errors| warn!(%errors, "rejected task creation"))?;

        let new_task = NewTask::from(input);
        let task = self.repository.insert(&new_task).await?;
        info!(task_id = %task.id(), "created task");
        Ok(TaskView::from(task))
    }

    /// Replaces the title, description, expiry, and completion of a task.
    ///
    /// Returns `Ok(false)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the input breaks a rule
    /// (the store is not consulted), or [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, id: TaskId, input: UpdateTaskInput) -> TaskServiceResult<bool> {
        self.validator
            .validate_update(&input)
            .inspect_err(|errors| warn!(task_id = %id, %errors, "rejected task update"))?;

        self.modify(id, |task| input.apply_to(task)).await
    }

    /// Sets the completion percentage of a task verbatim.
    ///
    /// The percentage is not range-checked; callers accepting untrusted
    /// values must validate them first.
    ///
    /// Returns `Ok(false)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn set_percent_complete(&self, id: TaskId, percent: i32) -> TaskServiceResult<bool> {
        self.modify(id, |task| task.set_percent_complete(percent))
            .await
    }

    /// Marks a task as fully complete.
    ///
    /// Returns `Ok(false)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn mark_done(&self, id: TaskId) -> TaskServiceResult<bool> {
        self.modify(id, Task::mark_done).await
    }

    /// Permanently deletes a task.
    ///
    /// Returns `Ok(false)` when no task has the identifier; storage is left
    /// untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<bool> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(task_id = %id, "deleted task");
        } else {
            debug!(task_id = %id, "delete skipped, task not found");
        }
        Ok(deleted)
    }

    /// Fetches a task, applies `mutate`, and persists the result.
    async fn modify<F>(&self, id: TaskId, mutate: F) -> TaskServiceResult<bool>
    where
        F: FnOnce(&mut Task) + Send,
    {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            debug!(task_id = %id, "task not found");
            return Ok(false);
        };

        mutate(&mut task);
        match self.repository.update(&task).await {
            Ok(()) => {}
            // Removed by a concurrent delete between fetch and write.
            Err(TaskRepositoryError::NotFound(_)) => return Ok(false),
            Err(err) => return Err(err.into()),
        }
        debug!(
            task_id = %id,
            percent_complete = task.percent_complete(),
            "updated task"
        );
        Ok(true)
    }
}

fn to_views(tasks: Vec<Task>) -> Vec<TaskView> {
    tasks.into_iter().map(TaskView::from).collect()
}
