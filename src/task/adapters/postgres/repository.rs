//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::todos,
};
use crate::task::{
    domain::{DayRange, IncomingWindow, NewTask, PersistedTaskData, Task, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Every port call issues a single SQL statement, so per-row writes are
/// atomic without explicit transactions.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TodoPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn find_where(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let lookup_filter = *filter;
        self.run_blocking(move |connection| {
            let rows = match lookup_filter {
                TaskFilter::Incoming(window) => find_incoming(connection, &window)?,
            };
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changes = to_changeset(task);
        self.run_blocking(move |connection| {
            let affected = diesel::update(todos::table.find(task_id.value()))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }
}

/// Selects incoming rows. The three clauses mirror
/// [`IncomingWindow::contains`] one-for-one.
fn find_incoming(
    connection: &mut PgConnection,
    window: &IncomingWindow,
) -> TaskRepositoryResult<Vec<TaskRow>> {
    let today = window.today();
    let tomorrow = window.tomorrow().unwrap_or(DayRange {
        start: today.end,
        end: today.end,
    });

    todos::table
        .filter(
            todos::expiry_date
                .ge(today.start)
                .and(todos::expiry_date.lt(today.end))
                .or(todos::expiry_date
                    .ge(tomorrow.start)
                    .and(todos::expiry_date.lt(tomorrow.end)))
                .or(todos::expiry_date.between(window.now(), window.end())),
        )
        .order(todos::id.asc())
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)
        .map_err(TaskRepositoryError::persistence)
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        expiry_date: task.expiry_date(),
        percent_complete: task.percent_complete(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        expiry_date: task.expiry_date(),
        percent_complete: task.percent_complete(),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        title,
        description,
        expiry_date,
        percent_complete,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        expiry_date,
        percent_complete,
    })
}
