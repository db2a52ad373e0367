//! Per-test databases and repository fixtures for `PostgreSQL` tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use diesel::PgConnection;
use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::fixture;
use todo_backend::task::adapters::postgres::{PostgresTaskRepository, TodoPgPool};
use uuid::Uuid;

/// SQL creating the `todos` table.
pub const CREATE_TODOS_SQL: &str =
    include_str!("../../migrations/2026-10-19-000000_create_todos/up.sql");

/// Database that is dropped when the value goes out of scope.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
}

impl TemporaryDatabase {
    fn create(cluster: PostgresCluster) -> Result<Self, BoxError> {
        let name = format!("todos_{}", Uuid::new_v4().simple());
        cluster.create_database(&name)?;
        Ok(Self { cluster, name })
    }

    /// Returns the connection URL for this database.
    #[must_use]
    pub fn url(&self) -> String {
        self.cluster.database_url(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}

/// Migrated database with a repository connected to it.
///
/// The repository is declared first so its pool closes before the database
/// is dropped.
pub struct TodoDatabase {
    /// Repository under test.
    pub repository: PostgresTaskRepository,
    _database: TemporaryDatabase,
}

fn prepare(cluster: PostgresCluster) -> Result<TodoDatabase, BoxError> {
    let database = TemporaryDatabase::create(cluster)?;
    let url = database.url();

    let mut conn = PgConnection::establish(&url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_TODOS_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    drop(conn);

    let pool: TodoPgPool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(url))
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(TodoDatabase {
        repository: PostgresTaskRepository::new(pool),
        _database: database,
    })
}

/// Provides a fresh migrated database, or `None` when no cluster is
/// available and the test should be skipped.
///
/// # Errors
///
/// Returns an error if the cluster is up but database setup fails.
#[fixture]
pub fn database(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<TodoDatabase>, BoxError> {
    postgres_cluster.map(prepare).transpose()
}
