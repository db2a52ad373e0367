//! `PostgreSQL` CRUD round-trip tests for the task repository.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rstest::rstest;
use todo_backend::task::{
    domain::{NewTask, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

use crate::postgres::helpers::{BoxError, TodoDatabase, database};

fn expiry() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 11, 2, 9, 30, 0)
        .single()
        .expect("valid instant")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_insert_and_lookup_round_trip(
    database: Result<Option<TodoDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let first = db
        .repository
        .insert(&NewTask::new("Pay bills", Some("Rent".to_owned()), expiry()))
        .await?;
    let second = db
        .repository
        .insert(&NewTask::new("Book flights", None, expiry()))
        .await?;

    assert_eq!(first.percent_complete(), 0);
    assert!(first.id() < second.id());
    assert_eq!(db.repository.find_by_id(first.id()).await?, Some(first.clone()));
    assert_eq!(db.repository.find_by_id(TaskId::new(9_999)).await?, None);
    assert_eq!(db.repository.list_all().await?, vec![first, second]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_update_replaces_columns_and_clears_description(
    database: Result<Option<TodoDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let mut task = db
        .repository
        .insert(&NewTask::new("Draft", Some("Old notes".to_owned()), expiry()))
        .await?;

    task.replace(
        "Final".to_owned(),
        None,
        expiry() + TimeDelta::days(1),
        150,
    );
    db.repository.update(&task).await?;

    let stored = db
        .repository
        .find_by_id(task.id())
        .await?
        .ok_or("task should exist")?;
    assert_eq!(stored, task);
    assert_eq!(stored.description(), None);
    assert_eq!(stored.percent_complete(), 150);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_update_of_missing_row_is_not_found(
    database: Result<Option<TodoDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let ghost = NewTask::new("Ghost", None, expiry()).into_task(TaskId::new(404));

    let result = db.repository.update(&ghost).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(404)
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_delete_reports_whether_row_existed(
    database: Result<Option<TodoDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let task = db
        .repository
        .insert(&NewTask::new("Cancel gym", None, expiry()))
        .await?;

    assert!(db.repository.delete(task.id()).await?);
    assert!(!db.repository.delete(task.id()).await?);
    assert!(db.repository.list_all().await?.is_empty());
    Ok(())
}

#[rstest]
#[case::spaces("   ")]
#[case::tabs_and_newlines("\t\n")]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_rejects_blank_titles(
    database: Result<Option<TodoDatabase>, BoxError>,
    #[case] title: &str,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };

    let result = db
        .repository
        .insert(&NewTask::new(title, None, expiry()))
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
    assert!(db.repository.list_all().await?.is_empty());
    Ok(())
}
