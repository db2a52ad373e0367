//! Transport-neutral mapping from task operations to REST responses.
//!
//! [`TaskApi`] exposes one method per endpoint of the `/todos` resource and
//! turns service outcomes into an [`ApiResponse`]: status code, optional
//! `Location` header and optional JSON body. Routing and wire framing belong
//! to whichever HTTP stack embeds it.
//!
//! | Endpoint | Success | Failure |
//! |---|---|---|
//! | `GET /todos` | 200 | 500 |
//! | `GET /todos/{id}` | 200 | 404, 500 |
//! | `GET /todos/incoming` | 200 | 500 |
//! | `POST /todos` | 201 | 400, 500 |
//! | `PUT /todos/{id}` | 204 | 400, 404, 500 |
//! | `PATCH /todos/{id}/complete?percent=N` | 204 | 404, 500 |
//! | `PATCH /todos/{id}/done` | 204 | 404, 500 |
//! | `DELETE /todos/{id}` | 204 | 404, 500 |

mod problem;

pub use problem::ProblemDetails;

use crate::task::{
    contracts::{CreateTaskInput, UpdateTaskInput},
    domain::TaskId,
    ports::{TaskInputValidator, TaskRepository},
    services::{TaskService, TaskServiceError, TaskServiceResult},
};
use http::StatusCode;
use mockable::Clock;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Base path of the task resource.
pub const TODOS_PATH: &str = "/todos";

/// Response produced for one endpoint invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Value for the `Location` header, if any.
    pub location: Option<String>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Creates a response with no body.
    #[must_use]
    pub const fn empty(status: StatusCode) -> Self {
        Self {
            status,
            location: None,
            body: None,
        }
    }

    /// Serializes `body` into a JSON response.
    ///
    /// Falls back to a 500 response if the body cannot be serialized.
    #[must_use]
    pub fn json(status: StatusCode, body: &impl Serialize) -> Self {
        to_body(body).map_or_else(
            || Self::problem(&ProblemDetails::internal_error()),
            |value| Self {
                status,
                location: None,
                body: Some(value),
            },
        )
    }

    /// Builds a problem-details response using the problem's status.
    ///
    /// The body is omitted if the problem cannot be serialized.
    #[must_use]
    pub fn problem(problem: &ProblemDetails) -> Self {
        Self {
            status: problem.status,
            location: None,
            body: to_body(problem),
        }
    }

    /// Attaches a `Location` header value.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Endpoint facade over a [`TaskService`].
pub struct TaskApi<R, V, C>
where
    R: TaskRepository,
    V: TaskInputValidator,
    C: Clock + Send + Sync,
{
    service: TaskService<R, V, C>,
}

impl<R, V, C> Clone for TaskApi<R, V, C>
where
    R: TaskRepository,
    V: TaskInputValidator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<R, V, C> TaskApi<R, V, C>
where
    R: TaskRepository,
    V: TaskInputValidator,
    C: Clock + Send + Sync,
{
    /// Wraps a task service.
    #[must_use]
    pub const fn new(service: TaskService<R, V, C>) -> Self {
        Self { service }
    }

    /// `GET /todos`
    pub async fn get_all(&self) -> ApiResponse {
        respond(self.service.list_all().await, |views| {
            ApiResponse::json(StatusCode::OK, &views)
        })
    }

    /// `GET /todos/{id}`
    pub async fn get(&self, id: TaskId) -> ApiResponse {
        respond(self.service.find_by_id(id).await, |found| match found {
            Some(view) => ApiResponse::json(StatusCode::OK, &view),
            None => ApiResponse::empty(StatusCode::NOT_FOUND),
        })
    }

    /// `GET /todos/incoming`
    pub async fn get_incoming(&self) -> ApiResponse {
        respond(self.service.list_incoming().await, |views| {
            ApiResponse::json(StatusCode::OK, &views)
        })
    }

    /// `POST /todos`
    pub async fn create(&self, input: CreateTaskInput) -> ApiResponse {
        respond(self.service.create(input).await, |view| {
            let location = format!("{TODOS_PATH}/{}", view.id);
            ApiResponse::json(StatusCode::CREATED, &view).with_location(location)
        })
    }

    /// `PUT /todos/{id}`
    pub async fn update(&self, id: TaskId, input: UpdateTaskInput) -> ApiResponse {
        respond(self.service.update(id, input).await, no_content_or_not_found)
    }

    /// `PATCH /todos/{id}/complete?percent=N`
    pub async fn set_complete(&self, id: TaskId, percent: i32) -> ApiResponse {
        respond(
            self.service.set_percent_complete(id, percent).await,
            no_content_or_not_found,
        )
    }

    /// `PATCH /todos/{id}/done`
    pub async fn mark_done(&self, id: TaskId) -> ApiResponse {
        respond(self.service.mark_done(id).await, no_content_or_not_found)
    }

    /// `DELETE /todos/{id}`
    pub async fn delete(&self, id: TaskId) -> ApiResponse {
        respond(self.service.delete(id).await, no_content_or_not_found)
    }
}

fn respond<T>(result: TaskServiceResult<T>, on_success: impl FnOnce(T) -> ApiResponse) -> ApiResponse {
    match result {
        Ok(value) => on_success(value),
        Err(TaskServiceError::Validation(errors)) => {
            ApiResponse::problem(&ProblemDetails::validation(&errors))
        }
        Err(TaskServiceError::Repository(err)) => {
            error!(error = %err, "task repository failure");
            ApiResponse::problem(&ProblemDetails::internal_error())
        }
    }
}

fn no_content_or_not_found(found: bool) -> ApiResponse {
    if found {
        ApiResponse::empty(StatusCode::NO_CONTENT)
    } else {
        ApiResponse::empty(StatusCode::NOT_FOUND)
    }
}

fn to_body(body: &impl Serialize) -> Option<Value> {
    serde_json::to_value(body)
        .inspect_err(|err| error!(error = %err, "failed to serialize response body"))
        .ok()
}
