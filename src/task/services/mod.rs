//! Application services for task management.

mod todo;

pub use todo::{TaskService, TaskServiceError, TaskServiceResult};
