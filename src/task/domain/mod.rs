//! Domain model for to-do tasks.
//!
//! Holds the task entity and the due-soon selection policy. Nothing here
//! touches storage or transport concerns.

mod ids;
mod incoming;
mod task;

pub use ids::TaskId;
pub use incoming::{DayRange, IncomingWindow, TaskFilter};
pub use task::{NewTask, PERCENT_DONE, PersistedTaskData, Task};
