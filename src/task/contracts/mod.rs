//! Transfer contracts for the task boundary.
//!
//! These shapes decouple what callers send and receive from the stored
//! entity. Every conversion is an explicit field-by-field copy:
//!
//! - [`CreateTaskInput`] into [`NewTask`](crate::task::domain::NewTask), with
//!   completion fixed at zero and no identifier;
//! - [`UpdateTaskInput::apply_to`] overwriting an existing
//!   [`Task`](crate::task::domain::Task) while keeping its identifier;
//! - [`TaskView`] from a `Task`.

mod input;
mod view;

pub use input::{CreateTaskInput, UpdateTaskInput};
pub use view::TaskView;
