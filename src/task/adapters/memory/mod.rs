//! In-memory adapter implementations.
//!
//! Simple, thread-safe storage suitable for tests and embedding without a
//! database.

mod task;

pub use task::InMemoryTaskRepository;
