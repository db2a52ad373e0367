//! To-do task backend.
//!
//! This crate provides the core of a task ("to-do item") management backend:
//! the business rules for task lifecycle and completion, the "incoming"
//! selection of tasks that are due soon, and the input-validation contracts
//! that gate every mutation.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task entity, validation, service layer, and persistence
//!   adapters
//!
//! # Logging
//!
//! Operations emit structured [`tracing`] events. The library installs no
//! subscriber; embedding binaries choose one.

pub mod task;
