//! To-do task management.
//!
//! Tasks carry a title, an optional description, an expiry date, and a
//! completion percentage. This module implements creating, reading,
//! replacing, completing, and deleting them, plus the derived "incoming"
//! view of tasks due soon. Inputs are validated before any mutation reaches
//! storage. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Transfer contracts in [`contracts`]
//! - Validation errors in [`error`] and rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - REST response mapping in [`api`]

pub mod adapters;
pub mod api;
pub mod contracts;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
