//! Task input validation.
//!
//! Individual rules live in [`rules`]; [`DefaultTaskInputValidator`] combines
//! them into the create and update rule sets.

pub mod rules;
pub mod service;

pub use service::DefaultTaskInputValidator;
