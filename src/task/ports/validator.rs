//! Validator port for task inputs.

use crate::task::{
    contracts::{CreateTaskInput, UpdateTaskInput},
    error::ValidationResult,
};

/// Port for validating task inputs before any mutation is attempted.
///
/// Implementations should:
/// - collect every violated rule before returning (not fail-fast);
/// - be free of side effects and independent of stored state.
pub trait TaskInputValidator: Send + Sync {
    /// Validates a create input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`](crate::task::error::ValidationErrors)
    /// listing every violated rule.
    fn validate_create(&self, input: &CreateTaskInput) -> ValidationResult<()>;

    /// Validates an update input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`](crate::task::error::ValidationErrors)
    /// listing every violated rule.
    fn validate_update(&self, input: &UpdateTaskInput) -> ValidationResult<()>;
}

/// Configuration for task validation rules.
///
/// Length limits count Unicode scalar values (`char`s), not bytes.
///
/// # Examples
///
/// ```
/// use todo_backend::task::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_title_length, 100);
/// assert_eq!(config.max_description_length, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Maximum description length in characters.
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: 100,
            max_description_length: 500,
        }
    }
}

impl ValidationConfig {
    /// Creates a strict configuration with reduced limits.
    ///
    /// Useful for clients with constrained displays.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 50,
            max_description_length: 200,
        }
    }
}
