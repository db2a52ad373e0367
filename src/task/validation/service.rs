//! Validation service implementation.
//!
//! Provides the default implementation of the [`TaskInputValidator`] port,
//! combining the individual rules into the create and update rule sets.

use crate::task::{
    contracts::{CreateTaskInput, UpdateTaskInput},
    error::{ValidationErrors, ValidationResult},
    ports::validator::{TaskInputValidator, ValidationConfig},
    validation::rules,
};
use mockable::Clock;
use std::sync::Arc;

/// Default implementation of the task input validator.
///
/// Applies every rule and reports all violations together. "Now" is read
/// from the injected clock each time an input is validated.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use mockable::{Clock, DefaultClock};
/// use std::sync::Arc;
/// use todo_backend::task::contracts::CreateTaskInput;
/// use todo_backend::task::ports::validator::TaskInputValidator;
/// use todo_backend::task::validation::DefaultTaskInputValidator;
///
/// let validator = DefaultTaskInputValidator::new(Arc::new(DefaultClock));
/// let tomorrow = DefaultClock.utc() + TimeDelta::days(1);
/// assert!(validator.validate_create(&CreateTaskInput::new("Pay bills", tomorrow)).is_ok());
/// assert!(validator.validate_create(&CreateTaskInput::new("", tomorrow)).is_err());
/// ```
#[derive(Debug)]
pub struct DefaultTaskInputValidator<C>
where
    C: Clock + Send + Sync,
{
    config: ValidationConfig,
    clock: Arc<C>,
}

impl<C> Clone for DefaultTaskInputValidator<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> DefaultTaskInputValidator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a validator with default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(clock, ValidationConfig::default())
    }

    /// Creates a validator with custom configuration.
    #[must_use]
    pub const fn with_config(clock: Arc<C>, config: ValidationConfig) -> Self {
        Self { config, clock }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl<C> TaskInputValidator for DefaultTaskInputValidator<C>
where
    C: Clock + Send + Sync,
{
    fn validate_create(&self, input: &CreateTaskInput) -> ValidationResult<()> {
        let now = self.clock.utc();
        let errors = [
            rules::validate_title(&input.title, &self.config),
            rules::validate_description(input.description.as_deref(), &self.config),
            rules::validate_expiry_date(input.expiry_date, now),
        ];
        ValidationErrors::check(errors.into_iter().flatten().collect())
    }

    fn validate_update(&self, input: &UpdateTaskInput) -> ValidationResult<()> {
        let now = self.clock.utc();
        let errors = [
            rules::validate_title(&input.title, &self.config),
            rules::validate_description(input.description.as_deref(), &self.config),
            rules::validate_expiry_date(input.expiry_date, now),
            rules::validate_percent_complete(input.percent_complete),
        ];
        ValidationErrors::check(errors.into_iter().flatten().collect())
    }
}
