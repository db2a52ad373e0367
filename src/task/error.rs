//! Field-level validation errors for task inputs.
//!
//! Uses `thiserror` for typed variants that callers can inspect and render
//! without parsing messages.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Input field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    /// Task title.
    Title,
    /// Optional task description.
    Description,
    /// Expiry timestamp.
    ExpiryDate,
    /// Completion percentage.
    PercentComplete,
}

impl TaskField {
    /// Returns the field name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::ExpiryDate => "expiryDate",
            Self::PercentComplete => "percentComplete",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The title is empty.
    #[error("Title is required.")]
    TitleRequired,

    /// The title exceeds the configured length.
    #[error("Title must be {max} characters or fewer. You entered {actual} characters.")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },

    /// The description exceeds the configured length.
    #[error("Description must be {max} characters or fewer. You entered {actual} characters.")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },

    /// The expiry date is not strictly after the validation instant.
    #[error("Expiry date must be in the future.")]
    ExpiryDateNotInFuture,

    /// The completion percentage lies outside `0..=100`.
    #[error("Percent complete must be between 0 and 100. You entered {0}.")]
    PercentCompleteOutOfRange(i32),
}

impl FieldError {
    /// Returns the field the violated rule belongs to.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::TitleRequired | Self::TitleTooLong { .. } => TaskField::Title,
            Self::DescriptionTooLong { .. } => TaskField::Description,
            Self::ExpiryDateNotInFuture => TaskField::ExpiryDate,
            Self::PercentCompleteOutOfRange(_) => TaskField::PercentComplete,
        }
    }
}

/// Non-empty set of violated rules for one input value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", format_errors(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn format_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {error}", error.field()))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

impl ValidationErrors {
    /// Turns collected rule violations into a validation outcome.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` when `errors` is non-empty.
    pub fn check(errors: Vec<FieldError>) -> ValidationResult<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }

    /// Iterates over the violations in rule order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` when no rule was violated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` when at least one violation concerns `field`.
    #[must_use]
    pub fn contains(&self, field: TaskField) -> bool {
        self.errors.iter().any(|error| error.field() == field)
    }

    /// Returns the distinct fields with violations, in field order.
    #[must_use]
    pub fn fields(&self) -> Vec<TaskField> {
        let mut fields: Vec<TaskField> = self.errors.iter().map(FieldError::field).collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    /// Groups messages by wire field name.
    #[must_use]
    pub fn to_field_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            map.entry(error.field().as_str().to_owned())
                .or_default()
                .push(error.to_string());
        }
        map
    }

    /// Consumes the set, returning the individual violations.
    #[must_use]
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
