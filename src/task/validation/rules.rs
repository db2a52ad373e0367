//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one field. A rule returns the violation
//! it detected, or `None` when the value is acceptable.

use crate::task::{error::FieldError, ports::validator::ValidationConfig};
use chrono::{DateTime, Utc};

/// Lowest accepted completion percentage.
pub const MIN_PERCENT_COMPLETE: i32 = 0;

/// Highest accepted completion percentage.
pub const MAX_PERCENT_COMPLETE: i32 = 100;

/// Checks that the title has visible content and is within the configured
/// length. A title of only whitespace counts as missing.
///
/// # Examples
///
/// ```
/// use todo_backend::task::error::FieldError;
/// use todo_backend::task::ports::validator::ValidationConfig;
/// use todo_backend::task::validation::rules::validate_title;
///
/// let config = ValidationConfig::default();
/// assert_eq!(validate_title("", &config), Some(FieldError::TitleRequired));
/// assert_eq!(validate_title("  ", &config), Some(FieldError::TitleRequired));
/// assert_eq!(validate_title("Pay bills", &config), None);
/// ```
#[must_use]
pub fn validate_title(title: &str, config: &ValidationConfig) -> Option<FieldError> {
    if title.trim().is_empty() {
        return Some(FieldError::TitleRequired);
    }

    let actual = title.chars().count();
    if actual > config.max_title_length {
        return Some(FieldError::TitleTooLong {
            max: config.max_title_length,
            actual,
        });
    }

    None
}

/// Checks the description length when a description is present.
#[must_use]
pub fn validate_description(
    description: Option<&str>,
    config: &ValidationConfig,
) -> Option<FieldError> {
    let actual = description?.chars().count();
    (actual > config.max_description_length).then_some(FieldError::DescriptionTooLong {
        max: config.max_description_length,
        actual,
    })
}

/// Checks that the expiry lies strictly after `now`.
#[must_use]
pub fn validate_expiry_date(expiry_date: DateTime<Utc>, now: DateTime<Utc>) -> Option<FieldError> {
    (expiry_date <= now).then_some(FieldError::ExpiryDateNotInFuture)
}

/// Checks that the completion percentage lies within `0..=100`.
#[must_use]
pub fn validate_percent_complete(percent: i32) -> Option<FieldError> {
    let in_range = (MIN_PERCENT_COMPLETE..=MAX_PERCENT_COMPLETE).contains(&percent);
    (!in_range).then_some(FieldError::PercentCompleteOutOfRange(percent))
}
