//! Problem-details bodies for client and server errors.

use crate::task::error::ValidationErrors;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Machine-readable error body in the style of RFC 9457.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short human-readable summary.
    pub title: String,
    /// HTTP status code, serialized as a number.
    #[serde(with = "status_code")]
    pub status: StatusCode,
    /// Messages grouped by input field, for validation failures.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ProblemDetails {
    /// Builds the body for a rejected input.
    #[must_use]
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.5.1".to_owned(),
            title: "One or more validation errors occurred.".to_owned(),
            status: StatusCode::BAD_REQUEST,
            errors: errors.to_field_map(),
        }
    }

    /// Builds the body for an infrastructure failure. Internal detail is not
    /// exposed to the client.
    #[must_use]
    pub fn internal_error() -> Self {
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.6.1".to_owned(),
            title: "An error occurred while processing your request.".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            errors: BTreeMap::new(),
        }
    }
}

mod status_code {
    use http::StatusCode;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(status.as_u16())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StatusCode, D::Error> {
        let code = u16::deserialize(deserializer)?;
        StatusCode::from_u16(code).map_err(D::Error::custom)
    }
}
