//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message returned for every failure whose detail must not reach the caller
pub const GENERIC_MESSAGE: &str = "Oops, something went wrong, please try again.";

/// Standard error response returned alongside (or instead of) a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (offending field, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Opaque failure response
    pub fn generic() -> Self {
        Self::new(error_codes::GENERIC_FAILURE, GENERIC_MESSAGE)
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes reported to callers
pub mod error_codes {
    pub const GENERIC_FAILURE: &str = "GENERIC_FAILURE";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INPUT_ERROR: &str = "INPUT_ERROR";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_response() {
        let response = ErrorResponse::generic();
        assert_eq!(response.error, "GENERIC_FAILURE");
        assert_eq!(response.message, GENERIC_MESSAGE);
        assert!(response.details.is_none());
    }

    #[test]
    fn test_add_detail_serializes_value() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid field 'Email'.")
            .add_detail("field", "Email");

        let details = response.details.unwrap();
        assert_eq!(details["field"], serde_json::json!("Email"));

        let json = serde_json::to_value(ErrorResponse::generic()).unwrap();
        assert!(json.get("details").is_none());
    }
}
