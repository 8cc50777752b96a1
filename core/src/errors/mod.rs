//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{AuthError, StoreError, ValidationError};

use mule_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller input that is well formed but not acceptable (role enforcement
    /// mismatch, duplicate unique value, unsupported request)
    #[error("{message}")]
    Input { message: String },

    /// Opaque failure; the cause is logged, never returned
    #[error("Oops, something went wrong, please try again.")]
    Generic,

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// A multi-step operation committed `completed` and then failed on `failed`.
    /// Committed steps are not rolled back.
    #[error("{operation} partially failed: '{completed}' committed, '{failed}' failed")]
    PartialFailure {
        operation: String,
        completed: String,
        failed: String,
    },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input { message: message.into() }
    }

    pub fn internal(message: impl ToString) -> Self {
        Self::Internal { message: message.to_string() }
    }

    pub fn partial(
        operation: impl Into<String>,
        completed: impl Into<String>,
        failed: impl Into<String>,
    ) -> Self {
        Self::PartialFailure {
            operation: operation.into(),
            completed: completed.into(),
            failed: failed.into(),
        }
    }

    pub fn invalid_token() -> Self {
        Self::Auth(AuthError::InvalidToken)
    }

    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self::Validation(ValidationError::invalid(field))
    }

    pub fn required_field(field: impl Into<String>) -> Self {
        Self::Validation(ValidationError::required(field))
    }
}

impl From<bson::ser::Error> for DomainError {
    fn from(err: bson::ser::Error) -> Self {
        Self::Store(err.into())
    }
}

impl From<bson::de::Error> for DomainError {
    fn from(err: bson::de::Error) -> Self {
        Self::Store(err.into())
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Auth(AuthError::InvalidToken) => {
                ErrorResponse::new(error_codes::INVALID_TOKEN, self.to_string())
            }
            DomainError::Auth(AuthError::InvalidCredentials) => {
                ErrorResponse::new(error_codes::INVALID_CREDENTIALS, self.to_string())
            }
            DomainError::Validation(err) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, err.to_string())
                    .add_detail("field", err.field())
            }
            DomainError::Input { message } => ErrorResponse::new(error_codes::INPUT_ERROR, message),
            DomainError::Generic
            | DomainError::Internal { .. }
            | DomainError::PartialFailure { .. }
            | DomainError::Store(_) => ErrorResponse::generic(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
