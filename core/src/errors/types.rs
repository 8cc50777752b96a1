//! Error types for validation, authentication and storage operations

use thiserror::Error;

/// Field validation errors, always naming the offending field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{field}' field is required.")]
    RequiredField { field: String },

    #[error("Invalid field '{field}'.")]
    InvalidField { field: String },

    #[error("{field} must be at least {min} characters long.")]
    TooShort { field: String, min: usize },

    #[error("{field} must be between {min} and {max}.")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredField { field: field.into() }
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidField { field: field.into() }
    }

    /// Name of the field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::RequiredField { field }
            | Self::InvalidField { field }
            | Self::TooShort { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

/// Authentication errors
///
/// Deliberately coarse: a caller can never tell an unknown email from a wrong
/// password, or a forged token from one whose account was deleted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid token.")]
    InvalidToken,
}

/// Storage-layer errors raised by `DocumentStore` backends
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown collection '{collection}'")]
    UnknownCollection { collection: String },

    #[error("No matching document in '{collection}'")]
    NotFound { collection: String },

    #[error("Document serialization failed: {message}")]
    Serialization { message: String },

    #[error("Storage backend failure: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn not_found(collection: impl Into<String>) -> Self {
        Self::NotFound { collection: collection.into() }
    }

    pub fn unknown_collection(collection: impl Into<String>) -> Self {
        Self::UnknownCollection { collection: collection.into() }
    }

    pub fn backend(message: impl ToString) -> Self {
        Self::Backend { message: message.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Nothing matched, either because no document did or because the
    /// collection was never written to
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::UnknownCollection { .. })
    }
}

impl From<bson::ser::Error> for StoreError {
    fn from(err: bson::ser::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}

impl From<bson::de::Error> for StoreError {
    fn from(err: bson::de::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}
