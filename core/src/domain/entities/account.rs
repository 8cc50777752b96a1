//! Account entity: the identity record behind every token.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use mule_shared::validation;

use crate::errors::ValidationError;
use crate::repositories::{Collection, Entity};

/// Access levels above this value denote a system administrator
pub const SYSTEM_ACCESS_LEVEL: i32 = 5;

/// Minimum number of consecutive letters in a name or surname
pub const MIN_NAME_LETTERS: usize = 3;

/// Persisted account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Lower-cased, unique across accounts
    pub email: String,

    /// bcrypt hash
    pub password: String,

    pub name: String,

    pub surname: String,

    pub access_level: i32,

    /// Hunter profiles are not managed here; the reference is only carried
    #[serde(default)]
    pub hunter_id: Option<ObjectId>,

    #[serde(default)]
    pub recruit_id: Option<ObjectId>,
}

impl Account {
    /// Creates a regular account with no linked profiles
    pub fn new(
        email: &str,
        password_hash: String,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            email: email.to_lowercase(),
            password: password_hash,
            name: name.into(),
            surname: surname.into(),
            access_level: 0,
            hunter_id: None,
            recruit_id: None,
        }
    }

    pub fn is_system(&self) -> bool {
        self.access_level > SYSTEM_ACCESS_LEVEL
    }

    pub fn is_recruit(&self) -> bool {
        self.recruit_id.is_some()
    }

    pub fn is_hunter(&self) -> bool {
        self.hunter_id.is_some()
    }

    /// Verifies a plain-text password against the stored hash.
    /// A malformed hash never verifies.
    pub fn check_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.password).unwrap_or(false)
    }
}

impl Entity for Account {
    const COLLECTION: Collection = Collection::Accounts;

    fn id(&self) -> ObjectId {
        self.id
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if validation::is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::invalid("Email"))
    }
}

pub fn validate_password(password: &str, min_length: usize) -> Result<(), ValidationError> {
    if validation::has_min_chars(password, min_length) {
        Ok(())
    } else {
        Err(ValidationError::TooShort {
            field: "Password".to_string(),
            min: min_length,
        })
    }
}

/// `field` is the display name reported on failure ("Name", "Surname")
pub fn validate_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if validation::is_valid_name(value) {
        Ok(())
    } else {
        Err(ValidationError::TooShort {
            field: field.to_string(),
            min: MIN_NAME_LETTERS,
        })
    }
}
