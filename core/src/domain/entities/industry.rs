use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use mule_shared::validation;

use crate::errors::ValidationError;
use crate::repositories::{Collection, Entity};

/// Industry; names are stored lower-cased and are unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

impl Industry {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ObjectId::new(),
            name: normalize_name(name)?,
        })
    }
}

/// Validates and lower-cases an industry name
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    if !validation::not_empty(name) {
        return Err(ValidationError::invalid("name"));
    }
    Ok(name.to_lowercase())
}

impl Entity for Industry {
    const COLLECTION: Collection = Collection::Industries;

    fn id(&self) -> ObjectId {
        self.id
    }
}
