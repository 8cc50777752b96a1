use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use mule_shared::validation;

use crate::errors::ValidationError;
use crate::repositories::{Collection, Entity};

/// Supporting document (CV, certificate, ...) owned by another entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Unique across documents
    pub url: String,
    pub doc_type: String,
    pub owner_type: String,
    pub owner_id: ObjectId,
}

impl Document {
    pub fn new(
        owner_id: ObjectId,
        url: impl Into<String>,
        doc_type: impl Into<String>,
        owner_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let document = Self {
            id: ObjectId::new(),
            url: url.into(),
            doc_type: doc_type.into(),
            owner_type: owner_type.into(),
            owner_id,
        };

        let required = [
            ("url", &document.url),
            ("doc_type", &document.doc_type),
            ("owner_type", &document.owner_type),
        ];
        for (field, value) in required {
            if !validation::not_empty(value) {
                return Err(ValidationError::invalid(field));
            }
        }
        Ok(document)
    }
}

impl Entity for Document {
    const COLLECTION: Collection = Collection::Documents;

    fn id(&self) -> ObjectId {
        self.id
    }
}
